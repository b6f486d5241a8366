//! Output Path Module
//!
//! 入力パスから既定の出力パスを導出する。

use std::path::{Path, PathBuf};

/// 入力パスから出力JSONのパスを導出する
///
/// ファイル名の最後の`.`以降（拡張子）を`json`に置き換えます。
/// ディレクトリ部分は変更しません。
///
/// | 入力 | 出力 |
/// |------|------|
/// | `data.xlsx` | `data.json` |
/// | `a.tar.xlsx` | `a.tar.json` |
/// | `dir.v2/data.xlsx` | `dir.v2/data.json` |
/// | `data`（拡張子なし） | `data.json` |
/// | `.hidden` | `.hidden.json` |
///
/// # 使用例
///
/// ```rust
/// use std::path::Path;
/// use xlsx2json::derive_output_path;
///
/// assert_eq!(derive_output_path(Path::new("items.xlsx")), Path::new("items.json"));
/// ```
pub fn derive_output_path(source: &Path) -> PathBuf {
    source.with_extension("json")
}
