//! JSON Writer Implementation
//!
//! `RecordSet`を2スペースインデントのJSON配列としてシリアライズし、
//! ファイルへ書き込みます。

use crate::error::XlsxToJsonError;
use crate::types::RecordSet;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};

/// JSON形式のライター
///
/// 出力は以下の形式に固定されます。
///
/// - Recordの配列、各Recordは列順を保ったオブジェクト
/// - 2スペースインデント
/// - 非ASCII文字はエスケープせずUTF-8のまま出力
/// - 末尾に改行を付けない
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct JsonWriter;

impl JsonWriter {
    /// `RecordSet`をJSONバイト列にシリアライズ
    pub fn to_bytes(&self, records: &RecordSet) -> Result<Vec<u8>, XlsxToJsonError> {
        Ok(serde_json::to_vec_pretty(records)?)
    }

    /// `RecordSet`をライターへ出力
    pub fn render<W: Write>(
        &self,
        records: &RecordSet,
        writer: &mut W,
    ) -> Result<(), XlsxToJsonError> {
        let bytes = self.to_bytes(records)?;
        writer.write_all(&bytes)?;
        writer.flush()?;
        Ok(())
    }

    /// バイト列を`path`へ書き込む（既存ファイルは上書き）
    ///
    /// 同じディレクトリの一時ファイルへ書き込んでからリネームするため、
    /// 失敗時に不完全なファイルが残ることはなく、既存ファイルも変更されません。
    /// 既存ファイルのパーミッションは引き継ぎ、新規ファイルは通常の作成と同じく
    /// umaskに従います。`path`がシンボリックリンクの場合はリンク先を上書きします。
    pub fn write_file(&self, path: &Path, bytes: &[u8]) -> Result<(), XlsxToJsonError> {
        let write_error = |source: io::Error| XlsxToJsonError::Write {
            path: path.to_path_buf(),
            source,
        };

        let target = resolve_target(path);
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = create_temp_in(dir).map_err(write_error)?;
        if let Ok(meta) = fs::metadata(&target) {
            temp.as_file()
                .set_permissions(meta.permissions())
                .map_err(write_error)?;
        }
        temp.write_all(bytes).map_err(write_error)?;
        temp.as_file().sync_all().map_err(write_error)?;
        temp.persist(&target).map_err(|e| write_error(e.error))?;

        Ok(())
    }
}

/// シンボリックリンクであればリンク先の実パスを返す
///
/// リンク切れの場合はリンク自体を置き換えます。
fn resolve_target(path: &Path) -> PathBuf {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => {
            fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
        }
        _ => path.to_path_buf(),
    }
}

/// 0o666（umask適用後）で一時ファイルを作成
fn create_temp_in(dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(".xlsx2json");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}
