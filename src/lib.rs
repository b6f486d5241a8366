//! xlsx2json - Pure-Rust spreadsheet to JSON records converter
//!
//! スプレッドシート（XLSX/XLSM/XLSB/XLS/ODS）の1シートを読み込み、
//! ヘッダー行を列名とするレコードの配列としてJSONファイルに書き出します。
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // items.xlsx の先頭シートを items.json に変換
//!     let written = xlsx2json::convert(Path::new("items.xlsx"), None, None)?;
//!     println!("{}", written.display());
//!     Ok(())
//! }
//! ```
//!
//! # Custom Configuration
//!
//! ```rust,no_run
//! use std::path::Path;
//! use xlsx2json::{ConverterBuilder, DateFormat, SheetSelector};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let converter = ConverterBuilder::new()
//!         .with_sheet_selector(SheetSelector::Name("Table 1".to_string()))
//!         .with_output_path("annex.json")
//!         .with_date_format(DateFormat::Custom("%d/%m/%Y".to_string()))
//!         .build()?;
//!
//!     converter.convert(Path::new("Ch_2_Annex2B.xlsx"))?;
//!     Ok(())
//! }
//! ```
//!
//! # 出力形式
//!
//! ```json
//! [
//!   {
//!     "name": "pen",
//!     "qty": 10
//!   },
//!   {
//!     "name": "cup",
//!     "qty": 0
//!   }
//! ]
//! ```

mod api;
mod builder;
mod error;
mod formatter;
mod output;
mod parser;
mod path;
mod types;

use std::path::{Path, PathBuf};

// 公開API
pub use api::{DateFormat, SheetSelector};
pub use builder::{Converter, ConverterBuilder};
pub use error::XlsxToJsonError;
pub use path::derive_output_path;
pub use types::{CellValue, Record, RecordSet};

/// スプレッドシートをJSONファイルに変換する
///
/// * `source` - 入力スプレッドシートのパス
/// * `sheet` - シート選択（`None`の場合は先頭シート）
/// * `output` - 出力先（`None`の場合は`derive_output_path(source)`）
///
/// 書き込んだ出力ファイルのパスを返します。
pub fn convert(
    source: &Path,
    sheet: Option<SheetSelector>,
    output: Option<&Path>,
) -> Result<PathBuf, XlsxToJsonError> {
    let mut builder = ConverterBuilder::new();
    if let Some(sheet) = sheet {
        builder = builder.with_sheet_selector(sheet);
    }
    if let Some(output) = output {
        builder = builder.with_output_path(output);
    }

    builder.build()?.convert(source)
}

/// ワークブック内のシート名を順に取得する
pub fn sheet_names(source: &Path) -> Result<Vec<String>, XlsxToJsonError> {
    Ok(parser::WorkbookParser::open_path(source)?.sheet_names())
}
