//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use std::path::PathBuf;
use thiserror::Error;

/// xlsx2jsonクレート全体で使用するエラー型
///
/// スプレッドシートの読み込み、シート選択、JSONへの変換、ファイル書き込みの
/// 各段階で発生するすべてのエラーを統一的に扱います。
/// 変換処理はいずれのエラーも内部で回復せず、そのまま呼び出し元へ返します。
///
/// # エラーの種類
///
/// - `SourceNotFound`: 入力ファイルが存在しない
/// - `Io`: 入力ファイルの読み込み中に発生したI/Oエラー
/// - `Parse`: スプレッドシートとして解析できない（calamine由来）
/// - `SheetNotFound`: 指定したシートがワークブックに存在しない
/// - `Write`: 出力ファイルの書き込みに失敗した
/// - `Serialize`: JSONへのシリアライズに失敗した
/// - `Config`: 設定の検証に失敗した
///
/// # 使用例
///
/// ```rust,no_run
/// use std::path::Path;
/// use xlsx2json::{ConverterBuilder, XlsxToJsonError};
///
/// let converter = ConverterBuilder::new().build().unwrap();
/// match converter.convert(Path::new("missing.xlsx")) {
///     Err(XlsxToJsonError::SourceNotFound { path }) => {
///         eprintln!("not found: {}", path.display());
///     }
///     Err(e) => eprintln!("{}", e),
///     Ok(out) => println!("{}", out.display()),
/// }
/// ```
#[derive(Error, Debug)]
pub enum XlsxToJsonError {
    /// 入力ファイルが存在しない
    #[error("Source file not found: {}", .path.display())]
    SourceNotFound {
        /// 指定された入力パス
        path: PathBuf,
    },

    /// 入力側のI/O操作中に発生したエラー
    ///
    /// `#[from]`属性により、`std::io::Error`から自動的に変換されます。
    /// 出力側の失敗は`Write`で報告されます。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// スプレッドシートの解析中に発生したエラー
    ///
    /// ファイル形式が不正、破損したファイル、サポートされていない形式などが
    /// 原因となります。
    #[error("Failed to parse spreadsheet: {0}")]
    Parse(#[from] calamine::Error),

    /// 指定したシートが見つからない
    ///
    /// シート名が一致しない場合、またはインデックスが範囲外の場合に発生します。
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// 出力ファイルの書き込みに失敗した
    #[error("Failed to write '{}': {}", .path.display(), .source)]
    Write {
        /// 出力先パス
        path: PathBuf,
        /// 原因となったI/Oエラー
        #[source]
        source: std::io::Error,
    },

    /// JSONシリアライズエラー
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// 設定の検証に失敗したエラー
    ///
    /// `ConverterBuilder::build()`時に設定を検証し、無効な設定が検出された
    /// 場合に発生します。
    ///
    /// # 例
    ///
    /// ```rust,no_run
    /// use xlsx2json::{ConverterBuilder, DateFormat, XlsxToJsonError};
    ///
    /// let result = ConverterBuilder::new()
    ///     .with_date_format(DateFormat::Custom(String::new()))
    ///     .build();
    ///
    /// if let Err(XlsxToJsonError::Config(msg)) = result {
    ///     println!("設定エラー: {}", msg);
    /// }
    /// ```
    #[error("Configuration error: {0}")]
    Config(String),
}
