//! Builder Module
//!
//! Fluent Builder APIを提供し、`Converter`インスタンスを段階的に構築する。

use crate::api::{DateFormat, SheetSelector};
use crate::error::XlsxToJsonError;
use crate::formatter::{validate_date_format, CellFormatter};
use crate::output::JsonWriter;
use crate::parser::WorkbookParser;
use crate::path::derive_output_path;
use crate::types::RecordSet;
use std::io::{Read, Seek, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// 変換処理の設定を保持する内部構造体
#[derive(Debug, Clone, Default)]
pub(crate) struct ConversionConfig {
    /// シート選択方式（Noneの場合は先頭シート）
    pub sheet_selector: Option<SheetSelector>,

    /// 出力先パス（Noneの場合は入力パスから導出）
    pub output_path: Option<PathBuf>,

    /// 日付形式
    pub date_format: DateFormat,
}

/// Fluent Builder APIを提供する構造体
///
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみをオーバーライドできます。
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsx2json::{ConverterBuilder, SheetSelector};
///
/// # fn main() -> Result<(), xlsx2json::XlsxToJsonError> {
/// let converter = ConverterBuilder::new()
///     .with_sheet_selector(SheetSelector::Name("Table 1".to_string()))
///     .with_output_path("annex.json")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ConverterBuilder {
    /// 内部設定（構築中）
    config: ConversionConfig,
}

impl ConverterBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - シート選択: 先頭シート
    /// - 出力先: 入力パスの拡張子を`.json`に置き換えたパス
    /// - 日付形式: ISO 8601
    pub fn new() -> Self {
        Self::default()
    }

    /// 変換対象のシートを選択する
    ///
    /// ```rust,no_run
    /// use xlsx2json::{ConverterBuilder, SheetSelector};
    ///
    /// let builder = ConverterBuilder::new()
    ///     .with_sheet_selector(SheetSelector::Index(1));
    /// ```
    pub fn with_sheet_selector(mut self, selector: SheetSelector) -> Self {
        self.config.sheet_selector = Some(selector);
        self
    }

    /// 出力先のパスを指定する
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_path = Some(path.into());
        self
    }

    /// 日付の出力形式を指定する
    pub fn with_date_format(mut self, format: DateFormat) -> Self {
        self.config.date_format = format;
        self
    }

    /// 設定を検証し、`Converter`インスタンスを生成する
    ///
    /// # 発生し得るエラー
    ///
    /// * `XlsxToJsonError::Config(String)`: 設定の検証に失敗した場合
    ///   * カスタム日付形式が空、または不正な書式指定子を含む
    ///   * 出力先パスが空
    pub fn build(self) -> Result<Converter, XlsxToJsonError> {
        if let DateFormat::Custom(ref pattern) = self.config.date_format {
            validate_date_format(pattern)?;
        }

        if let Some(ref path) = self.config.output_path {
            if path.as_os_str().is_empty() {
                return Err(XlsxToJsonError::Config(
                    "Output path must not be empty".to_string(),
                ));
            }
        }

        Ok(Converter::new(self.config))
    }
}

/// 変換処理のファサード
///
/// スプレッドシートをJSONレコード配列に変換するためのメインエントリーポイントです。
/// 呼び出しごとにワークブックを開いて閉じるため、状態は共有されません。
///
/// # 使用例
///
/// ```rust,no_run
/// use std::path::Path;
/// use xlsx2json::ConverterBuilder;
///
/// # fn main() -> Result<(), xlsx2json::XlsxToJsonError> {
/// let converter = ConverterBuilder::new().build()?;
/// let written = converter.convert(Path::new("items.xlsx"))?;
/// assert_eq!(written, Path::new("items.json"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Converter {
    /// 変換設定
    config: ConversionConfig,

    /// セルフォーマッター
    formatter: CellFormatter,
}

impl Converter {
    pub(crate) fn new(config: ConversionConfig) -> Self {
        Self {
            formatter: CellFormatter::new(config.date_format.clone()),
            config,
        }
    }

    /// 出力先パスを解決する
    pub fn output_path_for(&self, source: &Path) -> PathBuf {
        self.config
            .output_path
            .clone()
            .unwrap_or_else(|| derive_output_path(source))
    }

    /// スプレッドシートを読み込み、`RecordSet`を返す（ファイルは書き込まない）
    pub fn to_records(&self, source: &Path) -> Result<RecordSet, XlsxToJsonError> {
        let mut parser = WorkbookParser::open_path(source)?;
        let sheet_name = parser.select_sheet(self.config.sheet_selector.as_ref())?;
        parser.extract_records(&sheet_name, &self.formatter)
    }

    /// スプレッドシートをJSONファイルに変換
    ///
    /// # 処理フロー
    ///
    /// 1. ワークブックを開き、シートを選択
    /// 2. ヘッダー行と各データ行から`RecordSet`を構築
    /// 3. メモリ上でJSONにシリアライズ
    /// 4. 出力先へ一括で書き込み（既存ファイルは置き換え）
    ///
    /// # 戻り値
    ///
    /// * `Ok(PathBuf)` - 書き込んだ出力ファイルのパス
    /// * `Err(XlsxToJsonError)` - いずれかの段階で失敗した場合（出力ファイルは作成されない）
    pub fn convert(&self, source: &Path) -> Result<PathBuf, XlsxToJsonError> {
        let output_path = self.output_path_for(source);

        let records = self.to_records(source)?;
        let bytes = JsonWriter.to_bytes(&records)?;
        JsonWriter.write_file(&output_path, &bytes)?;

        info!(
            source = %source.display(),
            output = %output_path.display(),
            sheet = %records.sheet_name(),
            rows = records.len(),
            "converted spreadsheet"
        );
        Ok(output_path)
    }

    /// リーダーから読み込んだスプレッドシートをJSONとしてライターへ出力
    ///
    /// 出力先パスの設定は使用しません。
    ///
    /// ```rust,no_run
    /// use std::io::Cursor;
    /// use xlsx2json::ConverterBuilder;
    ///
    /// # fn main() -> Result<(), xlsx2json::XlsxToJsonError> {
    /// let converter = ConverterBuilder::new().build()?;
    /// let excel_data: Vec<u8> = vec![]; // スプレッドシートのバイト列
    /// let mut json_output = Vec::new();
    /// converter.convert_reader(Cursor::new(excel_data), &mut json_output)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn convert_reader<R: Read + Seek, W: Write>(
        &self,
        input: R,
        mut output: W,
    ) -> Result<(), XlsxToJsonError> {
        let mut parser = WorkbookParser::from_reader(input)?;
        let sheet_name = parser.select_sheet(self.config.sheet_selector.as_ref())?;
        let records = parser.extract_records(&sheet_name, &self.formatter)?;

        JsonWriter.render(&records, &mut output)
    }

    /// リーダーから読み込んだスプレッドシートをJSON文字列に変換
    pub fn convert_to_string<R: Read + Seek>(&self, input: R) -> Result<String, XlsxToJsonError> {
        let mut buffer = Vec::new();
        self.convert_reader(input, &mut buffer)?;

        let result = String::from_utf8(buffer).map_err(|e| {
            XlsxToJsonError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })?;

        Ok(result)
    }
}
