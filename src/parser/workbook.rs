//! Parser Module
//!
//! calamineを使用したスプレッドシート解析の実装。
//! ワークブックを開き、シートを選択し、ヘッダー行と各データ行から`RecordSet`を構築します。

use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Range, Reader, Sheets};
use std::fs::File;
use std::io::{self, BufReader, Cursor, Read, Seek};
use std::path::Path;
use tracing::debug;

use crate::api::SheetSelector;
use crate::error::XlsxToJsonError;
use crate::formatter::CellFormatter;
use crate::types::{column_names, CellValue, Record, RecordSet};

/// ワークブックパーサー
///
/// calamineのラッパーとして、ワークブックレベルの操作を提供します。
/// 形式（XLSX/XLSM/XLSB/XLS/ODS）はcalamineが自動判定します。
/// パーサーがドロップされるとファイルハンドルも解放されます。
pub(crate) struct WorkbookParser<R: Read + Seek> {
    workbook: Sheets<R>,
}

impl WorkbookParser<BufReader<File>> {
    /// パスからワークブックを開く
    ///
    /// # 戻り値
    ///
    /// * `Ok(WorkbookParser)` - 読み込みに成功した場合
    /// * `Err(XlsxToJsonError::SourceNotFound)` - ファイルが存在しない場合
    /// * `Err(XlsxToJsonError::Io)` - ファイルを読み込めない場合（権限不足、ディレクトリなど）
    /// * `Err(XlsxToJsonError::Parse)` - スプレッドシートとして解析できない場合
    pub fn open_path(path: &Path) -> Result<Self, XlsxToJsonError> {
        // 読み込み可否をcalamineの解析エラーと区別して報告する
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(XlsxToJsonError::SourceNotFound {
                    path: path.to_path_buf(),
                });
            }
            Err(e) => return Err(XlsxToJsonError::Io(e)),
        };
        if !file.metadata()?.is_file() {
            return Err(XlsxToJsonError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("'{}' is not a regular file", path.display()),
            )));
        }

        debug!(path = %path.display(), "opening workbook");
        let workbook = open_workbook_auto(path)?;

        Ok(Self { workbook })
    }
}

impl WorkbookParser<Cursor<Vec<u8>>> {
    /// リーダーからワークブックを開く
    ///
    /// 形式判定のため入力全体をメモリに読み込みます。
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, XlsxToJsonError> {
        let mut buffer = Vec::new();
        reader.read_to_end(&mut buffer)?;

        debug!(bytes = buffer.len(), "opening workbook from memory");
        let workbook = open_workbook_auto_from_rs(Cursor::new(buffer))?;

        Ok(Self { workbook })
    }
}

impl<R: Read + Seek> WorkbookParser<R> {
    /// すべてのシート名をワークブック内の順序で取得
    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names()
    }

    /// シート選択方式に基づいてシート名を決定
    ///
    /// `None`の場合は先頭シートを返します。
    ///
    /// # 戻り値
    ///
    /// * `Ok(String)` - 選択されたシート名
    /// * `Err(XlsxToJsonError::SheetNotFound)` - 名前が一致しない、インデックスが範囲外、
    ///   またはワークブックにシートがない場合
    pub fn select_sheet(&self, selector: Option<&SheetSelector>) -> Result<String, XlsxToJsonError> {
        let all_sheet_names = self.sheet_names();

        let selected = match selector {
            None => all_sheet_names.first().cloned().ok_or_else(|| {
                XlsxToJsonError::SheetNotFound("workbook contains no sheets".to_string())
            })?,

            Some(SheetSelector::Index(index)) => {
                all_sheet_names.get(*index).cloned().ok_or_else(|| {
                    XlsxToJsonError::SheetNotFound(format!(
                        "index {} is out of range (total: {})",
                        index,
                        all_sheet_names.len()
                    ))
                })?
            }

            Some(SheetSelector::Name(name)) => {
                if !all_sheet_names.contains(name) {
                    return Err(XlsxToJsonError::SheetNotFound(format!(
                        "'{}' (available: {})",
                        name,
                        all_sheet_names.join(", ")
                    )));
                }
                name.clone()
            }
        };

        debug!(sheet = %selected, "selected sheet");
        Ok(selected)
    }

    /// シートを読み込み、`RecordSet`を構築
    ///
    /// 使用範囲の1行目をヘッダー、それ以降を1行1レコードとして扱います。
    pub fn extract_records(
        &mut self,
        sheet_name: &str,
        formatter: &CellFormatter,
    ) -> Result<RecordSet, XlsxToJsonError> {
        let range = self.workbook.worksheet_range(sheet_name)?;
        let record_set = build_record_set(sheet_name, &range, formatter)?;

        debug!(
            sheet = %sheet_name,
            columns = record_set.columns().len(),
            rows = record_set.len(),
            "extracted records"
        );
        Ok(record_set)
    }
}

/// セル範囲から`RecordSet`を構築
///
/// calamineの`Range`は矩形のため、すべての行は列数分のセルを持ちます。
pub(crate) fn build_record_set(
    sheet_name: &str,
    range: &Range<Data>,
    formatter: &CellFormatter,
) -> Result<RecordSet, XlsxToJsonError> {
    let mut rows = range.rows();

    let header = match rows.next() {
        Some(header) => header
            .iter()
            .map(|cell| formatter.format_cell(cell))
            .collect::<Result<Vec<_>, _>>()?,
        None => return Ok(RecordSet::new(sheet_name.to_string(), Vec::new(), Vec::new())),
    };
    let columns = column_names(&header);

    let mut records = Vec::with_capacity(range.height().saturating_sub(1));
    for row in rows {
        let mut fields = Vec::with_capacity(columns.len());
        for (col_idx, name) in columns.iter().enumerate() {
            let value = match row.get(col_idx) {
                Some(cell) => formatter.format_cell(cell)?,
                None => CellValue::Null,
            };
            fields.push((name.clone(), value));
        }
        records.push(Record::new(fields));
    }

    Ok(RecordSet::new(sheet_name.to_string(), columns, records))
}
