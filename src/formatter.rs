//! Cell Formatter Module
//!
//! calamineが推論したセル値を`CellValue`へ変換するモジュール。
//! 型の強制変換や検証は行わず、日付・時刻のみ文字列へ整形します。

use crate::api::DateFormat;
use crate::error::XlsxToJsonError;
use crate::types::CellValue;
use calamine::{Data, ExcelDateTime};
use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDateTime, Timelike};
use std::fmt::Write as _;

/// セルフォーマッター
#[derive(Debug, Clone, Default)]
pub(crate) struct CellFormatter {
    date_formatter: DateFormatter,
}

impl CellFormatter {
    pub fn new(date_format: DateFormat) -> Self {
        Self {
            date_formatter: DateFormatter::new(date_format),
        }
    }

    /// calamineのセル値を`CellValue`に変換
    ///
    /// - 数値（整数・浮動小数点） → `Number`
    /// - 文字列 → `String`
    /// - 論理値 → `Bool`
    /// - 空セル・エラーセル → `Null`
    /// - 日付・時刻 → `String`（`DateFormat`に従う）
    pub fn format_cell(&self, cell: &Data) -> Result<CellValue, XlsxToJsonError> {
        let value = match cell {
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Float(f) => CellValue::Number(*f),
            Data::String(s) => CellValue::String(s.clone()),
            Data::Bool(b) => CellValue::Bool(*b),
            Data::DateTime(dt) => self.date_formatter.format(dt)?,
            // ODS由来のISO文字列はそのまま出力
            Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::String(s.clone()),
            Data::Error(_) | Data::Empty => CellValue::Null,
        };

        Ok(value)
    }
}

/// 日付フォーマッター
///
/// Excelのシリアル日付値を文字列に変換します。
/// エポック（1900年/1904年）の判定はcalamineが行います。
#[derive(Debug, Clone, Default)]
pub(crate) struct DateFormatter {
    format: DateFormat,
}

impl DateFormatter {
    pub fn new(format: DateFormat) -> Self {
        Self { format }
    }

    /// 日付・時刻セルをフォーマット
    ///
    /// 経過時間（duration）の場合は`HH:MM:SS`形式、日付に変換できない
    /// シリアル値の場合は数値のまま返します。
    pub fn format(&self, value: &ExcelDateTime) -> Result<CellValue, XlsxToJsonError> {
        if value.is_duration() {
            return Ok(CellValue::String(format_duration(value.as_f64())));
        }

        match value.as_datetime() {
            Some(datetime) => self.format_datetime(&datetime).map(CellValue::String),
            None => Ok(CellValue::Number(value.as_f64())),
        }
    }

    pub fn format_datetime(&self, datetime: &NaiveDateTime) -> Result<String, XlsxToJsonError> {
        match &self.format {
            DateFormat::Iso8601 => {
                let has_time = datetime.time().num_seconds_from_midnight() != 0;
                let pattern = if has_time {
                    "%Y-%m-%dT%H:%M:%S"
                } else {
                    "%Y-%m-%d"
                };
                Ok(datetime.format(pattern).to_string())
            }
            DateFormat::Custom(pattern) => {
                // 不正な指定子はpanicではなくfmt::Errorになるようwrite!を使う
                let mut formatted = String::new();
                write!(formatted, "{}", datetime.format(pattern)).map_err(|_| {
                    XlsxToJsonError::Config(format!("Invalid date format string: '{}'", pattern))
                })?;
                Ok(formatted)
            }
        }
    }
}

/// カスタム日付形式を検証する
pub(crate) fn validate_date_format(pattern: &str) -> Result<(), XlsxToJsonError> {
    if pattern.is_empty() {
        return Err(XlsxToJsonError::Config(
            "Invalid date format string: ''".to_string(),
        ));
    }

    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(XlsxToJsonError::Config(format!(
            "Invalid date format string: '{}'",
            pattern
        )));
    }

    Ok(())
}

/// 日数（シリアル値）を`HH:MM:SS`に変換（時間は24を超えてもよい）
fn format_duration(days: f64) -> String {
    let total_seconds = (days * 86_400.0).round() as i64;
    let sign = if total_seconds < 0 { "-" } else { "" };
    let total_seconds = total_seconds.abs();

    format!(
        "{}{:02}:{:02}:{:02}",
        sign,
        total_seconds / 3600,
        (total_seconds % 3600) / 60,
        total_seconds % 60
    )
}
