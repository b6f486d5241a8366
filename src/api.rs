//! Public API Types
//!
//! 公開APIで使用する列挙型を定義するモジュール。

/// シート選択方式
///
/// 変換対象のシートを選択する方法を指定します。
/// 未指定の場合はワークブックの先頭シートが使用されます。
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SheetSelector {
    /// インデックス指定（0始まり）
    ///
    /// 例: `SheetSelector::Index(0)` は最初のシートを選択
    Index(usize),

    /// シート名指定（完全一致）
    ///
    /// 例: `SheetSelector::Name("Table 1".to_string())`
    Name(String),
}

impl From<usize> for SheetSelector {
    fn from(index: usize) -> Self {
        SheetSelector::Index(index)
    }
}

impl From<&str> for SheetSelector {
    fn from(name: &str) -> Self {
        SheetSelector::Name(name.to_string())
    }
}

impl From<String> for SheetSelector {
    fn from(name: String) -> Self {
        SheetSelector::Name(name)
    }
}

impl std::fmt::Display for SheetSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetSelector::Index(index) => write!(f, "#{}", index),
            SheetSelector::Name(name) => write!(f, "'{}'", name),
        }
    }
}

/// 日付の出力形式
///
/// 日付・時刻セルをJSON文字列に変換する際の出力形式を指定します。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum DateFormat {
    /// ISO 8601形式
    ///
    /// 時刻成分がない場合は`2025-11-20`、ある場合は`2025-11-20T09:30:00`。
    #[default]
    Iso8601,

    /// カスタム形式（chrono互換フォーマット文字列）
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use xlsx2json::{ConverterBuilder, DateFormat};
    ///
    /// # fn main() -> Result<(), xlsx2json::XlsxToJsonError> {
    /// let converter = ConverterBuilder::new()
    ///     .with_date_format(DateFormat::Custom("%d/%m/%Y".to_string()))
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    Custom(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_selector_from() {
        assert_eq!(SheetSelector::from(2), SheetSelector::Index(2));
        assert_eq!(
            SheetSelector::from("Table 1"),
            SheetSelector::Name("Table 1".to_string())
        );
    }

    #[test]
    fn test_sheet_selector_display() {
        assert_eq!(SheetSelector::Index(3).to_string(), "#3");
        assert_eq!(SheetSelector::from("Data").to_string(), "'Data'");
    }

    #[test]
    fn test_date_format_default() {
        assert_eq!(DateFormat::default(), DateFormat::Iso8601);
    }
}
