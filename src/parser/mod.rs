//! Parser Module
//!
//! calamineを使用したスプレッドシート解析の実装。

mod workbook;

pub(crate) use workbook::WorkbookParser;
