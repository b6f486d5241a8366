//! Types Module
//!
//! クレート全体で使用する共通データ型を定義するモジュール。
//! `Record`と`RecordSet`は`serde::Serialize`を実装し、列順・行順を保ったまま
//! JSONの配列/オブジェクトとして出力されます。

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// f64で誤差なく表現できる整数の上限（2^53）
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// セルの値を表す列挙型
///
/// 列ごとに型が混在してもよいように、閉じたタグ付きバリアントとして表現します。
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// 数値（f64）
    Number(f64),

    /// 文字列
    String(String),

    /// 論理値
    Bool(bool),

    /// 空セル、エラーセル
    Null,
}

impl CellValue {
    /// 値が空かどうかを判定
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// 整数として表現できる数値であれば`i64`を返す
    fn as_integral(n: f64) -> Option<i64> {
        if n.is_finite() && n.fract() == 0.0 && n.abs() < MAX_SAFE_INTEGER {
            Some(n as i64)
        } else {
            None
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Number(n) => match Self::as_integral(*n) {
                Some(i) => serializer.serialize_i64(i),
                // NaN/∞はJSONで表現できないためnull
                None if !n.is_finite() => serializer.serialize_none(),
                None => serializer.serialize_f64(*n),
            },
            CellValue::String(s) => serializer.serialize_str(s),
            CellValue::Bool(b) => serializer.serialize_bool(*b),
            CellValue::Null => serializer.serialize_none(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(n) => match Self::as_integral(*n) {
                Some(i) => write!(f, "{}", i),
                None => write!(f, "{}", n),
            },
            CellValue::String(s) => f.write_str(s),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Null => Ok(()),
        }
    }
}

/// 1行分のデータ（列名 → セル値の順序付きマッピング）
///
/// 列の順序はシートのヘッダー順に一致します。生成後は変更されません。
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: Vec<(String, CellValue)>,
}

impl Record {
    pub(crate) fn new(fields: Vec<(String, CellValue)>) -> Self {
        Self { fields }
    }

    /// 列名で値を取得
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// 列名をヘッダー順に返す
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// (列名, 値)のペアをヘッダー順に返す
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// 列数
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// 列を持たないかどうか
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// シートから抽出したRecordの順序付き集合
///
/// データ行1行につき1つのRecordを元の行順で保持します。
/// JSONとしてはRecordの配列にシリアライズされます。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordSet {
    /// シート名
    sheet_name: String,
    /// ヘッダーから生成した列名（重複解消済み）
    columns: Vec<String>,
    /// データ行
    records: Vec<Record>,
}

impl RecordSet {
    pub(crate) fn new(sheet_name: String, columns: Vec<String>, records: Vec<Record>) -> Self {
        Self {
            sheet_name,
            columns,
            records,
        }
    }

    /// 抽出元のシート名
    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    /// 列名（ヘッダー順）
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// すべてのRecord
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Recordの数（= データ行数）
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// データ行がないかどうか
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl Serialize for RecordSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.records.len()))?;
        for record in &self.records {
            seq.serialize_element(record)?;
        }
        seq.end()
    }
}

/// ヘッダー行のセルから列名を生成する
///
/// - 空セル・空文字列は`Unnamed: {列番号}`（0始まり）
/// - 重複した名前には出現順に`.1`, `.2`, ... を付与
/// - 付与した名前が既存の列名と衝突する場合はさらに接尾辞を重ねる（`a.1.1`）
///
/// 生成される列名はすべて一意です。
pub(crate) fn column_names(header: &[CellValue]) -> Vec<String> {
    // 名前ごとの使用回数。0より大きければ使用済み
    let mut counts: HashMap<String, usize> = HashMap::with_capacity(header.len());
    let mut names = Vec::with_capacity(header.len());

    for (col, cell) in header.iter().enumerate() {
        let mut name = match cell.to_string() {
            s if s.is_empty() => format!("Unnamed: {}", col),
            s => s,
        };

        let mut count = counts.get(&name).copied().unwrap_or(0);
        while count > 0 {
            counts.insert(name.clone(), count + 1);
            name = format!("{}.{}", name, count);
            count = counts.get(&name).copied().unwrap_or(0);
        }
        counts.insert(name.clone(), count + 1);
        names.push(name);
    }

    names
}
