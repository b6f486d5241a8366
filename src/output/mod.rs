//! Output Module
//!
//! `RecordSet`をJSONとして出力するモジュール。

mod json;

pub(crate) use json::JsonWriter;
