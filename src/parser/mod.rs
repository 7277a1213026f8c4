//! Parser Module
//!
//! ソースグループの解析を提供するモジュール。
//! ラベルの日付解読とグリッド本体の解析に分かれる。

mod label;
mod sheet;

pub(crate) use label::{decode_label_date, is_source_label};
pub(crate) use sheet::{parse_sheet, SheetOutcome};
