//! Output Module
//!
//! 正規化レコードと宛先ログの行形式の相互変換、およびプランの
//! CSV書き出しを提供するモジュール。
//!
//! # 行レイアウト
//!
//! 宛先ログの列順に一致する9項目の固定レイアウト:
//!
//! | 位置 | 項目 | 形式 |
//! | ---- | ---- | ---- |
//! | 0 | date | `YYYY-MM-DD` |
//! | 1 | time | スロットラベル |
//! | 2 | blood_glucose | 正準数値（整数は小数部なし） |
//! | 3 | carbs | 正準数値 |
//! | 4 | insulin | 正準数値 |
//! | 5 | notes | 自由テキスト |
//! | 6 | timestamp | `YYYY-MM-DD HH:MM`（ソート可能） |
//! | 7 | trend | ケバブケースのスラッグ |
//! | 8 | trend_symbol | 表示用グリフ |
//!
//! 欠損したオプション項目は空文字列で出力されます（プレースホルダ
//! 文字列は使用しません）。

use std::io::Write;

use chrono::{NaiveDate, NaiveDateTime};

use crate::api::Trend;
use crate::error::GlucologError;
use crate::types::{format_number, LogRecord};

/// 行の項目数
pub(crate) const ROW_WIDTH: usize = 9;

/// タイムスタンプ列の形式（辞書順 = 時系列順になる）
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// レコードを宛先ログの行形式にシリアライズする
pub(crate) fn record_to_row(record: &LogRecord) -> Vec<String> {
    let row = vec![
        record.date.format("%Y-%m-%d").to_string(),
        record.time.clone(),
        record.blood_glucose.map(format_number).unwrap_or_default(),
        record.carbs.map(format_number).unwrap_or_default(),
        record.insulin.map(format_number).unwrap_or_default(),
        record.notes.clone().unwrap_or_default(),
        record.timestamp.format(TIMESTAMP_FORMAT).to_string(),
        record
            .trend
            .map(|t| t.as_str().to_string())
            .unwrap_or_default(),
        record.trend_symbol.clone().unwrap_or_default(),
    ];
    debug_assert_eq!(row.len(), ROW_WIDTH);
    row
}

/// シリアライズ済み行からレコードを復元する
///
/// 宛先ログから取得した既存行を、自然キー比較用のレコードに戻す
/// ために使用します。日付が解析できない行、時間帯ラベルが空の行は
/// `None`（呼び出し側でスキップ）。9項目未満の行は不足分を空として
/// 扱います。
pub(crate) fn record_from_row(fields: &[String]) -> Option<LogRecord> {
    let field = |i: usize| fields.get(i).map(String::as_str).unwrap_or("").trim();

    let date = parse_date_field(field(0))?;
    let time = field(1);
    if time.is_empty() {
        return None;
    }

    // タイムスタンプ列が読めない行は日付のみ（00:00）にフォールバック
    let timestamp = NaiveDateTime::parse_from_str(field(6), TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(field(6), "%Y-%m-%d %H:%M:%S"))
        .unwrap_or_else(|_| date.and_hms_opt(0, 0, 0).expect("midnight is valid"));

    let number = |i: usize| {
        let text = field(i);
        if text.is_empty() {
            None
        } else {
            text.parse::<f64>().ok()
        }
    };

    let mut record = LogRecord {
        date,
        time: time.to_string(),
        blood_glucose: number(2),
        carbs: number(3),
        insulin: number(4),
        notes: Some(field(5).to_string()).filter(|s| !s.is_empty()),
        trend: None,
        trend_symbol: None,
        timestamp,
    };
    record.set_trend(Trend::from_slug(field(7)));

    Some(record)
}

fn parse_date_field(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(text, "%m/%d/%Y"))
        .ok()
}

/// 行列をCSVとして書き出す
pub(crate) fn write_csv<W: Write>(rows: &[Vec<String>], writer: &mut W) -> Result<(), GlucologError> {
    for row in rows {
        let mut first = true;
        for cell in row {
            if !first {
                write!(writer, ",")?;
            }
            first = false;
            write!(writer, "{}", escape_csv(cell))?;
        }
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}

/// CSV文字列をエスケープ
///
/// ダブルクォート、改行、カンマを含む場合はダブルクォートで囲み、
/// 内部のダブルクォートは2つにエスケープします。
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
