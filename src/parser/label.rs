//! Label Parser
//!
//! ソースグループのラベルを解析するモジュール。ラベル規約は
//! `"<整数> - <日付を含む自由テキスト>"`（例: `"1 - Week 4/1"`）で、
//! 先頭の整数は並び順のインデックスであり、ログ対象グループと
//! 宛先ログ（例: `"Log"`）やその他のシートを区別するフィルタ述語と
//! してのみ使用されます。

use chrono::NaiveDate;

/// ラベルが日付付きログググループの命名規約に一致するかを判定
///
/// 先頭文字がASCII数字であれば一致とみなします。宛先ログ
/// （`"Log"`など数字で始まらないラベル）はここで除外されます。
pub(crate) fn is_source_label(label: &str) -> bool {
    label.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// ラベルの自由テキスト部分から報告日を解読する
///
/// 空白区切りのトークンを順に走査し、最初に日付として解釈できた
/// ものを採用します。受理する形式:
///
/// - ISO 8601: `2024-04-01`
/// - 米国式: `4/1/2024`
/// - 月/日のみ: `4/1`（年はラベルに含まれないため`default_year`を補う）
///
/// 先頭のインデックス整数（`"1"`など）は日付形式に一致しないため
/// 自然に読み飛ばされます。日付が見つからない場合は`None`
/// （呼び出し側で警告付きスキップ）。
pub(crate) fn decode_label_date(label: &str, default_year: i32) -> Option<NaiveDate> {
    label
        .split_whitespace()
        .find_map(|token| parse_date_token(token, default_year))
}

fn parse_date_token(token: &str, default_year: i32) -> Option<NaiveDate> {
    // 括弧や句読点で囲まれたトークンも受理する
    let token = token.trim_matches(|c: char| matches!(c, '(' | ')' | '[' | ']' | ',' | ';'));
    if token.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(token, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(token, "%m/%d/%Y") {
        return Some(date);
    }

    // 月/日のみの短縮形
    let (month, day) = token.split_once('/')?;
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    NaiveDate::from_ymd_opt(default_year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_is_source_label() {
        assert!(is_source_label("1 - Week 4/1"));
        assert!(is_source_label("12 - 4/8"));
        assert!(!is_source_label("Log"));
        assert!(!is_source_label("Summary 2024"));
        assert!(!is_source_label(""));
    }

    #[test]
    fn test_decode_month_day_with_default_year() {
        assert_eq!(
            decode_label_date("1 - Week 4/1", 2024),
            Some(ymd(2024, 4, 1))
        );
        assert_eq!(decode_label_date("7 - 12/31", 2023), Some(ymd(2023, 12, 31)));
    }

    #[test]
    fn test_decode_full_dates_override_default_year() {
        assert_eq!(
            decode_label_date("2 - Week of 4/1/2023", 2024),
            Some(ymd(2023, 4, 1))
        );
        assert_eq!(
            decode_label_date("3 - readings 2024-04-08", 1999),
            Some(ymd(2024, 4, 8))
        );
    }

    #[test]
    fn test_leading_index_is_not_mistaken_for_a_date() {
        // "3"単体は日付ではない。日付部分の"4/1"が採用される
        assert_eq!(decode_label_date("3 - 4/1", 2024), Some(ymd(2024, 4, 1)));
    }

    #[test]
    fn test_decode_tolerates_punctuation() {
        assert_eq!(
            decode_label_date("4 - Week (4/15)", 2024),
            Some(ymd(2024, 4, 15))
        );
    }

    #[test]
    fn test_unparsable_labels_yield_none() {
        assert_eq!(decode_label_date("5 - March", 2024), None);
        assert_eq!(decode_label_date("6 -", 2024), None);
        assert_eq!(decode_label_date("", 2024), None);
        // 存在しない日付
        assert_eq!(decode_label_date("7 - 13/40", 2024), None);
        assert_eq!(decode_label_date("8 - 2/30", 2024), None);
    }
}
