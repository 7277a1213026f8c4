//! Value Extractor Module
//!
//! セル1個分のコンパクトなテキスト表現を、数値とトレンド指標に
//! 分解するモジュール。入力はCGM由来の矢印グリフを伴うことがあり、
//! 絵文字表現のバリエーションセレクタを正規化してから照合します。
//! いかなる入力でもパニックせず、解析不能はソフトフェイルします。

use crate::api::Trend;

/// セルのテキストから数値とトレンドを抽出する
///
/// - 空・空白のみ → `(None, None)`
/// - 数値のみ → `(Some(n), None)`
/// - 数値 + 既知のグリフ → `(Some(n), Some(trend))`
/// - 数値 + 未知のグリフ → `(Some(n), Some(Trend::Unknown))`
/// - 先頭に解析可能な数値がないテキスト → `(None, None)`
pub(crate) fn extract_value(raw: &str) -> (Option<f64>, Option<Trend>) {
    let text = raw.trim();
    if text.is_empty() {
        return (None, None);
    }

    // 先頭の数値部分（数字と小数点）の境界を探す
    let end = text
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_digit() || *c == '.')
        .last()
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);

    let (number_part, rest) = text.split_at(end);
    let number = match number_part.parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => return (None, None),
    };

    let glyphs = canonical_glyphs(rest);
    if glyphs.is_empty() {
        return (Some(number), None);
    }

    (Some(number), Some(trend_for_glyphs(&glyphs)))
}

/// トレンドを伴わない数値セルを解析する
///
/// 炭水化物・インスリンのセル用。空は`None`、数値以外のテキストも
/// `None`（呼び出し側でスキップ件数として集計される）。
pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }
    // "inf"や"nan"のような入力はフォーム上あり得ないため除外
    if !text.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// グリフ列を正準形に正規化する
///
/// バリエーションセレクタ（U+FE0E / U+FE0F）とゼロ幅接合子、空白を
/// 除去し、細矢印と太矢印を同一視します。認識できない文字はそのまま
/// 残し、後段で`Trend::Unknown`に落ちます。
fn canonical_glyphs(rest: &str) -> String {
    rest.chars()
        .filter(|c| !c.is_whitespace())
        .filter(|c| !matches!(c, '\u{FE0E}' | '\u{FE0F}' | '\u{200D}'))
        .map(|c| match c {
            '↑' | '⬆' => '⬆',
            '↓' | '⬇' => '⬇',
            '→' | '➡' => '➡',
            other => other,
        })
        .collect()
}

/// 正準化済みグリフ列をトレンドに対応付ける
///
/// ダブル矢印は急変化を意味します。対応表にないグリフ列は
/// `Trend::Unknown`（ソフトフェイル、エラーにしない）。
fn trend_for_glyphs(glyphs: &str) -> Trend {
    match glyphs {
        "⬆⬆" => Trend::RisingRapidly,
        "⬆" => Trend::Rising,
        "↗" => Trend::RisingSlowly,
        "➡" => Trend::Steady,
        "↘" => Trend::FallingSlowly,
        "⬇" => Trend::Falling,
        "⬇⬇" => Trend::FallingRapidly,
        _ => Trend::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_whitespace_cells() {
        assert_eq!(extract_value(""), (None, None));
        assert_eq!(extract_value("   "), (None, None));
        assert_eq!(extract_value("\t \u{3000}"), (None, None));
    }

    #[test]
    fn test_plain_number() {
        assert_eq!(extract_value("145"), (Some(145.0), None));
        assert_eq!(extract_value(" 98 "), (Some(98.0), None));
        assert_eq!(extract_value("6.5"), (Some(6.5), None));
    }

    #[test]
    fn test_number_with_known_glyph() {
        assert_eq!(extract_value("145⬆"), (Some(145.0), Some(Trend::Rising)));
        assert_eq!(extract_value("145↑"), (Some(145.0), Some(Trend::Rising)));
        assert_eq!(extract_value("80⬇"), (Some(80.0), Some(Trend::Falling)));
        assert_eq!(extract_value("110➡"), (Some(110.0), Some(Trend::Steady)));
        assert_eq!(extract_value("110→"), (Some(110.0), Some(Trend::Steady)));
        assert_eq!(
            extract_value("120↗"),
            (Some(120.0), Some(Trend::RisingSlowly))
        );
        assert_eq!(
            extract_value("100↘"),
            (Some(100.0), Some(Trend::FallingSlowly))
        );
    }

    #[test]
    fn test_double_arrows_mean_rapid() {
        assert_eq!(
            extract_value("200⬆⬆"),
            (Some(200.0), Some(Trend::RisingRapidly))
        );
        assert_eq!(
            extract_value("55↓↓"),
            (Some(55.0), Some(Trend::FallingRapidly))
        );
        // 細矢印と太矢印の混在も同一視
        assert_eq!(
            extract_value("200↑⬆"),
            (Some(200.0), Some(Trend::RisingRapidly))
        );
    }

    #[test]
    fn test_variation_selectors_are_stripped() {
        // 絵文字表現（VS16付き）の矢印
        assert_eq!(
            extract_value("145\u{2B06}\u{FE0F}"),
            (Some(145.0), Some(Trend::Rising))
        );
        assert_eq!(
            extract_value("90\u{2198}\u{FE0F}"),
            (Some(90.0), Some(Trend::FallingSlowly))
        );
    }

    #[test]
    fn test_space_between_number_and_glyph() {
        assert_eq!(extract_value("145 ⬆"), (Some(145.0), Some(Trend::Rising)));
    }

    #[test]
    fn test_unrecognized_glyph_is_unknown() {
        assert_eq!(extract_value("98?"), (Some(98.0), Some(Trend::Unknown)));
        assert_eq!(extract_value("98⬅"), (Some(98.0), Some(Trend::Unknown)));
        assert_eq!(extract_value("98⬆x"), (Some(98.0), Some(Trend::Unknown)));
    }

    #[test]
    fn test_no_leading_number_is_absent() {
        assert_eq!(extract_value("high"), (None, None));
        assert_eq!(extract_value("⬆145"), (None, None));
        assert_eq!(extract_value("1.2.3"), (None, None));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("45"), Some(45.0));
        assert_eq!(parse_number(" 2.5 "), Some(2.5));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("  "), None);
        assert_eq!(parse_number("n/a"), None);
        assert_eq!(parse_number("45g"), None);
        assert_eq!(parse_number("inf"), None);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// 空白のみのセルは常に (None, None)
            #[test]
            fn test_whitespace_only_is_absent(spaces in proptest::collection::vec(
                prop_oneof![Just(' '), Just('\t'), Just('\u{3000}')], 0..16)) {
                let text: String = spaces.into_iter().collect();
                prop_assert_eq!(extract_value(&text), (None, None));
            }

            /// 数値 + 既知グリフは常に (数値, 対応トレンド)
            #[test]
            fn test_number_with_known_glyph_round_trip(
                n in 0u32..1000,
                glyph_idx in 0usize..7,
            ) {
                let table = [
                    ("⬆⬆", Trend::RisingRapidly),
                    ("⬆", Trend::Rising),
                    ("↗", Trend::RisingSlowly),
                    ("➡", Trend::Steady),
                    ("↘", Trend::FallingSlowly),
                    ("⬇", Trend::Falling),
                    ("⬇⬇", Trend::FallingRapidly),
                ];
                let (glyph, expected) = table[glyph_idx];

                let text = format!("{}{}", n, glyph);
                prop_assert_eq!(extract_value(&text), (Some(n as f64), Some(expected)));

                // グリフなしなら数値のみ
                let text = n.to_string();
                prop_assert_eq!(extract_value(&text), (Some(n as f64), None));
            }

            /// どんな入力でもパニックしない
            #[test]
            fn test_never_panics(text in ".*") {
                let _ = extract_value(&text);
                let _ = parse_number(&text);
            }
        }
    }
}
