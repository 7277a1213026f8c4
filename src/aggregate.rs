//! Source Aggregator Module
//!
//! ラベル命名規約に一致するすべてのソースグループに対して
//! シートパーサーを適用し、1本の順序付きレコード列に連結する
//! モジュール。グループの並び順とグループ内のスロット順を保存します。
//! 個々のグループの解析失敗は残りのグループの処理を妨げません。

use log::{debug, warn};

use crate::layout::FormLayout;
use crate::parser::{decode_label_date, is_source_label, parse_sheet};
use crate::types::{LogRecord, SourceSheet};

/// 全グループの集約結果
#[derive(Debug, Default)]
pub(crate) struct AggregateOutcome {
    /// 候補レコード列（グループ順 × スロット順）
    pub records: Vec<LogRecord>,

    /// 入力グループ総数
    pub sheets_seen: usize,

    /// 解析されたグループ数
    pub sheets_parsed: usize,

    /// 命名規約に一致したが日付が解読できずスキップされたグループ数
    pub sheets_skipped: usize,

    /// 欠損扱いとなったセル数
    pub cells_skipped: usize,
}

/// ソースグループ列を集約する
///
/// # 引数
///
/// * `sheets` - 外部シェルが取得したラベル付きグリッド列（取得順）
/// * `layout` - フォームレイアウト
/// * `default_year` - ラベルに年がない場合に補う既定年
pub(crate) fn aggregate(
    sheets: &[SourceSheet],
    layout: &FormLayout,
    default_year: i32,
) -> AggregateOutcome {
    let mut outcome = AggregateOutcome {
        sheets_seen: sheets.len(),
        ..Default::default()
    };

    for sheet in sheets {
        // 宛先ログ（"Log"など）と無関係なシートは対象外
        if !is_source_label(&sheet.label) {
            debug!("ignoring non-source sheet {:?}", sheet.label);
            continue;
        }

        let Some(date) = decode_label_date(&sheet.label, default_year) else {
            warn!(
                "skipping sheet {:?}: label has no parsable date",
                sheet.label
            );
            outcome.sheets_skipped += 1;
            continue;
        };

        let parsed = parse_sheet(sheet, layout, date);
        outcome.sheets_parsed += 1;
        outcome.cells_skipped += parsed.cells_skipped;
        outcome.records.extend(parsed.records);
    }

    outcome
}
