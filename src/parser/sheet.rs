//! Sheet Parser
//!
//! 1つのソースグループ（固定形状グリッド）を正規化レコード列に
//! 変換するモジュール。フォームレイアウトが定義するスロット順に
//! 列を走査し、空でないスロットごとに1件のレコードを発行します。
//! グリッド形状の欠落（期待する行・列がない）は0件として扱い、
//! エラーにしません。

use chrono::NaiveDate;
use log::debug;

use crate::extract::{extract_value, parse_number};
use crate::layout::FormLayout;
use crate::types::{LogRecord, SourceSheet};

/// 1グループ分の解析結果
pub(crate) struct SheetOutcome {
    /// スロット順（グループ内で時系列順）のレコード列
    pub records: Vec<LogRecord>,

    /// 空でないのに数値解析できず、欠損扱いとなったセル数
    pub cells_skipped: usize,
}

/// ソースグループを解析してレコード列を生成する
///
/// # 引数
///
/// * `sheet` - ラベル付きグリッド
/// * `layout` - フォームレイアウト（メトリクス行・スロット列の座標）
/// * `date` - ラベルから解読済みの報告日
///
/// # スロットごとの手順
///
/// 1. 血糖値セルをValue Extractorで解析（数値 + トレンド）
/// 2. 炭水化物・インスリンセルを数値として解析（トレンドなし）
/// 3. メモセルを自由テキストとして取得
/// 4. 4セルすべてが空ならレコードを発行しない
pub(crate) fn parse_sheet(
    sheet: &SourceSheet,
    layout: &FormLayout,
    date: NaiveDate,
) -> SheetOutcome {
    let mut records = Vec::new();
    let mut cells_skipped = 0usize;

    for slot in &layout.slots {
        let glucose_cell = sheet.cell(layout.glucose_row, slot.column).unwrap_or("");
        let (blood_glucose, trend) = extract_value(glucose_cell);
        if blood_glucose.is_none() && !glucose_cell.trim().is_empty() {
            debug!(
                "unparsable glucose cell in {:?} slot {}: {:?}",
                sheet.label, slot.label, glucose_cell
            );
            cells_skipped += 1;
        }

        let carbs = numeric_cell(sheet, layout.carbs_row, slot, &mut cells_skipped);
        let insulin = numeric_cell(sheet, layout.insulin_row, slot, &mut cells_skipped);

        let notes = sheet
            .cell(layout.notes_row, slot.column)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from);

        let mut record = LogRecord::new(date, slot.label.as_str(), slot.time);
        record.blood_glucose = blood_glucose;
        record.carbs = carbs;
        record.insulin = insulin;
        record.notes = notes;
        record.set_trend(trend);

        // 全メトリクスが空のスロットからは空白レコードを作らない
        if record.is_empty() {
            continue;
        }

        records.push(record);
    }

    SheetOutcome {
        records,
        cells_skipped,
    }
}

/// トレンドを持たない数値セル（炭水化物・インスリン）を読む
fn numeric_cell(
    sheet: &SourceSheet,
    row: usize,
    slot: &crate::layout::TimeSlot,
    cells_skipped: &mut usize,
) -> Option<f64> {
    let cell = sheet.cell(row, slot.column).unwrap_or("");
    let value = parse_number(cell);
    if value.is_none() && !cell.trim().is_empty() {
        debug!(
            "unparsable numeric cell in {:?} slot {}: {:?}",
            sheet.label, slot.label, cell
        );
        *cells_skipped += 1;
    }
    value
}
