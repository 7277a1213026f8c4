//! Form Layout Module
//!
//! 紙の臨床フォームの固定レイアウトを設定値として定義するモジュール。
//! メトリクス行・タイムスロット列のグリッド座標をこの1箇所に集約し、
//! フォームの様式変更時の修正箇所を局所化します。

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::GlucologError;

/// 1つの時間帯スロット（フォームの1列）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// スロットのラベル（例: "Breakfast"）
    pub label: String,

    /// グリッド上の列インデックス（0始まり）
    pub column: usize,

    /// タイムスタンプ導出に使用する正準時刻
    pub time: NaiveTime,
}

impl TimeSlot {
    /// 新しいスロットを生成
    pub fn new(label: impl Into<String>, column: usize, time: NaiveTime) -> Self {
        Self {
            label: label.into(),
            column,
            time,
        }
    }
}

/// ソースグリッドの固定フォームレイアウト
///
/// 行 = メトリクス種別（血糖値・炭水化物・インスリン・メモ）、
/// 列 = 時間帯スロットという紙フォームの幾何を表します。これらは
/// 設定であり入力データではありません。レイアウトが実際のフォームと
/// 一致しない場合、該当グループは0件のレコードを返します（エラーには
/// なりません）。
///
/// # デフォルトレイアウト
///
/// 行0はスロットラベルのヘッダー行、列0はメトリクスラベル列です。
///
/// | 行 | 内容 |
/// | -- | ---- |
/// | 1 | 血糖値 |
/// | 2 | 炭水化物 |
/// | 3 | インスリン |
/// | 4 | メモ |
///
/// | 列 | スロット | 正準時刻 |
/// | -- | -------- | -------- |
/// | 1 | Breakfast | 08:00 |
/// | 2 | Lunch | 12:00 |
/// | 3 | Dinner | 18:00 |
/// | 4 | Bedtime | 22:00 |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormLayout {
    /// 血糖値セルの行インデックス
    pub glucose_row: usize,

    /// 炭水化物セルの行インデックス
    pub carbs_row: usize,

    /// インスリンセルの行インデックス
    pub insulin_row: usize,

    /// メモセルの行インデックス
    pub notes_row: usize,

    /// 時間帯スロット（フォーム定義順）
    pub slots: Vec<TimeSlot>,
}

impl Default for FormLayout {
    fn default() -> Self {
        let hm = |h, m| NaiveTime::from_hms_opt(h, m, 0).expect("valid literal time");
        Self {
            glucose_row: 1,
            carbs_row: 2,
            insulin_row: 3,
            notes_row: 4,
            slots: vec![
                TimeSlot::new("Breakfast", 1, hm(8, 0)),
                TimeSlot::new("Lunch", 2, hm(12, 0)),
                TimeSlot::new("Dinner", 3, hm(18, 0)),
                TimeSlot::new("Bedtime", 4, hm(22, 0)),
            ],
        }
    }
}

impl FormLayout {
    /// レイアウトの整合性を検証する
    ///
    /// `SyncBuilder::build()`から呼ばれます。検証項目:
    ///
    /// - スロットが1つ以上定義されていること
    /// - スロットのラベルが空でなく、重複しないこと
    /// - スロットの列インデックスが重複しないこと
    /// - メトリクス行のインデックスが互いに重複しないこと
    pub(crate) fn validate(&self) -> Result<(), GlucologError> {
        if self.slots.is_empty() {
            return Err(GlucologError::Config(
                "Form layout has no time slots".to_string(),
            ));
        }

        let mut labels = std::collections::HashSet::new();
        let mut columns = std::collections::HashSet::new();
        for slot in &self.slots {
            if slot.label.trim().is_empty() {
                return Err(GlucologError::Config(
                    "Time slot label must not be empty".to_string(),
                ));
            }
            if !labels.insert(slot.label.as_str()) {
                return Err(GlucologError::Config(format!(
                    "Duplicate slot label: {}",
                    slot.label
                )));
            }
            if !columns.insert(slot.column) {
                return Err(GlucologError::Config(format!(
                    "Duplicate slot column: {}",
                    slot.column
                )));
            }
        }

        let rows = [
            self.glucose_row,
            self.carbs_row,
            self.insulin_row,
            self.notes_row,
        ];
        let distinct: std::collections::HashSet<usize> = rows.iter().copied().collect();
        if distinct.len() != rows.len() {
            return Err(GlucologError::Config(
                "Metric rows must be distinct".to_string(),
            ));
        }

        Ok(())
    }
}
