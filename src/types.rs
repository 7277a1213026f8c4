//! Types Module
//!
//! クレート全体で使用する共通データ型を定義するモジュール。
//! 唯一のエンティティである[`LogRecord`]と、その同一性を定義する
//! 自然キー、入力エンベロープ、実行レポートを提供します。

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::api::Trend;

/// 正規化された1件の読み取り記録
///
/// ワイド形式のソースグリッドの1スロット分を、1行1レコードの
/// 追記ログ形式に正規化したものです。パーサーが空でないスロット
/// ごとに一時的に構築し、差分計算とシリアライズに消費されます。
///
/// # 不変条件
///
/// - `trend_symbol`は`trend`が存在し、かつ`Unknown`でない場合に限り
///   存在します。[`LogRecord::set_trend`]がこの対応を維持します。
/// - `timestamp`は`date`とスロットの正準時刻から導出され、順序付けと
///   同一性の一部にのみ使用されます。
/// - すべてのオプション項目が空のレコードは発行されません
///   （[`LogRecord::is_empty`]参照）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    /// 記録日（ソースグループのラベルから導出）
    pub date: NaiveDate,

    /// 時間帯ラベル（フォームが定義する固定スロット名、例: "Breakfast"）
    pub time: String,

    /// 血糖値
    pub blood_glucose: Option<f64>,

    /// 炭水化物量
    pub carbs: Option<f64>,

    /// インスリン量
    pub insulin: Option<f64>,

    /// 自由記述メモ
    pub notes: Option<String>,

    /// 血糖値の変化傾向（導出値。ソースには記入されない）
    pub trend: Option<Trend>,

    /// `trend`に1:1対応する表示用グリフ
    pub trend_symbol: Option<String>,

    /// `date` + スロット正準時刻から導出されるタイムスタンプ
    pub timestamp: NaiveDateTime,
}

impl LogRecord {
    /// 新しいレコードを生成する（すべてのオプション項目は空）
    ///
    /// # 引数
    ///
    /// * `date` - 記録日
    /// * `time` - 時間帯ラベル
    /// * `time_of_day` - スロットの正準時刻（タイムスタンプ導出用）
    ///
    /// # 使用例
    ///
    /// ```rust
    /// use chrono::{NaiveDate, NaiveTime};
    /// use glucolog::LogRecord;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
    /// let eight = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
    /// let record = LogRecord::new(date, "Breakfast", eight);
    ///
    /// assert_eq!(record.timestamp, date.and_time(eight));
    /// assert!(record.is_empty());
    /// ```
    pub fn new(date: NaiveDate, time: impl Into<String>, time_of_day: NaiveTime) -> Self {
        Self {
            date,
            time: time.into(),
            blood_glucose: None,
            carbs: None,
            insulin: None,
            notes: None,
            trend: None,
            trend_symbol: None,
            timestamp: date.and_time(time_of_day),
        }
    }

    /// トレンドを設定し、表示用グリフとの対応を維持する
    ///
    /// `Unknown`および`None`の場合、`trend_symbol`は`None`になります。
    pub fn set_trend(&mut self, trend: Option<Trend>) {
        self.trend = trend;
        self.trend_symbol = trend.and_then(|t| t.symbol()).map(String::from);
    }

    /// すべてのオプション項目が空かどうかを判定
    pub fn is_empty(&self) -> bool {
        self.blood_glucose.is_none()
            && self.carbs.is_none()
            && self.insulin.is_none()
            && self.notes.is_none()
    }

    /// 重複判定に使用する自然キーを返す
    ///
    /// 自然キーは (date, time, blood_glucose, carbs, insulin, notes)
    /// の値組であり、格納位置やトレンド導出値には依存しません。
    pub(crate) fn natural_key(&self) -> NaturalKey {
        NaturalKey {
            date: self.date,
            time: self.time.clone(),
            blood_glucose: self.blood_glucose.map(format_number),
            carbs: self.carbs.map(format_number),
            insulin: self.insulin.map(format_number),
            notes: self.notes.clone().unwrap_or_default(),
        }
    }

    /// 宛先ログの列順に沿った9項目の行へシリアライズする
    ///
    /// 列順と欠損値の扱いは[`crate::output`]モジュールを参照。
    pub fn to_row(&self) -> Vec<String> {
        crate::output::record_to_row(self)
    }

    /// シリアライズ済み行からレコードを復元する
    ///
    /// 自然キーの比較に十分な項目が復元できない行（日付が解析不能、
    /// 時間帯ラベルが空など）は`None`を返します。
    pub fn from_row(fields: &[String]) -> Option<Self> {
        crate::output::record_from_row(fields)
    }
}

/// レコードの同一性を定義する自然キー
///
/// 数値項目は正準文字列形式で保持します。`f64`は`Eq`/`Hash`を
/// 実装しないため、シリアライズと同じ表現に落としてから比較します。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct NaturalKey {
    date: NaiveDate,
    time: String,
    blood_glucose: Option<String>,
    carbs: Option<String>,
    insulin: Option<String>,
    notes: String,
}

/// 数値を正準表示形式に変換する
///
/// 整数値は小数部なしで出力します（例: `145.0` → `"145"`、
/// `2.5` → `"2.5"`）。
pub(crate) fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// 1つのソースグループ（ラベル付きグリッド）
///
/// 外部シェルが取得した、1報告期間分のワイド形式データです。
/// グリッドのセルはすべて生のテキストとして渡されます。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceSheet {
    /// グループのラベル（例: `"1 - Week 4/1"`）
    pub label: String,

    /// 行 × 列のセルテキスト
    pub grid: Vec<Vec<String>>,
}

impl SourceSheet {
    /// 新しいソースグループを生成
    pub fn new(label: impl Into<String>, grid: Vec<Vec<String>>) -> Self {
        Self {
            label: label.into(),
            grid,
        }
    }

    /// 指定座標のセルテキストを取得（形状外は`None`）
    pub(crate) fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.grid.get(row).and_then(|r| r.get(col)).map(String::as_str)
    }
}

/// 同期プラン構築の実行レポート
///
/// 部分的成功の可視化のために、スキップされたグループ・セルの件数を
/// 集計します。どの解析失敗も実行全体を中断しません。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    /// 入力されたソースグループの総数（宛先ログなど対象外を含む）
    pub sheets_seen: usize,

    /// 命名規約に一致し、解析されたグループ数
    pub sheets_parsed: usize,

    /// 命名規約に一致したが、日付が解読できずスキップされたグループ数
    pub sheets_skipped: usize,

    /// 空でないのに数値として解析できず、欠損扱いとなったセル数
    pub cells_skipped: usize,

    /// 解析された候補レコード数（差分計算前）
    pub records_parsed: usize,

    /// 既存ログに存在せず、追記対象となったレコード数
    pub records_new: usize,
}
