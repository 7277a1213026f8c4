//! Builder Module
//!
//! Fluent Builder APIを提供し、`Synchronizer`インスタンスを段階的に
//! 構築する。`Synchronizer`は集約 → 差分 → シリアライズのパイプライン
//! 全体を実行し、追記すべき行と実行レポートを持つ`SyncPlan`を返す。

use chrono::{Datelike, Utc};
use std::io::Write;

use crate::aggregate::aggregate;
use crate::diff::new_records;
use crate::error::GlucologError;
use crate::layout::FormLayout;
use crate::output;
use crate::types::{LogRecord, SourceSheet, SyncReport};

/// 同期処理の設定を保持する内部構造体
#[derive(Debug, Clone)]
pub(crate) struct SyncConfig {
    /// フォームレイアウト
    pub layout: FormLayout,

    /// ラベルに年がない場合に補う既定年
    pub default_year: i32,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            layout: FormLayout::default(),
            default_year: Utc::now().date_naive().year(),
        }
    }
}

/// Fluent Builder APIを提供する構造体
///
/// `Synchronizer`インスタンスを段階的に構築するためのビルダーです。
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみを
/// オーバーライドできます。
///
/// # デフォルト設定
///
/// - フォームレイアウト: [`FormLayout::default`]（紙フォーム準拠）
/// - 既定年: 現在のUTC年
///
/// # 使用例
///
/// ```rust
/// use glucolog::{FormLayout, SyncBuilder};
///
/// # fn main() -> Result<(), glucolog::GlucologError> {
/// let planner = SyncBuilder::new()
///     .with_layout(FormLayout::default())
///     .with_default_year(2024)
///     .build()?;
/// # let _ = planner;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct SyncBuilder {
    /// 内部設定（構築中）
    config: SyncConfig,
}

impl SyncBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    pub fn new() -> Self {
        Self::default()
    }

    /// フォームレイアウトを指定する
    ///
    /// ソースグリッドのメトリクス行・タイムスロット列の座標を
    /// 差し替えます。紙フォームの様式が変わった場合はここだけを
    /// 変更します。
    ///
    /// # 引数
    ///
    /// * `layout: FormLayout`: フォームレイアウト
    pub fn with_layout(mut self, layout: FormLayout) -> Self {
        self.config.layout = layout;
        self
    }

    /// ラベル日付の既定年を指定する
    ///
    /// グループラベルの日付部分が`"4/1"`のように年を含まない場合に
    /// 補われる年です。デフォルトは現在のUTC年。テストや過去データの
    /// 再取り込みでは明示的に指定してください。
    ///
    /// # 引数
    ///
    /// * `year: i32`: 既定年（例: 2024）
    pub fn with_default_year(mut self, year: i32) -> Self {
        self.config.default_year = year;
        self
    }

    /// 設定を検証し、`Synchronizer`を構築する
    ///
    /// # 戻り値
    ///
    /// * `Ok(Synchronizer)` - 設定が有効な場合
    /// * `Err(GlucologError::Config)` - レイアウトまたは既定年が無効な場合
    pub fn build(self) -> Result<Synchronizer, GlucologError> {
        self.config.layout.validate()?;

        if !(1900..=2999).contains(&self.config.default_year) {
            return Err(GlucologError::Config(format!(
                "Default year out of range: {}",
                self.config.default_year
            )));
        }

        Ok(Synchronizer {
            config: self.config,
        })
    }
}

/// 同期プランを計算するエンジン
///
/// ソースグループ列と既存レコード列から、宛先ログに追記すべき
/// 行の列を計算します。計算は純粋・同期的で、入力を変更しません。
/// 個々のセル・グループの解析失敗は欠損値・スキップ集計として
/// 処理されるため、`plan`自体は失敗しません。
///
/// # 使用例
///
/// ```rust
/// use glucolog::{SourceSheet, SyncBuilder};
///
/// # fn main() -> Result<(), glucolog::GlucologError> {
/// let sheet = SourceSheet::new(
///     "1 - Week 4/1",
///     vec![
///         vec!["".into(), "Breakfast".into(), "Lunch".into(), "Dinner".into(), "Bedtime".into()],
///         vec!["Blood Glucose".into(), "145↑".into(), "".into(), "".into(), "".into()],
///         vec!["Carbs".into(), "30".into(), "".into(), "".into(), "".into()],
///         vec!["Insulin".into(), "4".into(), "".into(), "".into(), "".into()],
///         vec!["Notes".into(), "".into(), "".into(), "".into(), "".into()],
///     ],
/// );
///
/// let planner = SyncBuilder::new().with_default_year(2024).build()?;
/// let plan = planner.plan(&[sheet], &[]);
///
/// assert_eq!(plan.records().len(), 1);
/// assert_eq!(plan.rows()[0][0], "2024-04-01");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Synchronizer {
    /// 検証済みの設定
    config: SyncConfig,
}

impl Synchronizer {
    /// 同期プランを計算する
    ///
    /// # 引数
    ///
    /// * `sheets` - 外部シェルが一括取得したソースグループ列（取得順）
    /// * `existing` - 宛先ログから取得済みの永続化レコード列
    ///
    /// # 戻り値
    ///
    /// 追記対象レコード（候補の時系列順を保存）と実行レポートを持つ
    /// [`SyncPlan`]。同じ入力に対して決定的です。
    pub fn plan(&self, sheets: &[SourceSheet], existing: &[LogRecord]) -> SyncPlan {
        // 1. 全ソースグループを1本の候補列に集約
        let aggregated = aggregate(sheets, &self.config.layout, self.config.default_year);

        // 2. 自然キーで既存ログとの差分を取る
        let records = new_records(&aggregated.records, existing);

        // 3. レポートを組み立てる
        let report = SyncReport {
            sheets_seen: aggregated.sheets_seen,
            sheets_parsed: aggregated.sheets_parsed,
            sheets_skipped: aggregated.sheets_skipped,
            cells_skipped: aggregated.cells_skipped,
            records_parsed: aggregated.records.len(),
            records_new: records.len(),
        };

        SyncPlan { records, report }
    }

    /// シリアライズ済み行形式の既存ログに対してプランを計算する
    ///
    /// 宛先ログをレコードに変換せず行のまま持っているシェル向けの
    /// 補助メソッドです。キー比較に使えない行（日付が解析不能など）は
    /// 黙ってスキップされます。スキップされた行はどの候補とも一致
    /// しないため、安全側（重複追記ではなく追記漏れなし）に働きます。
    pub fn plan_against_rows(
        &self,
        sheets: &[SourceSheet],
        existing_rows: &[Vec<String>],
    ) -> SyncPlan {
        let existing: Vec<LogRecord> = existing_rows
            .iter()
            .filter_map(|row| LogRecord::from_row(row))
            .collect();
        self.plan(sheets, &existing)
    }
}

/// 計算済みの同期プラン
///
/// 宛先ログに追記すべきレコード列と、実行レポートを保持します。
#[derive(Debug, Clone, PartialEq)]
pub struct SyncPlan {
    /// 追記対象レコード（時系列順）
    records: Vec<LogRecord>,

    /// 実行レポート
    report: SyncReport,
}

impl SyncPlan {
    /// 追記対象レコードを返す
    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    /// 追記対象レコードを宛先ログの行形式で返す
    ///
    /// 各行は9項目の固定レイアウトです（[`crate::output`]参照）。
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.records.iter().map(LogRecord::to_row).collect()
    }

    /// 実行レポートを返す
    pub fn report(&self) -> &SyncReport {
        &self.report
    }

    /// 追記対象が1件もないかどうか
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// プランをCSVとして書き出す
    ///
    /// # 引数
    ///
    /// * `writer` - 出力先のライター
    pub fn write_csv<W: Write>(&self, writer: &mut W) -> Result<(), GlucologError> {
        output::write_csv(&self.rows(), writer)
    }

    /// プランをJSONとして書き出す
    ///
    /// レコード列とレポートを1つのオブジェクトにまとめて出力します。
    pub fn write_json<W: Write>(&self, writer: &mut W) -> Result<(), GlucologError> {
        let value = serde_json::json!({
            "records": self.records,
            "report": self.report,
        });
        serde_json::to_writer_pretty(&mut *writer, &value)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}
