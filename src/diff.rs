//! Log Differencer Module
//!
//! 候補レコード列と永続化済みレコード列を自然キーで比較し、
//! 未登録のものだけを候補の順序を保ったまま返すモジュール。
//! 既存キーの`HashSet`インデックスを構築するため、照合は
//! 線形時間で完了します。この計算は決して失敗しません。

use std::collections::HashSet;

use crate::types::{LogRecord, NaturalKey};

/// 既存ログに存在しない候補レコードを返す
///
/// # 引数
///
/// * `candidates` - 集約済みの候補レコード列（時系列順）
/// * `existing` - 宛先ログから取得した永続化済みレコード列
///
/// # 戻り値
///
/// `candidates`の部分列（相対順序を保存）。`existing`が空の場合は
/// `candidates`全体のコピー。
pub(crate) fn new_records(candidates: &[LogRecord], existing: &[LogRecord]) -> Vec<LogRecord> {
    let index: HashSet<NaturalKey> = existing.iter().map(LogRecord::natural_key).collect();

    candidates
        .iter()
        .filter(|record| !index.contains(&record.natural_key()))
        .cloned()
        .collect()
}
