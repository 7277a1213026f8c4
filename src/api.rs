//! Public API Types
//!
//! 公開APIで使用する列挙型を定義するモジュール。

use serde::{Deserialize, Serialize};

/// 血糖値の変化傾向（トレンド）
///
/// CGMが出力する矢印グリフから導出される、血糖値の変化方向・速度を
/// 表します。紙のフォームにはグリフとして記入され、正規化ログには
/// 列挙値と表示用グリフのペアとして書き出されます。
///
/// # グリフ対応表
///
/// | グリフ | トレンド |
/// | ------ | -------- |
/// | `⬆⬆` / `↑↑` | `RisingRapidly` |
/// | `⬆` / `↑` | `Rising` |
/// | `↗` | `RisingSlowly` |
/// | `➡` / `→` | `Steady` |
/// | `↘` | `FallingSlowly` |
/// | `⬇` / `↓` | `Falling` |
/// | `⬇⬇` / `↓↓` | `FallingRapidly` |
/// | （認識できないグリフ） | `Unknown` |
///
/// `Unknown`は表示用グリフを持ちません（[`Trend::symbol`]が`None`を
/// 返します）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum Trend {
    /// 急上昇（ダブル上矢印）
    RisingRapidly,

    /// 上昇
    Rising,

    /// 緩やかな上昇
    RisingSlowly,

    /// 横ばい
    Steady,

    /// 緩やかな下降
    FallingSlowly,

    /// 下降
    Falling,

    /// 急下降（ダブル下矢印）
    FallingRapidly,

    /// 認識できないグリフが付随していた場合
    ///
    /// 数値自体は有効として扱い、トレンドのみ不明とします。
    Unknown,
}

impl Trend {
    /// 安定したスラッグ表現を返す
    ///
    /// シリアライズ済み行のトレンド列に使用される、ケバブケースの
    /// 固定文字列です。
    ///
    /// # 使用例
    ///
    /// ```rust
    /// use glucolog::Trend;
    ///
    /// assert_eq!(Trend::Rising.as_str(), "rising");
    /// assert_eq!(Trend::RisingRapidly.as_str(), "rising-rapidly");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::RisingRapidly => "rising-rapidly",
            Trend::Rising => "rising",
            Trend::RisingSlowly => "rising-slowly",
            Trend::Steady => "steady",
            Trend::FallingSlowly => "falling-slowly",
            Trend::Falling => "falling",
            Trend::FallingRapidly => "falling-rapidly",
            Trend::Unknown => "unknown",
        }
    }

    /// スラッグ表現からトレンドを復元する
    ///
    /// [`Trend::as_str`]の逆変換です。未知のスラッグは`None`を返します。
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "rising-rapidly" => Some(Trend::RisingRapidly),
            "rising" => Some(Trend::Rising),
            "rising-slowly" => Some(Trend::RisingSlowly),
            "steady" => Some(Trend::Steady),
            "falling-slowly" => Some(Trend::FallingSlowly),
            "falling" => Some(Trend::Falling),
            "falling-rapidly" => Some(Trend::FallingRapidly),
            "unknown" => Some(Trend::Unknown),
            _ => None,
        }
    }

    /// 表示用の正準グリフを返す
    ///
    /// トレンドに1:1対応する矢印グリフです。`Unknown`はグリフを
    /// 持たないため`None`を返します。
    ///
    /// # 使用例
    ///
    /// ```rust
    /// use glucolog::Trend;
    ///
    /// assert_eq!(Trend::Steady.symbol(), Some("➡"));
    /// assert_eq!(Trend::Unknown.symbol(), None);
    /// ```
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            Trend::RisingRapidly => Some("⬆⬆"),
            Trend::Rising => Some("⬆"),
            Trend::RisingSlowly => Some("↗"),
            Trend::Steady => Some("➡"),
            Trend::FallingSlowly => Some("↘"),
            Trend::Falling => Some("⬇"),
            Trend::FallingRapidly => Some("⬇⬇"),
            Trend::Unknown => None,
        }
    }
}
