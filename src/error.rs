//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use thiserror::Error;

/// glucologクレート全体で使用するエラー型
///
/// このエラー型は、同期プランの構築・出力処理中に発生するすべての
/// エラーを統一的に扱うために使用されます。
///
/// セル・ラベル・グリッド形状の解析失敗はエラーでは**ありません**。
/// それらはソフトフェイル（欠損値・スキップカウント）として
/// [`SyncReport`](crate::SyncReport)に集計されます。エラーになるのは
/// I/O、シリアライズ、設定検証の3種類のみです。
///
/// # エラーの種類
///
/// - `Io`: I/O操作中に発生したエラー（CSV書き出し失敗など）
/// - `Json`: JSON出力のシリアライズに失敗したエラー
/// - `Config`: 設定の検証に失敗したエラー（無効なフォームレイアウトなど）
///
/// # 使用例
///
/// ```rust
/// use glucolog::{GlucologError, SyncBuilder, FormLayout};
///
/// // スロットが1つもないレイアウトはbuild()で拒否される
/// let mut layout = FormLayout::default();
/// layout.slots.clear();
///
/// let result = SyncBuilder::new().with_layout(layout).build();
/// match result {
///     Err(GlucologError::Config(msg)) => {
///         println!("Configuration error: {}", msg);
///     }
///     _ => panic!("expected a configuration error"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum GlucologError {
    /// I/O操作中に発生したエラー
    ///
    /// CSV/JSON出力先のライターへの書き込み失敗など、標準ライブラリの
    /// `std::io::Error`が発生した場合に使用されます。
    ///
    /// `#[from]`属性により、`std::io::Error`から自動的に変換されます。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON出力のシリアライズエラー
    ///
    /// `#[from]`属性により、`serde_json::Error`から自動的に変換されます。
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// 設定の検証に失敗したエラー
    ///
    /// `SyncBuilder::build()`時に設定を検証し、無効な設定が検出された
    /// 場合に発生します。例えば、タイムスロットが1つも定義されていない
    /// レイアウトや、列が重複したレイアウトなどです。
    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    // Ioエラーのテスト
    #[test]
    fn test_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: GlucologError = io_err.into();

        match error {
            GlucologError::Io(e) => {
                assert_eq!(e.kind(), io::ErrorKind::NotFound);
                assert_eq!(e.to_string(), "File not found");
            }
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied");
        let error: GlucologError = io_err.into();

        let error_msg = error.to_string();
        assert!(error_msg.contains("IO error"));
        assert!(error_msg.contains("Permission denied"));
    }

    // Configエラーのテスト
    #[test]
    fn test_config_error() {
        let error = GlucologError::Config("Form layout has no time slots".to_string());

        match error {
            GlucologError::Config(msg) => {
                assert_eq!(msg, "Form layout has no time slots");
            }
            _ => panic!("Expected Config error"),
        }
    }

    #[test]
    fn test_config_error_display() {
        let error = GlucologError::Config("Duplicate slot column: 2".to_string());
        let error_msg = error.to_string();

        assert!(error_msg.contains("Configuration error"));
        assert!(error_msg.contains("Duplicate slot column: 2"));
    }

    // エラー変換のテスト（?演算子の動作確認）
    #[test]
    fn test_error_conversion_with_question_mark() {
        fn io_operation() -> Result<(), GlucologError> {
            let _file = std::fs::File::open("nonexistent_fixture.csv")?;
            Ok(())
        }

        let result = io_operation();
        assert!(result.is_err());

        match result {
            Err(GlucologError::Io(_)) => {}
            _ => panic!("Expected Io error from ? operator"),
        }
    }

    // エラーメッセージのフォーマット確認
    #[test]
    fn test_all_error_formats() {
        // Io
        let io_err: GlucologError = io::Error::other("test io").into();
        assert!(io_err.to_string().starts_with("IO error"));

        // Json
        let bad = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let json_err: GlucologError = bad.into();
        assert!(json_err
            .to_string()
            .starts_with("JSON serialization error"));

        // Config
        let config_err = GlucologError::Config("test config".to_string());
        assert!(config_err.to_string().starts_with("Configuration error"));
    }
}
