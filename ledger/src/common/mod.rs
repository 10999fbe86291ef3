//! 共通モジュール

/// エラー型
pub mod error;

/// コアデータ型
pub mod types;
