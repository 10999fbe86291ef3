//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! `LedgerError`は`status_code()`と`external_message()`を提供し、
//! 内部詳細を露出しないHTTPエラーレスポンスを生成できます。

use axum::http::StatusCode;
use thiserror::Error;

/// Ledger error type
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The backing store could not complete a read or write
    #[error("Storage failure: {0}")]
    Storage(String),

    /// Malformed input rejected at the request boundary
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Server bind/serve error
    #[error("Server error: {0}")]
    Server(String),
}

impl LedgerError {
    /// Returns a safe error message for external clients.
    ///
    /// Storage details (file paths, SQLite messages) stay in the server logs;
    /// use the `Display` implementation for those.
    pub fn external_message(&self) -> String {
        match self {
            Self::Storage(_) => "Storage failure".to_string(),
            Self::Validation(msg) => msg.clone(),
            Self::Config(_) => "Configuration error".to_string(),
            Self::Server(_) => "Internal server error".to_string(),
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Result type alias (ledger)
pub type LedgerResult<T> = Result<T, LedgerError>;
