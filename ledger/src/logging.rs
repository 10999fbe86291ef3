//! ロギング初期化ユーティリティ
//!
//! `LEDGER_LOG_LEVEL`（未設定時は`RUST_LOG`、いずれも無ければ`info`）から
//! フィルタを構築し、tracing-subscriberのfmtレイヤーを登録する。

use crate::common::error::{LedgerError, LedgerResult};
use crate::config::get_env;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_LEVEL_ENV: &str = "LEDGER_LOG_LEVEL";

const DEFAULT_LOG_FILTER: &str = "info";

/// Resolves the filter directive from the environment.
pub fn filter_directive() -> String {
    get_env(LOG_LEVEL_ENV)
        .or_else(|| get_env("RUST_LOG"))
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Installs the global tracing subscriber.
pub fn init() -> LedgerResult<()> {
    let directive = filter_directive();
    let filter = EnvFilter::try_new(&directive).map_err(|e| {
        LedgerError::Config(format!("Invalid log filter '{}': {}", directive, e))
    })?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()
        .map_err(|e| LedgerError::Config(format!("Failed to initialize logging: {}", e)))
}
