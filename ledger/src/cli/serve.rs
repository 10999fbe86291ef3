//! serve サブコマンド
//!
//! 台帳サーバーを起動します。

use crate::config::{ServerConfig, DEFAULT_DB_PATH, DEFAULT_HOST, DEFAULT_PORT};
use clap::Args;
use std::path::PathBuf;

/// serve サブコマンドの引数
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Listen port
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "LEDGER_PORT")]
    pub port: u16,

    /// Bind address
    #[arg(short = 'H', long, default_value = DEFAULT_HOST, env = "LEDGER_HOST")]
    pub host: String,

    /// SQLite database file
    #[arg(long, default_value = DEFAULT_DB_PATH, env = "LEDGER_DB_PATH")]
    pub db_path: PathBuf,
}

impl From<ServeArgs> for ServerConfig {
    fn from(args: ServeArgs) -> Self {
        Self {
            host: args.host,
            port: args.port,
            db_path: args.db_path,
        }
    }
}
