//! データベースアクセス層
//!
//! SQLiteベースのデータ永続化

/// 台帳ストレージ
pub mod ledger;

/// Repository traitパターン
pub mod traits;

use crate::common::error::{LedgerError, LedgerResult};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::Path;
use std::time::Duration;

/// Busy timeout applied to every pooled connection.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// データベースファイルを開いて接続プールを作成する
///
/// 親ディレクトリとファイルが存在しない場合は作成する。WALモード・
/// `synchronous = FULL` で開くため、コミットは返却前に永続化される。
pub async fn connect(path: &Path) -> LedgerResult<SqlitePool> {
    // SQLiteファイルはディレクトリが存在しないと作成できないため、先に作成しておく
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to create database directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Full)
        .busy_timeout(BUSY_TIMEOUT);

    let pool = SqlitePoolOptions::new()
        .connect_with(options)
        .await
        .map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to open database {}: {}",
                path.display(),
                e
            ))
        })?;

    tracing::info!("Database opened: {}", path.display());
    Ok(pool)
}
