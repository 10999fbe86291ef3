//! 台帳ストレージ
//!
//! SQLiteベースの追記専用テーブル `ledger` を管理する。

use crate::common::error::{LedgerError, LedgerResult};
use crate::common::types::LedgerEntry;
use async_trait::async_trait;
use sqlx::SqlitePool;
use tokio::sync::Mutex;
use tracing::{debug, error};

use super::traits::LedgerRepository;

/// 追記専用の台帳ストレージ
///
/// Appends are serialized through `write_lock`; reads go straight to the pool.
pub struct LedgerStore {
    pool: SqlitePool,
    write_lock: Mutex<()>,
}

/// sqlx::FromRow用の行構造体
#[derive(Debug, sqlx::FromRow)]
struct LedgerRow {
    id: i64,
    hash: String,
    timestamp: String,
}

impl From<LedgerRow> for LedgerEntry {
    fn from(row: LedgerRow) -> Self {
        Self {
            id: row.id,
            hash: row.hash,
            timestamp: row.timestamp,
        }
    }
}

impl LedgerStore {
    /// 新しいストレージインスタンスを作成
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            write_lock: Mutex::new(()),
        }
    }

    /// Creates the `ledger` table if it does not exist yet.
    pub async fn initialize(&self) -> LedgerResult<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS ledger (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                hash TEXT NOT NULL,
                timestamp TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to create ledger table", e))?;

        Ok(())
    }

    /// Appends one entry and returns it with its assigned id.
    pub async fn append(&self, hash: &str, timestamp: &str) -> LedgerResult<LedgerEntry> {
        self.append_stamped(hash, &|| timestamp.to_string()).await
    }

    /// Appends one entry whose timestamp is taken while the write lock is held,
    /// so ids and timestamps advance together.
    pub async fn append_stamped(
        &self,
        hash: &str,
        stamp: &(dyn Fn() -> String + Send + Sync),
    ) -> LedgerResult<LedgerEntry> {
        let _guard = self.write_lock.lock().await;
        let timestamp = stamp();

        let result = sqlx::query("INSERT INTO ledger (hash, timestamp) VALUES (?, ?)")
            .bind(hash)
            .bind(&timestamp)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to append ledger entry", e))?;

        let entry = LedgerEntry {
            id: result.last_insert_rowid(),
            hash: hash.to_string(),
            timestamp,
        };
        debug!(id = entry.id, hash = %entry.hash, "Ledger entry appended");
        Ok(entry)
    }

    /// すべてのエントリをID昇順で取得
    pub async fn list_all(&self) -> LedgerResult<Vec<LedgerEntry>> {
        let rows = sqlx::query_as::<_, LedgerRow>(
            "SELECT id, hash, timestamp FROM ledger ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to load ledger entries", e))?;

        Ok(rows.into_iter().map(LedgerEntry::from).collect())
    }

    /// エントリ数を取得
    pub async fn count(&self) -> LedgerResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM ledger")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to count ledger entries", e))?;
        Ok(count)
    }
}

fn storage_error(context: &str, err: sqlx::Error) -> LedgerError {
    error!(error = %err, "{}", context);
    LedgerError::Storage(format!("{}: {}", context, err))
}

#[async_trait]
impl LedgerRepository for LedgerStore {
    async fn initialize(&self) -> LedgerResult<()> {
        LedgerStore::initialize(self).await
    }

    async fn append(&self, hash: &str, timestamp: &str) -> LedgerResult<LedgerEntry> {
        LedgerStore::append(self, hash, timestamp).await
    }

    async fn append_stamped(
        &self,
        hash: &str,
        stamp: &(dyn Fn() -> String + Send + Sync),
    ) -> LedgerResult<LedgerEntry> {
        LedgerStore::append_stamped(self, hash, stamp).await
    }

    async fn list_all(&self) -> LedgerResult<Vec<LedgerEntry>> {
        LedgerStore::list_all(self).await
    }

    async fn count(&self) -> LedgerResult<i64> {
        LedgerStore::count(self).await
    }
}
