//! Repository traitパターン定義
//!
//! 台帳操作を抽象化し、HTTP層からストレージ実装を差し替え可能にする。

use async_trait::async_trait;

use crate::common::error::LedgerResult;
use crate::common::types::LedgerEntry;

/// 追記専用台帳のRepository trait
#[async_trait]
pub trait LedgerRepository: Send + Sync {
    /// スキーマを作成（存在すれば何もしない）
    async fn initialize(&self) -> LedgerResult<()>;
    /// エントリを追記し、採番済みエントリを返す
    async fn append(&self, hash: &str, timestamp: &str) -> LedgerResult<LedgerEntry>;
    /// 書き込みロック取得後に `stamp` で時刻を生成して追記する
    ///
    /// Timestamps produced this way are non-decreasing in id order.
    async fn append_stamped(
        &self,
        hash: &str,
        stamp: &(dyn Fn() -> String + Send + Sync),
    ) -> LedgerResult<LedgerEntry>;
    /// 全エントリをID昇順で取得
    async fn list_all(&self) -> LedgerResult<Vec<LedgerEntry>>;
    /// エントリ数を取得
    async fn count(&self) -> LedgerResult<i64>;
}
