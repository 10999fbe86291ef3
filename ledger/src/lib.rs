//! Motion Ledger Server
//!
//! モーション記録のハッシュを追記専用台帳に記録するHTTPサーバー

#![warn(missing_docs)]

/// 共通型定義
pub mod common;

/// REST APIハンドラー
pub mod api;

/// データベースアクセス
pub mod db;

/// 記録のフィンガープリント（SHA-256）
pub mod fingerprint;

/// ロギング初期化ユーティリティ
pub mod logging;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// CLIインターフェース
pub mod cli;

/// axumサーバー起動
pub mod server;

use std::sync::Arc;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// 台帳ストレージ（プロセス内で共有される単一ハンドル）
    pub ledger: Arc<dyn db::traits::LedgerRepository>,
}

impl AppState {
    /// 台帳ストレージからAppStateを構築する
    pub fn new(ledger: Arc<dyn db::traits::LedgerRepository>) -> Self {
        Self { ledger }
    }
}
