//! REST APIハンドラー
//!
//! 記録の追記と履歴取得API

/// APIエラーレスポンス
pub mod error;
/// 台帳エンドポイント（`/record`, `/history`）
pub mod ledger;

use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// APIルーターを作成
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/record", post(ledger::record))
        .route("/history", get(ledger::history))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
