//! axumサーバー起動・シャットダウンハンドリング

use crate::common::error::{LedgerError, LedgerResult};
use crate::AppState;
use std::future::Future;
use tokio::net::TcpListener;
use tracing::info;

/// axumサーバーを起動し、シャットダウンシグナルを待機する
pub async fn run(state: AppState, bind_addr: &str) -> LedgerResult<()> {
    let listener = TcpListener::bind(bind_addr)
        .await
        .map_err(|e| LedgerError::Server(format!("Failed to bind to {}: {}", bind_addr, e)))?;

    serve(state, listener, shutdown_signal()).await
}

/// Serves on an already bound listener until `shutdown` completes.
pub async fn serve<F>(state: AppState, listener: TcpListener, shutdown: F) -> LedgerResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = crate::api::create_app(state);

    if let Ok(addr) = listener.local_addr() {
        info!("Motion ledger listening on {}", addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| LedgerError::Server(e.to_string()))?;

    info!("Server shutdown complete");
    Ok(())
}

/// シャットダウンシグナルを待機
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down...");
        }
    }
}
