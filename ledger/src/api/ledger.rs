//! 台帳API
//!
//! `POST /record` と `GET /history`

use crate::api::error::AppError;
use crate::common::types::{current_timestamp, LedgerEntry, MotionRecord, RecordReceipt};
use crate::fingerprint;
use crate::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::info;

/// POST /record - 記録をハッシュ化して台帳に追記
pub async fn record(
    State(state): State<AppState>,
    payload: Result<Json<MotionRecord>, JsonRejection>,
) -> Result<Json<RecordReceipt>, AppError> {
    let Json(record) = payload?;

    let hash = fingerprint::digest(&record);
    debug_assert!(fingerprint::is_digest(&hash));
    let entry = state.ledger.append_stamped(&hash, &current_timestamp).await?;

    info!(id = entry.id, hash = %entry.hash, "Recorded motion data");
    Ok(Json(RecordReceipt::from(&entry)))
}

/// GET /history - 全エントリをID昇順で返す
pub async fn history(State(state): State<AppState>) -> Result<Json<Vec<LedgerEntry>>, AppError> {
    let entries = state.ledger.list_all().await?;
    Ok(Json(entries))
}
