//! Contract Test: POST /record

use crate::support::{app_with_state, build_app, post_json, post_raw, TestApp};
use async_trait::async_trait;
use axum::http::StatusCode;
use motion_ledger::common::error::{LedgerError, LedgerResult};
use motion_ledger::common::types::{is_ledger_timestamp, LedgerEntry, MotionRecord};
use motion_ledger::db::traits::LedgerRepository;
use motion_ledger::fingerprint;
use motion_ledger::AppState;
use serde_json::json;
use std::sync::Arc;

/// POST /record - 正常系: ハッシュとタイムスタンプを返す
#[tokio::test]
async fn test_record_returns_hash_and_timestamp() {
    let TestApp { app, _dir, .. } = build_app().await;

    let payload = json!({"patient_id": "p1", "movement_scores": {"arm": 12, "leg": 7}});
    let (status, body) = post_json(&app, "/record", &payload).await;

    assert_eq!(status, StatusCode::OK);
    let object = body.as_object().unwrap();
    assert_eq!(object.len(), 2, "unexpected fields: {body}");

    let hash = body["hash"].as_str().unwrap();
    assert!(fingerprint::is_digest(hash));
    let record: MotionRecord = serde_json::from_value(payload).unwrap();
    assert_eq!(hash, fingerprint::digest(&record));

    assert!(is_ledger_timestamp(body["timestamp"].as_str().unwrap()));
}

/// POST /record - 同一ペイロードは別エントリとして記録される
#[tokio::test]
async fn test_identical_payloads_are_not_deduplicated() {
    let TestApp { app, store, _dir } = build_app().await;

    let payload = json!({"patient_id": "p1", "movement_scores": {"arm": 12, "leg": 7}});
    let (_, first) = post_json(&app, "/record", &payload).await;
    let (_, second) = post_json(&app, "/record", &payload).await;

    assert_eq!(first["hash"], second["hash"]);

    let entries = store.list_all().await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_ne!(entries[0].id, entries[1].id);
    assert_eq!(entries[0].hash, entries[1].hash);
}

/// POST /record - スコアのキー順はハッシュに影響しない
#[tokio::test]
async fn test_score_key_order_does_not_change_hash() {
    let TestApp { app, _dir, .. } = build_app().await;

    let (_, a) = post_raw(
        &app,
        "/record",
        Some("application/json"),
        r#"{"patient_id":"p1","movement_scores":{"arm":12,"leg":7}}"#,
    )
    .await;
    let (_, b) = post_raw(
        &app,
        "/record",
        Some("application/json"),
        r#"{"movement_scores":{"leg":7,"arm":12},"patient_id":"p1"}"#,
    )
    .await;

    assert_eq!(a["hash"], b["hash"]);
}

/// POST /record - 異常系: 必須フィールド欠落は422
#[tokio::test]
async fn test_missing_field_is_rejected() {
    let TestApp { app, store, _dir } = build_app().await;

    let (status, body) = post_json(&app, "/record", &json!({"patient_id": "p1"})).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].is_string());
    assert_eq!(store.count().await.unwrap(), 0);
}

/// POST /record - 異常系: 数値以外のスコアは422
#[tokio::test]
async fn test_non_numeric_score_is_rejected() {
    let TestApp { app, store, _dir } = build_app().await;

    let payload = json!({"patient_id": "p1", "movement_scores": {"arm": "high"}});
    let (status, _) = post_json(&app, "/record", &payload).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(store.count().await.unwrap(), 0);
}

/// POST /record - 異常系: 不正なJSONは422
#[tokio::test]
async fn test_invalid_json_is_rejected() {
    let TestApp { app, _dir, .. } = build_app().await;

    let (status, body) =
        post_raw(&app, "/record", Some("application/json"), "{not json").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].is_string());
}

/// POST /record - 異常系: Content-Type欠落は422
#[tokio::test]
async fn test_missing_content_type_is_rejected() {
    let TestApp { app, _dir, .. } = build_app().await;

    let (status, _) = post_raw(
        &app,
        "/record",
        None,
        r#"{"patient_id":"p1","movement_scores":{}}"#,
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

/// POST /record - 2^53を超える整数スコアも区別してハッシュ化される
#[tokio::test]
async fn test_large_integer_scores_hash_distinctly() {
    let TestApp { app, store, _dir } = build_app().await;

    let (status_a, a) = post_raw(
        &app,
        "/record",
        Some("application/json"),
        r#"{"patient_id":"p1","movement_scores":{"arm":9007199254740993}}"#,
    )
    .await;
    let (status_b, b) = post_raw(
        &app,
        "/record",
        Some("application/json"),
        r#"{"patient_id":"p1","movement_scores":{"arm":9007199254740992}}"#,
    )
    .await;

    assert_eq!(status_a, StatusCode::OK);
    assert_eq!(status_b, StatusCode::OK);
    assert_ne!(a["hash"], b["hash"]);
    assert_eq!(store.count().await.unwrap(), 2);
}

/// POST /record - 整数と小数表記の同値スコアは同じハッシュ
#[tokio::test]
async fn test_integer_and_float_scores_hash_alike() {
    let TestApp { app, _dir, .. } = build_app().await;

    let (_, a) = post_raw(
        &app,
        "/record",
        Some("application/json"),
        r#"{"patient_id":"p1","movement_scores":{"arm":12}}"#,
    )
    .await;
    let (_, b) = post_raw(
        &app,
        "/record",
        Some("application/json"),
        r#"{"patient_id":"p1","movement_scores":{"arm":12.0}}"#,
    )
    .await;

    assert_eq!(a["hash"], b["hash"]);
}

/// POST /record - 異常系: 64bitに収まらない整数スコアは422
#[tokio::test]
async fn test_unrepresentable_integer_score_is_rejected() {
    let TestApp { app, store, _dir } = build_app().await;

    let (status, body) = post_raw(
        &app,
        "/record",
        Some("application/json"),
        r#"{"patient_id":"p1","movement_scores":{"arm":18446744073709551616}}"#,
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].is_string());
    assert_eq!(store.count().await.unwrap(), 0);
}

struct UnavailableLedger;

#[async_trait]
impl LedgerRepository for UnavailableLedger {
    async fn initialize(&self) -> LedgerResult<()> {
        Ok(())
    }

    async fn append(&self, _hash: &str, _timestamp: &str) -> LedgerResult<LedgerEntry> {
        Err(LedgerError::Storage(
            "disk I/O error at /srv/ledger.db".to_string(),
        ))
    }

    async fn append_stamped(
        &self,
        hash: &str,
        stamp: &(dyn Fn() -> String + Send + Sync),
    ) -> LedgerResult<LedgerEntry> {
        self.append(hash, &stamp()).await
    }

    async fn list_all(&self) -> LedgerResult<Vec<LedgerEntry>> {
        Err(LedgerError::Storage("database is locked".to_string()))
    }

    async fn count(&self) -> LedgerResult<i64> {
        Err(LedgerError::Storage("database is locked".to_string()))
    }
}

/// POST /record - 異常系: ストレージ障害は500、内部詳細は返さない
#[tokio::test]
async fn test_storage_failure_is_500() {
    let app = app_with_state(AppState::new(Arc::new(UnavailableLedger)));

    let payload = json!({"patient_id": "p1", "movement_scores": {"arm": 12}});
    let (status, body) = post_json(&app, "/record", &payload).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Storage failure"}));
}

/// GET /history - 異常系: ストレージ障害は500
#[tokio::test]
async fn test_history_storage_failure_is_500() {
    let app = app_with_state(AppState::new(Arc::new(UnavailableLedger)));

    let (status, body) = crate::support::get_json(&app, "/history").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Storage failure"}));
}
