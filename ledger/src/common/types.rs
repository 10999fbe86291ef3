//! 共通型定義
//!
//! 台帳エントリ、モーション記録、記録レシート等のコアデータ型

use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::collections::BTreeMap;

/// Timestamp layout used for every ledger entry (second resolution, local time).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 台帳エントリ
///
/// Assigned by the store on append and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LedgerEntry {
    /// 連番ID（追記時に採番、再利用されない）
    pub id: i64,
    /// 64文字の16進ダイジェスト
    pub hash: String,
    /// 追記時刻（`YYYY-MM-DD HH:MM:SS`）
    pub timestamp: String,
}

/// 患者のモーション記録（`POST /record` のリクエストボディ）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MotionRecord {
    /// 患者/被験者ID
    pub patient_id: String,
    /// 動作スコア（キー順にソート済み）
    pub movement_scores: BTreeMap<String, Score>,
}

/// 2^53: below this every whole `f64` is the only integer that rounds to it.
const MAX_EXACT_FLOAT_INT: f64 = 9_007_199_254_740_992.0;

/// 動作スコア
///
/// JSON integers are kept exactly (full `i64`/`u64` range). Whole-number
/// floats below 2^53 in magnitude are normalised to integers, so `12` and `12.0` are the
/// same score. Whole-number floats beyond that range are rejected because the
/// integer the client meant cannot be recovered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Number", into = "Number")]
pub struct Score(Number);

impl Score {
    /// Canonical numeric value used for hashing.
    pub fn as_number(&self) -> &Number {
        &self.0
    }

    /// Lossy `f64` view of the score.
    pub fn as_f64(&self) -> f64 {
        self.0.as_f64().unwrap_or(f64::NAN)
    }
}

impl TryFrom<Number> for Score {
    type Error = String;

    fn try_from(number: Number) -> Result<Self, Self::Error> {
        if number.is_i64() || number.is_u64() {
            return Ok(Score(number));
        }
        let value = number
            .as_f64()
            .ok_or_else(|| format!("score {} is not a number", number))?;
        if value.fract() != 0.0 {
            return Ok(Score(number));
        }
        if value.abs() >= MAX_EXACT_FLOAT_INT {
            return Err(format!(
                "score {} is not exactly representable; whole-number scores must fit in a 64-bit integer",
                number
            ));
        }
        // exact: |value| < 2^53
        Ok(Score(Number::from(value as i64)))
    }
}

impl From<Score> for Number {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl From<i64> for Score {
    fn from(value: i64) -> Self {
        Score(Number::from(value))
    }
}

/// 記録レシート（`POST /record` のレスポンスボディ）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordReceipt {
    /// 記録のダイジェスト
    pub hash: String,
    /// 記録時刻
    pub timestamp: String,
}

impl From<&LedgerEntry> for RecordReceipt {
    fn from(entry: &LedgerEntry) -> Self {
        Self {
            hash: entry.hash.clone(),
            timestamp: entry.timestamp.clone(),
        }
    }
}

/// Current wall-clock time rendered with [`TIMESTAMP_FORMAT`].
pub fn current_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Returns true if `value` parses with [`TIMESTAMP_FORMAT`].
pub fn is_ledger_timestamp(value: &str) -> bool {
    value.len() == 19 && chrono::NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).is_ok()
}
