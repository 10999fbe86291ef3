//! SHA-256 record fingerprint
//!
//! Records are rendered to a canonical JSON text before hashing so that the
//! digest does not depend on the order in which a client sent its score keys.
//!
//! Canonical form: compact JSON, top-level keys `movement_scores` then
//! `patient_id`, score keys sorted by byte order. Integer scores are rendered
//! exactly and whole-number floats as integers, so `12` and `12.0` hash
//! identically while `9007199254740993` and `9007199254740992` do not.

use crate::common::types::MotionRecord;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

/// Length of a hex-encoded SHA-256 digest.
pub const DIGEST_HEX_LEN: usize = 64;

/// Canonical text that [`digest`] hashes.
pub fn canonical_payload(record: &MotionRecord) -> String {
    // BTreeMap iteration is already sorted; insertion order matches it so the
    // output is identical whether or not serde_json preserves insertion order.
    let scores: Map<String, Value> = record
        .movement_scores
        .iter()
        .map(|(name, score)| (name.clone(), Value::Number(score.as_number().clone())))
        .collect();

    let mut root = Map::new();
    root.insert("movement_scores".to_string(), Value::Object(scores));
    root.insert(
        "patient_id".to_string(),
        Value::String(record.patient_id.clone()),
    );
    Value::Object(root).to_string()
}

/// Lowercase hex SHA-256 of the record's canonical payload.
pub fn digest(record: &MotionRecord) -> String {
    let hash = Sha256::digest(canonical_payload(record).as_bytes());
    format!("{:x}", hash)
}

/// Returns true for a 64-character lowercase hex string.
pub fn is_digest(value: &str) -> bool {
    value.len() == DIGEST_HEX_LEN
        && value
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}
