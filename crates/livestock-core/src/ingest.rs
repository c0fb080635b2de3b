//! Snapshot ingestion.
//!
//! Turns a fetched payload into a typed snapshot. This is the only place
//! malformed input is tolerated: a payload that is not an array becomes an
//! empty snapshot, and array elements that cannot be read as a record are
//! dropped.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

/// Ingestion errors.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type IngestResult<T> = Result<T, IngestError>;

/// Parse a JSON document into a snapshot of records.
pub fn parse_collection<T: DeserializeOwned>(json: &str) -> IngestResult<Vec<T>> {
    let value: Value = serde_json::from_str(json)?;
    Ok(collection_from_value(value))
}

/// Convert an already decoded payload into a snapshot of records.
pub fn collection_from_value<T: DeserializeOwned>(value: Value) -> Vec<T> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            warn!(kind = value_kind(&other), "payload is not an array, using an empty snapshot");
            return Vec::new();
        }
    };

    let received = items.len();
    let records: Vec<T> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(index, error = %e, "skipping unreadable record");
                None
            }
        })
        .collect();

    debug!(received, kept = records.len(), "snapshot ingested");
    records
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
