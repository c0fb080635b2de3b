//! The fetch contract the loader depends on.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Fetch errors.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("HTTP {status} for {path}")]
    Status { status: u16, path: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Resource not found: {0}")]
    NotFound(String),
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Transport(e.to_string())
    }
}

pub type FetchResult<T> = Result<T, FetchError>;

/// Something that can return a full snapshot of a remote collection.
///
/// Implementations return the decoded payload as-is; shape checking and
/// coercion happen in ingestion.
#[async_trait]
pub trait CollectionSource: Send + Sync {
    async fn fetch_collection(&self, path: &str) -> FetchResult<Value>;
}

/// In-memory source keyed by path (for testing and offline demos).
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    payloads: HashMap<String, Value>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the payload returned for `path`.
    pub fn with(mut self, path: impl Into<String>, payload: Value) -> Self {
        self.payloads.insert(path.into(), payload);
        self
    }
}

#[async_trait]
impl CollectionSource for StaticSource {
    async fn fetch_collection(&self, path: &str) -> FetchResult<Value> {
        self.payloads
            .get(path)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(path.to_string()))
    }
}
