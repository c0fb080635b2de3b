//! HTTP transport over the dashboard's REST API.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::ClientConfig;
use crate::source::{CollectionSource, FetchError, FetchResult};

/// [`CollectionSource`] backed by `reqwest`, plus the mutating calls the
/// forms use.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    config: ClientConfig,
}

impl HttpSource {
    pub fn new(config: ClientConfig) -> FetchResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("livestock-client/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, config })
    }

    pub fn from_env() -> FetchResult<Self> {
        Self::new(ClientConfig::from_env())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn send(&self, request: RequestBuilder, path: &str) -> FetchResult<Value> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }

        let body = response.bytes().await?;
        if body.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&body)?)
    }

    /// POST a new record to a collection path.
    #[instrument(skip(self, body))]
    pub async fn create<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> FetchResult<Value> {
        debug!("creating record");
        self.send(self.client.post(self.config.url(path)).json(body), path)
            .await
    }

    /// PUT an existing record.
    #[instrument(skip(self, body))]
    pub async fn update<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> FetchResult<Value> {
        debug!("updating record");
        self.send(self.client.put(self.config.url(path)).json(body), path)
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, path: &str) -> FetchResult<Value> {
        debug!("deleting record");
        self.send(self.client.delete(self.config.url(path)), path).await
    }
}

#[async_trait]
impl CollectionSource for HttpSource {
    #[instrument(skip(self), fields(base_url = %self.config.base_url))]
    async fn fetch_collection(&self, path: &str) -> FetchResult<Value> {
        debug!("fetching collection");
        self.send(self.client.get(self.config.url(path)), path).await
    }
}
