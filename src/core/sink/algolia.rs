//! Algolia-compatible REST index store.
//!
//! Uses two endpoints of the v1 indexing API:
//!
//! - `POST /1/indexes/{index}/clear`
//! - `POST /1/indexes/{index}/batch` with one `addObject` action per record
//!
//! Batching beyond a single request is left to the service.

use crate::core::config::AlgoliaConfig;
use crate::core::error::{DocsiftError, Result};
use crate::core::sink::IndexStore;
use crate::core::types::SearchRecord;
use async_trait::async_trait;
use serde::Serialize;

#[derive(Serialize)]
struct BatchRequest<'a> {
    requests: Vec<BatchAction<'a>>,
}

#[derive(Serialize)]
struct BatchAction<'a> {
    action: &'static str,
    body: &'a SearchRecord,
}

/// Index store talking to an Algolia-compatible HTTP API
pub struct AlgoliaStore {
    client: reqwest::Client,
    base_url: String,
    app_id: String,
    index_name: String,
    api_key: Option<String>,
}

impl std::fmt::Debug for AlgoliaStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlgoliaStore")
            .field("base_url", &self.base_url)
            .field("app_id", &self.app_id)
            .field("index_name", &self.index_name)
            .finish()
    }
}

impl AlgoliaStore {
    /// Create a store; `base_url` defaults to `https://{app_id}.algolia.net`
    pub fn from_config(config: &AlgoliaConfig) -> Result<Self> {
        if config.app_id.is_empty() || config.index_name.is_empty() {
            return Err(DocsiftError::ConfigError(
                "Algolia sink requires app_id and index_name".to_string(),
            ));
        }

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| format!("https://{}.algolia.net", config.app_id));

        Ok(Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            app_id: config.app_id.clone(),
            index_name: config.index_name.clone(),
            api_key: config.api_key.clone(),
        })
    }

    fn endpoint(&self, operation: &str) -> String {
        format!(
            "{}/1/indexes/{}/{}",
            self.base_url, self.index_name, operation
        )
    }

    async fn post<T: Serialize + ?Sized>(&self, operation: &str, body: &T) -> Result<()> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            DocsiftError::Publish("Algolia admin API key is not set".to_string())
        })?;

        let response = self
            .client
            .post(self.endpoint(operation))
            .header("X-Algolia-Application-Id", &self.app_id)
            .header("X-Algolia-API-Key", api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(DocsiftError::Publish(format!(
                "{operation} returned {status}: {message}"
            )));
        }

        tracing::debug!("Algolia {} on '{}' succeeded", operation, self.index_name);
        Ok(())
    }
}

#[async_trait]
impl IndexStore for AlgoliaStore {
    fn name(&self) -> &str {
        "algolia"
    }

    async fn clear_all(&self) -> Result<()> {
        self.post("clear", &serde_json::json!({})).await
    }

    async fn bulk_insert(&self, records: &[SearchRecord]) -> Result<()> {
        let batch = BatchRequest {
            requests: records
                .iter()
                .map(|record| BatchAction {
                    action: "addObject",
                    body: record,
                })
                .collect(),
        };
        self.post("batch", &batch).await
    }
}
