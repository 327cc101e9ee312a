//! Index store collaborators and the publish step.
//!
//! The builder only produces records. Getting them into a search
//! index is the job of an [`IndexStore`]: clear everything, then
//! insert the full batch. [`publish`] wraps those two calls and
//! swallows failures, so a stale search index never fails a build.
//!
//! # Stores
//!
//! - **TantivyStore**: local BM25 index, also searchable from the CLI
//! - **JsonFileStore**: JSON array file in the exact wire shape
//! - **AlgoliaStore**: Algolia-compatible REST API

mod algolia;
mod json;
mod tantivy;

pub use algolia::AlgoliaStore;
pub use json::JsonFileStore;
pub use tantivy::{create_schema, SearchHit, TantivyStore, SCHEMA_VERSION};

use crate::core::config::{SinkConfig, SinkKind};
use crate::core::error::Result;
use crate::core::types::SearchRecord;
use async_trait::async_trait;
use serde::Serialize;

/// Destination of the record batch
#[async_trait]
pub trait IndexStore: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Remove every record from the index
    async fn clear_all(&self) -> Result<()>;

    /// Insert `records` as one batch
    async fn bulk_insert(&self, records: &[SearchRecord]) -> Result<()>;
}

/// Result of a publish attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PublishOutcome {
    /// Index replaced with the batch
    Published { records: usize },
    /// Store rejected the batch; the index may be stale
    Failed { reason: String },
    /// Publishing was not attempted
    Skipped,
}

impl PublishOutcome {
    pub fn is_published(&self) -> bool {
        matches!(self, PublishOutcome::Published { .. })
    }
}

/// Clear the index, then bulk-insert `records`.
///
/// Failures are logged and returned as [`PublishOutcome::Failed`];
/// no retry is attempted.
pub async fn publish(store: &dyn IndexStore, records: &[SearchRecord]) -> PublishOutcome {
    tracing::info!(
        "Publishing {} records to {} index",
        records.len(),
        store.name()
    );

    let result = async {
        store.clear_all().await?;
        store.bulk_insert(records).await
    }
    .await;

    match result {
        Ok(()) => {
            tracing::info!("Published {} records to {}", records.len(), store.name());
            PublishOutcome::Published {
                records: records.len(),
            }
        }
        Err(e) => {
            tracing::error!("Failed to publish to {}: {}", store.name(), e);
            PublishOutcome::Failed {
                reason: e.to_string(),
            }
        }
    }
}

/// Open the store selected by `config.kind`
pub fn open_store(config: &SinkConfig) -> Result<Box<dyn IndexStore>> {
    Ok(match config.kind {
        SinkKind::Tantivy => Box::new(TantivyStore::open_or_create(&config.index_dir)?),
        SinkKind::Json => Box::new(JsonFileStore::new(&config.json_path)),
        SinkKind::Algolia => Box::new(AlgoliaStore::from_config(&config.algolia)?),
    })
}

/// Open the configured store and [`publish`] to it.
///
/// A store that cannot be opened is a publish failure like any other:
/// logged and returned as [`PublishOutcome::Failed`].
pub async fn publish_to(config: &SinkConfig, records: &[SearchRecord]) -> PublishOutcome {
    match open_store(config) {
        Ok(store) => publish(store.as_ref(), records).await,
        Err(e) => {
            tracing::error!("Failed to open {} index: {}", config.kind.as_str(), e);
            PublishOutcome::Failed {
                reason: e.to_string(),
            }
        }
    }
}
