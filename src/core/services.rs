//! Unified service container for docsift
//!
//! Provides shared access to the content store and configuration,
//! and builds pipelines and index stores on demand.

use crate::core::config::{Config, SinkConfig, SinkKind};
use crate::core::content::{ContentStore, MarkdownStore};
use crate::core::error::Result;
use crate::core::indexer::{IndexingPipeline, RecordBuilder};
use crate::core::sink::{publish_to, PublishOutcome, TantivyStore};
use crate::core::types::SearchRecord;
use std::sync::Arc;

/// Unified services container
#[derive(Clone)]
pub struct Services {
    /// Source of documentation pages
    pub content: Arc<dyn ContentStore>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration, backed by the markdown store
    pub fn new(config: Config) -> Result<Self> {
        let content = Arc::new(MarkdownStore::from_config(&config.content)?);
        Ok(Self::with_store(config, content))
    }

    /// Create services around an explicit content store
    pub fn with_store(config: Config, content: Arc<dyn ContentStore>) -> Self {
        Self {
            content,
            config: Arc::new(config),
        }
    }

    /// Pipeline over the configured collection
    pub fn create_pipeline(&self) -> IndexingPipeline {
        IndexingPipeline::from_config(Arc::clone(&self.content), &self.config)
    }

    /// Record builder with the configured URL prefix and root label
    pub fn record_builder(&self) -> RecordBuilder {
        RecordBuilder::from_config(&self.config.index)
    }

    /// Configured sink settings, with `kind` overriding the store kind
    pub fn sink_config(&self, kind: Option<SinkKind>) -> SinkConfig {
        let mut sink = self.config.sink.clone();
        if let Some(kind) = kind {
            sink.kind = kind;
        }
        sink
    }

    /// Replace the contents of the selected index store with `records`
    pub async fn publish(&self, kind: Option<SinkKind>, records: &[SearchRecord]) -> PublishOutcome {
        publish_to(&self.sink_config(kind), records).await
    }

    /// Open the local Tantivy index for querying
    pub fn open_local_index(&self) -> Result<TantivyStore> {
        TantivyStore::open_or_create(&self.config.sink.index_dir)
    }
}
