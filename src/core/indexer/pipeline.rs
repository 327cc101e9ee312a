//! Indexing pipeline orchestration.
//!
//! Coordinates the end-to-end workflow:
//! 1. Fetch the collection from the content store
//! 2. Select pages (drop drafts/partials, strip the internal prefix)
//! 3. Build records page by page, in order
//! 4. Publish the full batch to an index store
//!
//! Fetch errors abort the run. Publish errors never do: they are
//! reported through [`PublishOutcome`].

use std::sync::Arc;
use std::time::Instant;

use crate::core::config::Config;
use crate::core::content::ContentStore;
use crate::core::error::Result;
use crate::core::indexer::{PageSelector, RecordBuilder};
use crate::core::sink::{publish, IndexStore, PublishOutcome};
use crate::core::types::{IndexStats, SearchRecord};

/// Orchestrates fetch, select, build and publish
pub struct IndexingPipeline {
    store: Arc<dyn ContentStore>,
    collection: String,
    selector: PageSelector,
    builder: RecordBuilder,
}

impl IndexingPipeline {
    /// Create a new indexing pipeline
    ///
    /// # Arguments
    ///
    /// * `store` - Content store providing the corpus
    /// * `collection` - Collection to fetch (e.g. `docs`)
    /// * `selector` - Page selector (exclusion marker, path prefix)
    /// * `builder` - Record builder (URL prefix, root label)
    pub fn new(
        store: Arc<dyn ContentStore>,
        collection: impl Into<String>,
        selector: PageSelector,
        builder: RecordBuilder,
    ) -> Self {
        Self {
            store,
            collection: collection.into(),
            selector,
            builder,
        }
    }

    /// Create a pipeline with selector and builder taken from configuration
    pub fn from_config(store: Arc<dyn ContentStore>, config: &Config) -> Self {
        Self::new(
            store,
            &config.content.collection,
            PageSelector::from_config(&config.content),
            RecordBuilder::from_config(&config.index),
        )
    }

    /// Fetch, select and build. Returns every page's records, concatenated.
    pub async fn build(&self) -> Result<(Vec<SearchRecord>, IndexStats)> {
        let start = Instant::now();

        tracing::info!("Fetching collection '{}'", self.collection);
        let documents = self.store.fetch(&self.collection).await?;
        let pages_fetched = documents.len();

        let pages = self.selector.select_pages(documents);
        tracing::info!(
            "Selected {} of {} pages for indexing",
            pages.len(),
            pages_fetched
        );

        let mut records = Vec::new();
        for page in &pages {
            records.extend(self.builder.build_records(page));
        }

        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            "Built {} records from {} pages in {}ms",
            records.len(),
            pages.len(),
            duration_ms
        );

        let stats = IndexStats {
            pages_fetched,
            pages_selected: pages.len(),
            records_created: records.len(),
            duration_ms,
        };

        Ok((records, stats))
    }

    /// Build, then publish to `sink`. Only fetch errors are returned.
    pub async fn run(&self, sink: &dyn IndexStore) -> Result<(IndexStats, PublishOutcome)> {
        let (records, stats) = self.build().await?;
        let outcome = publish(sink, &records).await;
        Ok((stats, outcome))
    }
}
