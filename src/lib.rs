//! docsift - DocSearch record builder for documentation sites
//!
//! Walks the parsed content tree of every documentation page and
//! emits a flat, ordered list of search records whose `lvl0`..`lvl6`
//! hierarchy fields rebuild each page's heading outline, then
//! replaces the contents of a search index with that batch.
//!
//! # Architecture
//!
//! - **core**: Domain logic
//!   - content (markdown store, content tree)
//!   - indexer (page selector, record builder, pipeline)
//!   - sink (Tantivy, JSON file and Algolia index stores)
//!   - config, error, types, xdg, services
//!
//! - **cli**: clap adapter (depends on core)

// Core domain logic
pub mod core;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{DocsiftError, Result};
pub use core::indexer::{IndexingPipeline, PageSelector, RecordBuilder};
pub use core::services::Services;
pub use core::sink::{publish, IndexStore, PublishOutcome};
pub use core::types::*;
