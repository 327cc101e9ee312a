//! Content store collaborators.
//!
//! A content store hands the indexer a fully materialized corpus of
//! parsed documents for one collection. Draft filtering and path
//! rewriting happen later in the page selector.
//!
//! - **ContentStore**: the async fetch seam
//! - **MarkdownStore**: markdown files on disk, parsed with pulldown-cmark
//! - **tree**: markdown to `ContentNode` conversion

pub mod markdown;
pub mod tree;

pub use markdown::MarkdownStore;
pub use tree::{parse_markdown, Slugger};

use crate::core::error::Result;
use crate::core::types::Document;
use async_trait::async_trait;

/// Source of parsed documentation pages
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Fetch every document of `collection`, in a stable order
    async fn fetch(&self, collection: &str) -> Result<Vec<Document>>;
}
