//! Search record indexing.
//!
//! Turns a fetched documentation corpus into DocSearch records:
//!
//! - **selector**: drops drafts/partials, rewrites internal paths
//! - **builder**: walks each page's content tree into records
//! - **pipeline**: fetch, select, build, publish
//!
//! Pages are processed one at a time in corpus order, and each page's
//! children in document order. Hierarchy reconstruction depends on
//! "most recently emitted" semantics, so this ordering is part of the
//! output contract.

pub mod builder;
pub mod pipeline;
pub mod selector;

pub use builder::RecordBuilder;
pub use pipeline::IndexingPipeline;
pub use selector::PageSelector;
