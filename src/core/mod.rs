//! Core domain logic (transport-agnostic)
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Content tree, pages and search records
//! - **xdg**: XDG directory handling
//! - **content**: Content store collaborators (markdown on disk)
//! - **indexer**: Page selection, record building, pipeline
//! - **sink**: Index store collaborators and the publish step
//! - **services**: Unified service container

pub mod config;
pub mod content;
pub mod error;
pub mod indexer;
pub mod services;
pub mod sink;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{DocsiftError, Result};
pub use services::Services;
