//! Page selection.
//!
//! Drops draft/partial documents (slug starts with the exclusion
//! marker) and rewrites internal paths into public paths. Corpus
//! order is preserved.

use crate::core::config::ContentConfig;
use crate::core::types::{Document, Page};

/// Filters the fetched corpus down to indexable pages
#[derive(Debug, Clone)]
pub struct PageSelector {
    /// Internal prefix stripped from every path (e.g. `/docs/en`)
    path_prefix: String,

    /// Slugs starting with this marker are skipped (e.g. `_`)
    exclude_prefix: String,
}

impl PageSelector {
    pub fn new(path_prefix: impl Into<String>, exclude_prefix: impl Into<String>) -> Self {
        Self {
            path_prefix: path_prefix.into(),
            exclude_prefix: exclude_prefix.into(),
        }
    }

    pub fn from_config(config: &ContentConfig) -> Self {
        Self::new(&config.path_prefix, &config.exclude_prefix)
    }

    /// Whether a slug marks a draft or partial. An empty marker excludes nothing.
    pub fn is_excluded(&self, slug: &str) -> bool {
        !self.exclude_prefix.is_empty() && slug.starts_with(&self.exclude_prefix)
    }

    /// Public path for an internal path; paths without the prefix are kept
    pub fn public_path(&self, internal: &str) -> String {
        internal
            .strip_prefix(&self.path_prefix)
            .unwrap_or(internal)
            .to_string()
    }

    /// Select indexable pages, in corpus order
    pub fn select_pages(&self, documents: Vec<Document>) -> Vec<Page> {
        documents
            .into_iter()
            .filter(|doc| {
                let excluded = self.is_excluded(&doc.slug);
                if excluded {
                    tracing::debug!("Skipping excluded page {}", doc.path);
                }
                !excluded
            })
            .map(|doc| Page {
                path: self.public_path(&doc.path),
                title: doc.title,
                body: doc.body,
            })
            .collect()
    }
}

impl Default for PageSelector {
    fn default() -> Self {
        Self::from_config(&ContentConfig::default())
    }
}
