//! JSON file index store.
//!
//! Writes the batch as one pretty-printed JSON array in the exact
//! DocSearch wire shape, ready for any bulk-import tool.

use crate::core::error::Result;
use crate::core::sink::IndexStore;
use crate::core::types::SearchRecord;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Index store backed by a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl IndexStore for JsonFileStore {
    fn name(&self) -> &str {
        "json"
    }

    async fn clear_all(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn bulk_insert(&self, records: &[SearchRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_vec_pretty(records)?;
        tokio::fs::write(&self.path, json).await?;
        tracing::debug!("Wrote {} records to {:?}", records.len(), self.path);
        Ok(())
    }
}
