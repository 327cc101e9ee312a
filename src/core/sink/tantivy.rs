//! Tantivy-backed local index store.
//!
//! Keeps one Tantivy document per search record so a build can be
//! inspected and queried (BM25) without a hosted search service.

use crate::core::error::{DocsiftError, Result};
use crate::core::sink::IndexStore;
use crate::core::types::{HeadingHierarchy, RecordType, SearchRecord, HIERARCHY_LEVELS};
use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tantivy::collector::TopDocs;
use tantivy::query::QueryParser;
use tantivy::schema::*;
use tantivy::{Index, IndexWriter, TantivyDocument};

/// Current schema version
/// Version 1: record per document, hierarchy as lvl0..lvl6 text fields
pub const SCHEMA_VERSION: u32 = 1;

const WRITER_HEAP_BYTES: usize = 50_000_000;

/// Create the Tantivy schema for record indexing
///
/// Fields:
/// - object_id: Record identifier (STRING | STORED)
/// - url: Record URL (STRING | STORED)
/// - record_type: Internal label, `page`/`heading-N`/`content` (STRING | STORED)
/// - lvl0..lvl6: Hierarchy titles (TEXT | STORED)
/// - content: Heading title or coalesced text (TEXT | STORED)
/// - indexed_at: Timestamp (Date | STORED)
pub fn create_schema() -> Schema {
    let mut builder = Schema::builder();

    builder.add_text_field("object_id", STRING | STORED);
    builder.add_text_field("url", STRING | STORED);
    builder.add_text_field("record_type", STRING | STORED);

    for level in 0..HIERARCHY_LEVELS {
        builder.add_text_field(&format!("lvl{level}"), TEXT | STORED);
    }

    builder.add_text_field("content", TEXT | STORED);
    builder.add_date_field("indexed_at", STORED);

    builder.build()
}

/// Resolved schema fields
#[derive(Debug, Clone, Copy)]
struct Fields {
    object_id: Field,
    url: Field,
    record_type: Field,
    levels: [Field; HIERARCHY_LEVELS],
    content: Field,
    indexed_at: Field,
}

impl Fields {
    fn resolve(schema: &Schema) -> Result<Self> {
        let field = |name: &str| {
            schema
                .get_field(name)
                .map_err(|e| DocsiftError::StorageError(format!("Missing {name} field: {e}")))
        };

        let mut levels = [field("lvl0")?; HIERARCHY_LEVELS];
        for (level, slot) in levels.iter_mut().enumerate().skip(1) {
            *slot = field(&format!("lvl{level}"))?;
        }

        Ok(Self {
            object_id: field("object_id")?,
            url: field("url")?,
            record_type: field("record_type")?,
            levels,
            content: field("content")?,
            indexed_at: field("indexed_at")?,
        })
    }
}

/// A record returned by a local query, with its BM25 score
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub score: f32,
    pub record: SearchRecord,
}

/// Local Tantivy index of search records
pub struct TantivyStore {
    index: Index,
    dir: PathBuf,
    fields: Fields,

    /// Created on first write so read-only use takes no writer lock
    writer: Mutex<Option<IndexWriter>>,
}

impl std::fmt::Debug for TantivyStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TantivyStore")
            .field("dir", &self.dir)
            .finish()
    }
}

impl TantivyStore {
    /// Open the index in `dir`, creating it (and the directory) if needed
    pub fn open_or_create(dir: &Path) -> Result<Self> {
        let index = if dir.join("meta.json").exists() {
            Index::open_in_dir(dir)
                .map_err(|e| DocsiftError::StorageError(format!("Failed to open index: {e}")))?
        } else {
            std::fs::create_dir_all(dir)?;
            Index::create_in_dir(dir, create_schema())
                .map_err(|e| DocsiftError::StorageError(format!("Failed to create index: {e}")))?
        };

        let fields = Fields::resolve(&index.schema())?;

        Ok(Self {
            index,
            dir: dir.to_path_buf(),
            fields,
            writer: Mutex::new(None),
        })
    }

    /// Directory holding the index
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn with_writer<T>(&self, f: impl FnOnce(&mut IndexWriter) -> Result<T>) -> Result<T> {
        let mut guard = self
            .writer
            .lock()
            .map_err(|_| DocsiftError::StorageError("Index writer lock poisoned".to_string()))?;

        if guard.is_none() {
            let writer: IndexWriter = self
                .index
                .writer(WRITER_HEAP_BYTES)
                .map_err(|e| DocsiftError::StorageError(format!("Failed to create writer: {e}")))?;
            *guard = Some(writer);
        }

        match guard.as_mut() {
            Some(writer) => f(writer),
            None => Err(DocsiftError::StorageError(
                "Index writer unavailable".to_string(),
            )),
        }
    }

    fn to_document(&self, record: &SearchRecord, indexed_at: tantivy::DateTime) -> TantivyDocument {
        let mut doc = TantivyDocument::default();
        doc.add_text(self.fields.object_id, &record.object_id);
        doc.add_text(self.fields.url, &record.url);
        doc.add_text(self.fields.record_type, record.record_type.label());

        for (field, title) in self.fields.levels.iter().zip(record.hierarchy.levels()) {
            if let Some(title) = title {
                doc.add_text(*field, title);
            }
        }

        if let Some(content) = &record.content {
            doc.add_text(self.fields.content, content);
        }
        doc.add_date(self.fields.indexed_at, indexed_at);
        doc
    }

    fn to_record(&self, doc: &TantivyDocument) -> SearchRecord {
        let text = |field: Field| -> Option<String> {
            doc.get_first(field)
                .and_then(|v| v.as_str())
                .map(str::to_string)
        };

        let mut hierarchy = HeadingHierarchy::default();
        for (level, field) in self.fields.levels.iter().enumerate() {
            if let Some(title) = text(*field) {
                hierarchy.set(level as u8, title);
            }
        }

        let record_type = text(self.fields.record_type)
            .and_then(|label| RecordType::from_label(&label))
            .unwrap_or(RecordType::Content);

        SearchRecord {
            object_id: text(self.fields.object_id).unwrap_or_default(),
            url: text(self.fields.url).unwrap_or_default(),
            hierarchy,
            record_type,
            content: text(self.fields.content),
        }
    }

    /// Number of committed records
    pub fn count(&self) -> Result<u64> {
        let reader = self
            .index
            .reader()
            .map_err(|e| DocsiftError::StorageError(format!("Failed to create reader: {e}")))?;
        Ok(reader.searcher().num_docs())
    }

    /// BM25 query over hierarchy titles and content
    pub fn search(&self, query_str: &str, limit: usize) -> Result<Vec<SearchHit>> {
        if query_str.trim().is_empty() {
            return Err(DocsiftError::InvalidQuery(
                "Query cannot be empty".to_string(),
            ));
        }
        if limit == 0 {
            return Err(DocsiftError::InvalidQuery(
                "Result limit must be at least 1".to_string(),
            ));
        }

        let reader = self
            .index
            .reader()
            .map_err(|e| DocsiftError::SearchFailed(format!("Failed to create reader: {e}")))?;
        let searcher = reader.searcher();

        let mut default_fields = vec![self.fields.content];
        default_fields.extend_from_slice(&self.fields.levels);
        let query_parser = QueryParser::for_index(&self.index, default_fields);
        let query = query_parser
            .parse_query(query_str)
            .map_err(|e| DocsiftError::InvalidQuery(format!("Failed to parse query: {e}")))?;

        let top_docs = searcher
            .search(&query, &TopDocs::with_limit(limit))
            .map_err(|e| DocsiftError::SearchFailed(format!("Search failed: {e}")))?;

        let mut hits = Vec::with_capacity(top_docs.len());
        for (score, address) in top_docs {
            let doc: TantivyDocument = searcher.doc(address).map_err(|e| {
                DocsiftError::SearchFailed(format!("Failed to retrieve document: {e}"))
            })?;
            hits.push(SearchHit {
                score,
                record: self.to_record(&doc),
            });
        }

        Ok(hits)
    }
}

#[async_trait]
impl IndexStore for TantivyStore {
    fn name(&self) -> &str {
        "tantivy"
    }

    async fn clear_all(&self) -> Result<()> {
        self.with_writer(|writer| {
            writer
                .delete_all_documents()
                .map_err(|e| DocsiftError::StorageError(format!("Failed to clear index: {e}")))?;
            writer
                .commit()
                .map_err(|e| DocsiftError::StorageError(format!("Failed to commit: {e}")))?;
            Ok(())
        })
    }

    async fn bulk_insert(&self, records: &[SearchRecord]) -> Result<()> {
        let indexed_at = tantivy::DateTime::from_timestamp_secs(Utc::now().timestamp());

        self.with_writer(|writer| {
            for record in records {
                writer
                    .add_document(self.to_document(record, indexed_at))
                    .map_err(|e| {
                        DocsiftError::StorageError(format!("Failed to add document: {e}"))
                    })?;
            }
            writer
                .commit()
                .map_err(|e| DocsiftError::StorageError(format!("Failed to commit: {e}")))?;
            Ok(())
        })
    }
}
