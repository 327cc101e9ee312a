//! DocSearch record builder.
//!
//! Turns one page into an ordered list of records whose hierarchy
//! fields rebuild the page's heading outline:
//!
//! 1. a `page` record seeded with `lvl0` (root label) and `lvl1` (title)
//! 2. one `heading-N` record per `hN` child of the body root
//! 3. one `content` record per run of consecutive non-heading children
//!
//! A heading inherits the hierarchy of the nearest preceding record of
//! the level above it, found by scanning backwards through the records
//! already emitted for the page. There is no outline stack: an `h3`
//! directly under an `h1` simply has no `lvl2`.
//!
//! # Example
//!
//! ```
//! use docsift::core::indexer::RecordBuilder;
//! use docsift::core::types::{ContentNode, Page, RecordType};
//!
//! let page = Page {
//!     path: "/intro".to_string(),
//!     title: "Intro".to_string(),
//!     body: ContentNode::root(vec![
//!         ContentNode::heading(1, "intro", "Intro"),
//!         ContentNode::element("p", vec![ContentNode::text("Hello")]),
//!     ]),
//! };
//!
//! let records = RecordBuilder::default().build_records(&page);
//! assert_eq!(records.len(), 3);
//! assert_eq!(records[2].record_type, RecordType::Content);
//! ```

use crate::core::config::IndexConfig;
use crate::core::types::{ContentNode, HeadingHierarchy, Page, RecordType, SearchRecord};

/// Builds search records for pages
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    /// Prepended to page paths in record URLs (e.g. `/docs`)
    url_prefix: String,

    /// `lvl0` of every page record (e.g. `Documentation`)
    root_label: String,
}

impl RecordBuilder {
    pub fn new(url_prefix: impl Into<String>, root_label: impl Into<String>) -> Self {
        Self {
            url_prefix: url_prefix.into(),
            root_label: root_label.into(),
        }
    }

    pub fn from_config(config: &IndexConfig) -> Self {
        Self::new(&config.url_prefix, &config.root_label)
    }

    /// Build the records of one page, in document order
    pub fn build_records(&self, page: &Page) -> Vec<SearchRecord> {
        let mut pass = PagePass::new(self, page);
        for node in page.body.children() {
            match node.heading_level() {
                Some(level) => pass.heading(level, node),
                None => pass.content(node),
            }
        }
        let records = pass.finish();

        tracing::debug!("Built {} records for {}", records.len(), page.path);
        records
    }

    /// Build and concatenate the records of every page, in page order
    pub fn build_all(&self, pages: &[Page]) -> Vec<SearchRecord> {
        pages
            .iter()
            .flat_map(|page| self.build_records(page))
            .collect()
    }
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::from_config(&IndexConfig::default())
    }
}

/// Page-local state: emitted records plus the content record still open
struct PagePass<'a> {
    page: &'a Page,
    page_url: String,
    records: Vec<SearchRecord>,
    open_content: Option<SearchRecord>,
}

impl<'a> PagePass<'a> {
    fn new(builder: &RecordBuilder, page: &'a Page) -> Self {
        let page_url = format!("{}{}", builder.url_prefix, page.path);
        let seed = SearchRecord {
            object_id: page.path.clone(),
            url: page_url.clone(),
            hierarchy: HeadingHierarchy::for_page(&builder.root_label, &page.title),
            record_type: RecordType::Page,
            content: None,
        };

        Self {
            page,
            page_url,
            records: vec![seed],
            open_content: None,
        }
    }

    /// Object id of the next record; an open content record holds its slot
    fn next_object_id(&self) -> String {
        format!("{}{}", self.page.path, self.records.len())
    }

    fn heading(&mut self, level: u8, node: &ContentNode) {
        self.flush();

        let title = node.flatten_text();
        let record_type = RecordType::Heading(level);

        // The page record is not Heading(1): an h2 before any h1 starts empty
        let mut hierarchy = self
            .records
            .iter()
            .rev()
            .find(|r| r.record_type == RecordType::Heading(level - 1))
            .map(|r| r.hierarchy.clone())
            .unwrap_or_default();
        hierarchy.set(level, title.clone());

        let url = match node.anchor_id() {
            Some(anchor) => format!("{}#{}", self.page_url, anchor),
            None => self.page_url.clone(),
        };

        self.records.push(SearchRecord {
            object_id: self.next_object_id(),
            url,
            hierarchy,
            record_type,
            content: Some(title),
        });
    }

    fn content(&mut self, node: &ContentNode) {
        let text = node.flatten_text();

        if let Some(open) = self.open_content.as_mut() {
            open.content.get_or_insert_with(String::new).push_str(&text);
            return;
        }

        // The seed record guarantees a predecessor
        let hierarchy = self
            .records
            .last()
            .map(|r| r.hierarchy.clone())
            .unwrap_or_default();

        self.open_content = Some(SearchRecord {
            object_id: self.next_object_id(),
            url: self.page_url.clone(),
            hierarchy,
            record_type: RecordType::Content,
            content: Some(text),
        });
    }

    fn flush(&mut self) {
        if let Some(record) = self.open_content.take() {
            self.records.push(record);
        }
    }

    fn finish(mut self) -> Vec<SearchRecord> {
        self.flush();
        self.records
    }
}
