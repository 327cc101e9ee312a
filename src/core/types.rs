//! Core data types for docsift.
//!
//! Defines the parsed content tree consumed by the index builder,
//! the pages it operates on, and the DocSearch-shaped records it
//! produces.

use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Number of hierarchy levels (`lvl0`..`lvl6`)
pub const HIERARCHY_LEVELS: usize = 7;

/// A node of a parsed documentation page.
///
/// Mirrors the shape of a HAST-like tree: the serialized form uses a
/// `type` discriminator, so trees exported by other tools can be
/// deserialized directly. Unknown node kinds deserialize to
/// [`ContentNode::Other`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentNode {
    Root {
        #[serde(default)]
        children: Vec<ContentNode>,
    },
    Element {
        tag: String,
        #[serde(default)]
        props: BTreeMap<String, serde_json::Value>,
        #[serde(default)]
        children: Vec<ContentNode>,
    },
    Text {
        value: String,
    },
    #[serde(other)]
    Other,
}

impl ContentNode {
    /// Create a root node
    pub fn root(children: Vec<ContentNode>) -> Self {
        ContentNode::Root { children }
    }

    /// Create an element node without props
    pub fn element(tag: impl Into<String>, children: Vec<ContentNode>) -> Self {
        ContentNode::Element {
            tag: tag.into(),
            props: BTreeMap::new(),
            children,
        }
    }

    /// Create a text leaf
    pub fn text(value: impl Into<String>) -> Self {
        ContentNode::Text {
            value: value.into(),
        }
    }

    /// Create a heading element `h{level}` with an anchor id
    pub fn heading(level: u8, id: impl Into<String>, title: impl Into<String>) -> Self {
        ContentNode::element(format!("h{level}"), vec![ContentNode::text(title)])
            .with_prop("id", id.into())
    }

    /// Attach a string prop (no-op on non-element nodes)
    pub fn with_prop(mut self, key: &str, value: impl Into<String>) -> Self {
        if let ContentNode::Element { props, .. } = &mut self {
            props.insert(key.to_string(), serde_json::Value::String(value.into()));
        }
        self
    }

    /// Child nodes in document order (empty for leaves)
    pub fn children(&self) -> &[ContentNode] {
        match self {
            ContentNode::Root { children } | ContentNode::Element { children, .. } => children,
            ContentNode::Text { .. } | ContentNode::Other => &[],
        }
    }

    /// Element tag name, if this is an element
    pub fn tag(&self) -> Option<&str> {
        match self {
            ContentNode::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    /// Heading level for `h1`..`h6` elements
    pub fn heading_level(&self) -> Option<u8> {
        let level = self.tag()?.strip_prefix('h')?;
        match level.parse::<u8>() {
            Ok(n @ 1..=6) if level.len() == 1 => Some(n),
            _ => None,
        }
    }

    /// Anchor identifier (`props.id`) if present and a string
    pub fn anchor_id(&self) -> Option<&str> {
        match self {
            ContentNode::Element { props, .. } => props.get("id").and_then(|v| v.as_str()),
            _ => None,
        }
    }

    /// Concatenate every descendant text leaf in document order.
    ///
    /// Text nodes contribute their value, root and element nodes the
    /// concatenation of their children, unknown kinds nothing.
    pub fn flatten_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            ContentNode::Text { value } => out.push_str(value),
            ContentNode::Root { children } | ContentNode::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
            ContentNode::Other => {}
        }
    }
}

/// A document as returned by a content store, before selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// File-stem style identifier (`_`-prefixed slugs are drafts/partials)
    pub slug: String,

    /// Internal path, e.g. `/docs/en/get-started`
    pub path: String,

    /// Page title
    pub title: String,

    /// Parsed body (root node)
    pub body: ContentNode,
}

/// A selected documentation page with its public path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Public URL path, prefix-stripped (e.g. `/get-started`)
    pub path: String,

    /// Page title
    pub title: String,

    /// Parsed body (root node)
    pub body: ContentNode,
}

/// Nearest-enclosing heading title at each outline level.
///
/// Serializes as an object with all seven keys; absent levels are
/// `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingHierarchy {
    pub lvl0: Option<String>,
    pub lvl1: Option<String>,
    pub lvl2: Option<String>,
    pub lvl3: Option<String>,
    pub lvl4: Option<String>,
    pub lvl5: Option<String>,
    pub lvl6: Option<String>,
}

impl HeadingHierarchy {
    /// Hierarchy of a page-level record
    pub fn for_page(root_label: &str, title: &str) -> Self {
        Self {
            lvl0: Some(root_label.to_string()),
            lvl1: Some(title.to_string()),
            ..Self::default()
        }
    }

    fn slot(&self, level: u8) -> Option<&Option<String>> {
        match level {
            0 => Some(&self.lvl0),
            1 => Some(&self.lvl1),
            2 => Some(&self.lvl2),
            3 => Some(&self.lvl3),
            4 => Some(&self.lvl4),
            5 => Some(&self.lvl5),
            6 => Some(&self.lvl6),
            _ => None,
        }
    }

    fn slot_mut(&mut self, level: u8) -> Option<&mut Option<String>> {
        match level {
            0 => Some(&mut self.lvl0),
            1 => Some(&mut self.lvl1),
            2 => Some(&mut self.lvl2),
            3 => Some(&mut self.lvl3),
            4 => Some(&mut self.lvl4),
            5 => Some(&mut self.lvl5),
            6 => Some(&mut self.lvl6),
            _ => None,
        }
    }

    /// Title at `level` (0..=6)
    pub fn get(&self, level: u8) -> Option<&str> {
        self.slot(level).and_then(|v| v.as_deref())
    }

    /// Set the title at `level`; levels above 6 are ignored
    pub fn set(&mut self, level: u8, title: impl Into<String>) {
        if let Some(slot) = self.slot_mut(level) {
            *slot = Some(title.into());
        }
    }

    /// All levels in order, `lvl0` first
    pub fn levels(&self) -> [Option<&str>; HIERARCHY_LEVELS] {
        [
            self.lvl0.as_deref(),
            self.lvl1.as_deref(),
            self.lvl2.as_deref(),
            self.lvl3.as_deref(),
            self.lvl4.as_deref(),
            self.lvl5.as_deref(),
            self.lvl6.as_deref(),
        ]
    }

    /// Breadcrumb of the present levels, joined by ` > `
    pub fn breadcrumb(&self) -> String {
        self.levels()
            .iter()
            .flatten()
            .copied()
            .collect::<Vec<_>>()
            .join(" > ")
    }
}

/// Kind of a search record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    /// Seed record describing the whole page
    Page,
    /// Heading record, level 1..=6
    Heading(u8),
    /// Coalesced non-heading text
    Content,
}

impl RecordType {
    /// Internal label: `page`, `heading-N` or `content`
    pub fn label(&self) -> String {
        match self {
            RecordType::Page => "page".to_string(),
            RecordType::Heading(level) => format!("heading-{level}"),
            RecordType::Content => "content".to_string(),
        }
    }

    /// Parse an internal label produced by [`RecordType::label`]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "page" => Some(RecordType::Page),
            "content" => Some(RecordType::Content),
            other => {
                let level = other.strip_prefix("heading-")?.parse::<u8>().ok()?;
                (1..=6).contains(&level).then_some(RecordType::Heading(level))
            }
        }
    }

    /// DocSearch `type` value. Page records sit at `lvl1`.
    pub fn wire_type(&self) -> String {
        match self {
            RecordType::Page => "lvl1".to_string(),
            RecordType::Heading(level) => format!("lvl{level}"),
            RecordType::Content => "content".to_string(),
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl Serialize for RecordType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.wire_type())
    }
}

/// One DocSearch record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRecord {
    /// Unique within a page: the page path, or path + running index
    #[serde(rename = "objectID")]
    pub object_id: String,

    /// Page URL, with `#anchor` for heading records
    pub url: String,

    /// Snapshot of the outline position
    pub hierarchy: HeadingHierarchy,

    #[serde(rename = "type")]
    pub record_type: RecordType,

    /// Heading title or coalesced text; absent for page records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Statistics from one build pass
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexStats {
    /// Documents returned by the content store
    pub pages_fetched: usize,

    /// Pages left after draft/partial exclusion
    pub pages_selected: usize,

    /// Total records produced
    pub records_created: usize,

    /// Build duration in milliseconds
    pub duration_ms: u64,
}
