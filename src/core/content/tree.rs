//! Markdown to content tree conversion.
//!
//! Replays pulldown-cmark events onto an element stack, producing the
//! same HAST-like shape the index builder walks: block elements are
//! direct children of the root, headings carry an `id` prop.

use crate::core::types::ContentNode;
use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// Parse markdown into a root `ContentNode`
pub fn parse_markdown(source: &str) -> ContentNode {
    let mut builder = TreeBuilder::default();
    for event in Parser::new_ext(source, parser_options()) {
        builder.push(event);
    }
    builder.finish()
}

fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_HEADING_ATTRIBUTES
}

/// GitHub-style heading anchor generator.
///
/// Repeated titles within one document get `-1`, `-2`, ... suffixes.
#[derive(Debug, Default)]
pub struct Slugger {
    seen: HashMap<String, usize>,
}

impl Slugger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unique slug for `text` within this slugger
    pub fn slug(&mut self, text: &str) -> String {
        let base = slugify(text);
        let mut candidate = base.clone();
        while let Some(count) = self.seen.get_mut(&candidate) {
            *count += 1;
            candidate = format!("{base}-{count}");
        }
        self.seen.insert(candidate.clone(), 0);
        candidate
    }

    /// Mark an explicit id as taken so later slugs skip it
    pub fn reserve(&mut self, id: &str) {
        self.seen.entry(id.to_string()).or_insert(0);
    }
}

/// Lowercase, spaces to `-`, drop punctuation other than `-` and `_`
pub fn slugify(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .chars()
        .filter_map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                Some(c)
            } else if c.is_whitespace() {
                Some('-')
            } else {
                None
            }
        })
        .collect()
}

struct OpenElement {
    tag: String,
    props: BTreeMap<String, Value>,
    children: Vec<ContentNode>,
}

impl OpenElement {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            props: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    fn with_prop(mut self, key: &str, value: impl Into<String>) -> Self {
        self.props
            .insert(key.to_string(), Value::String(value.into()));
        self
    }

    fn into_node(self) -> ContentNode {
        ContentNode::Element {
            tag: self.tag,
            props: self.props,
            children: self.children,
        }
    }
}

/// Text of an HTML fragment with every `<...>` tag removed
fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

fn is_heading_tag(tag: &str) -> bool {
    matches!(tag, "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
}

#[derive(Default)]
struct TreeBuilder {
    stack: Vec<OpenElement>,
    root: Vec<ContentNode>,
    slugger: Slugger,
}

impl TreeBuilder {
    fn push(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.open(tag),
            Event::End(_) => self.close(),
            Event::Text(text) => self.append(ContentNode::text(text.into_string())),
            Event::Code(code) => self.append(ContentNode::element(
                "code",
                vec![ContentNode::text(code.into_string())],
            )),
            Event::SoftBreak => self.append(ContentNode::text("\n")),
            Event::HardBreak => self.append(ContentNode::element("br", Vec::new())),
            Event::Rule => self.append(ContentNode::element("hr", Vec::new())),
            Event::FootnoteReference(label) => self.append(ContentNode::element(
                "sup",
                vec![ContentNode::text(label.into_string())],
            )),
            Event::Html(html) | Event::InlineHtml(html) => {
                let text = strip_tags(&html);
                if !text.trim().is_empty() {
                    self.append(ContentNode::text(text));
                }
            }
            // Math and task markers carry no searchable text
            _ => {}
        }
    }

    fn open(&mut self, tag: Tag<'_>) {
        let element = match tag {
            Tag::Paragraph => OpenElement::new("p"),
            Tag::Heading { level, id, .. } => {
                let element = OpenElement::new(&format!("h{}", level as usize));
                match id {
                    Some(id) => element.with_prop("id", id.into_string()),
                    None => element,
                }
            }
            Tag::BlockQuote(..) => OpenElement::new("blockquote"),
            Tag::CodeBlock(CodeBlockKind::Fenced(lang)) if !lang.is_empty() => {
                OpenElement::new("pre").with_prop("language", lang.into_string())
            }
            Tag::CodeBlock(_) => OpenElement::new("pre"),
            Tag::List(Some(_)) => OpenElement::new("ol"),
            Tag::List(None) => OpenElement::new("ul"),
            Tag::Item => OpenElement::new("li"),
            Tag::Table(_) => OpenElement::new("table"),
            Tag::TableHead => OpenElement::new("thead"),
            Tag::TableRow => OpenElement::new("tr"),
            Tag::TableCell => OpenElement::new("td"),
            Tag::Emphasis => OpenElement::new("em"),
            Tag::Strong => OpenElement::new("strong"),
            Tag::Strikethrough => OpenElement::new("del"),
            Tag::Link { dest_url, .. } => {
                OpenElement::new("a").with_prop("href", dest_url.into_string())
            }
            Tag::Image { dest_url, .. } => {
                OpenElement::new("img").with_prop("src", dest_url.into_string())
            }
            Tag::FootnoteDefinition(_) => OpenElement::new("section"),
            _ => OpenElement::new("div"),
        };
        self.stack.push(element);
    }

    fn close(&mut self) {
        let Some(mut element) = self.stack.pop() else {
            return;
        };

        if is_heading_tag(&element.tag) {
            match element.props.get("id").and_then(Value::as_str) {
                Some(id) => self.slugger.reserve(id),
                None => {
                    let title: String =
                        element.children.iter().map(ContentNode::flatten_text).collect();
                    let id = self.slugger.slug(&title);
                    element = element.with_prop("id", id);
                }
            }
        }

        self.append(element.into_node());
    }

    fn append(&mut self, node: ContentNode) {
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.root.push(node),
        }
    }

    fn finish(mut self) -> ContentNode {
        while !self.stack.is_empty() {
            self.close();
        }
        ContentNode::root(self.root)
    }
}
