//! Markdown content store.
//!
//! Reads a collection directory of `*.md` files, substitutes the
//! version placeholder, splits YAML front matter and parses the body
//! into a content tree. Each file becomes one `Document`.

use crate::core::config::ContentConfig;
use crate::core::content::tree::parse_markdown;
use crate::core::content::ContentStore;
use crate::core::error::{DocsiftError, Result};
use crate::core::types::Document;
use async_trait::async_trait;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Front matter fields docsift reads; everything else is ignored
#[derive(Debug, Default, Deserialize)]
struct FrontMatter {
    #[serde(default)]
    title: Option<String>,
}

/// Content store over a directory of markdown files
#[derive(Debug, Clone)]
pub struct MarkdownStore {
    root: PathBuf,
    version: Option<String>,
    version_placeholder: String,
}

impl MarkdownStore {
    /// Create a store rooted at `root` (collections are subdirectories)
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            version: None,
            version_placeholder: String::new(),
        }
    }

    /// Build a store from content configuration, resolving the version once
    pub fn from_config(config: &ContentConfig) -> Result<Self> {
        let store = Self::new(&config.dir);
        Ok(match config.resolve_version()? {
            Some(version) => store.with_version(version, &config.version_placeholder),
            None => store,
        })
    }

    /// Replace `placeholder` with `version` in every page before parsing
    pub fn with_version(mut self, version: impl Into<String>, placeholder: &str) -> Self {
        self.version = Some(version.into());
        self.version_placeholder = placeholder.to_string();
        self
    }

    /// Root directory of this store
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load and parse a single markdown file.
    ///
    /// The internal path is relative to the store root, without the
    /// extension and with `/` separators.
    pub fn load_document(&self, file: &Path) -> Result<Document> {
        let raw = fs::read_to_string(file).map_err(|e| {
            DocsiftError::ContentFetch(format!("Failed to read {}: {e}", file.display()))
        })?;
        let source = self.substitute_version(raw);
        let (front_matter, body_source) = split_front_matter(&source, file)?;

        let slug = file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let body = parse_markdown(body_source);

        let title = front_matter
            .title
            .filter(|t| !t.trim().is_empty())
            .or_else(|| {
                body.children()
                    .iter()
                    .find(|n| n.heading_level().is_some())
                    .map(|n| n.flatten_text())
            })
            .unwrap_or_else(|| slug.clone());

        Ok(Document {
            path: self.internal_path(file),
            slug,
            title,
            body,
        })
    }

    fn substitute_version(&self, source: String) -> String {
        match &self.version {
            Some(version) if !self.version_placeholder.is_empty() => {
                source.replace(&self.version_placeholder, version)
            }
            _ => source,
        }
    }

    fn internal_path(&self, file: &Path) -> String {
        let relative = file.strip_prefix(&self.root).unwrap_or(file);
        let without_ext = relative.with_extension("");
        let parts: Vec<String> = without_ext
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        format!("/{}", parts.join("/"))
    }

    fn collect_files(&self, dir: &Path) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkDir::new(dir)
            .follow_links(false)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!("Error walking content directory: {}", e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "md"))
            .collect();
        files.sort();
        files
    }
}

#[async_trait]
impl ContentStore for MarkdownStore {
    async fn fetch(&self, collection: &str) -> Result<Vec<Document>> {
        let dir = self.root.join(collection);
        if !dir.is_dir() {
            return Err(DocsiftError::CollectionNotFound(format!(
                "{} (looked in {})",
                collection,
                dir.display()
            )));
        }

        let files = self.collect_files(&dir);
        tracing::info!("Found {} markdown files in collection '{}'", files.len(), collection);

        let mut documents = Vec::with_capacity(files.len());
        for file in &files {
            let document = self.load_document(file)?;
            tracing::debug!("Loaded {} ({})", document.path, document.title);
            documents.push(document);
        }

        Ok(documents)
    }
}

/// Split a `---` fenced YAML block off the start of `source`
fn split_front_matter<'a>(source: &'a str, file: &Path) -> Result<(FrontMatter, &'a str)> {
    let Some(rest) = source
        .strip_prefix("---\n")
        .or_else(|| source.strip_prefix("---\r\n"))
    else {
        return Ok((FrontMatter::default(), source));
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            let front_matter = if yaml.trim().is_empty() {
                FrontMatter::default()
            } else {
                serde_yaml::from_str(yaml).map_err(|e| DocsiftError::FrontMatter {
                    path: file.display().to_string(),
                    message: e.to_string(),
                })?
            };
            return Ok((front_matter, body));
        }
        offset += line.len();
    }

    Err(DocsiftError::FrontMatter {
        path: file.display().to_string(),
        message: "unterminated front matter block".to_string(),
    })
}
