//! Configuration management for docsift.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{DocsiftError, Result};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub index: IndexConfig,
    #[serde(default)]
    pub sink: SinkConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Content store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentConfig {
    /// Root of the content tree (collections are subdirectories)
    #[serde(default = "default_content_dir")]
    pub dir: PathBuf,

    /// Collection holding the documentation pages
    #[serde(default = "default_collection")]
    pub collection: String,

    /// Internal path prefix stripped to obtain public paths
    #[serde(default = "default_path_prefix")]
    pub path_prefix: String,

    /// Slugs starting with this marker are drafts/partials
    #[serde(default = "default_exclude_prefix")]
    pub exclude_prefix: String,

    /// Product version substituted into pages (takes precedence over `version_file`)
    #[serde(default)]
    pub version: Option<String>,

    /// File holding the product version
    #[serde(default = "default_version_file")]
    pub version_file: PathBuf,

    /// Placeholder replaced by the version before parsing
    #[serde(default = "default_version_placeholder")]
    pub version_placeholder: String,
}

/// Record builder configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IndexConfig {
    /// Prefix prepended to page paths in record URLs
    #[serde(default = "default_url_prefix")]
    pub url_prefix: String,

    /// `lvl0` label of every page record
    #[serde(default = "default_root_label")]
    pub root_label: String,
}

/// Which index store receives the records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Local Tantivy index
    #[default]
    Tantivy,
    /// JSON array file
    Json,
    /// Algolia-compatible REST API
    Algolia,
}

impl SinkKind {
    /// Lowercase name, as written in config files and `--sink`
    pub fn as_str(&self) -> &'static str {
        match self {
            SinkKind::Tantivy => "tantivy",
            SinkKind::Json => "json",
            SinkKind::Algolia => "algolia",
        }
    }
}

impl std::str::FromStr for SinkKind {
    type Err = DocsiftError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "tantivy" => Ok(SinkKind::Tantivy),
            "json" => Ok(SinkKind::Json),
            "algolia" => Ok(SinkKind::Algolia),
            other => Err(DocsiftError::ConfigError(format!(
                "Unknown sink kind '{other}' (expected tantivy, json or algolia)"
            ))),
        }
    }
}

/// Index store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SinkConfig {
    #[serde(default)]
    pub kind: SinkKind,

    /// Directory of the local Tantivy index
    #[serde(default = "default_index_dir")]
    pub index_dir: PathBuf,

    /// Output file of the JSON sink
    #[serde(default = "default_json_path")]
    pub json_path: PathBuf,

    #[serde(default)]
    pub algolia: AlgoliaConfig,
}

/// Algolia-compatible REST API settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AlgoliaConfig {
    #[serde(default)]
    pub app_id: String,

    #[serde(default = "default_algolia_index")]
    pub index_name: String,

    /// Admin API key; usually provided through `ALGOLIA_ADMIN_API_KEY`
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// Override of `https://{app_id}.algolia.net`
    #[serde(default)]
    pub base_url: Option<String>,
}

/// Local search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Default number of results to return
    #[serde(default = "default_k")]
    pub default_k: usize,

    /// Maximum results per query
    #[serde(default = "default_max_k")]
    pub max_k: usize,
}

// Default value functions
fn default_content_dir() -> PathBuf {
    PathBuf::from("./content")
}

fn default_collection() -> String {
    "docs".to_string()
}

fn default_path_prefix() -> String {
    "/docs/en".to_string()
}

fn default_exclude_prefix() -> String {
    "_".to_string()
}

fn default_version_file() -> PathBuf {
    PathBuf::from("VERSION")
}

fn default_version_placeholder() -> String {
    "%%bb_version%%".to_string()
}

fn default_url_prefix() -> String {
    "/docs".to_string()
}

fn default_root_label() -> String {
    "Documentation".to_string()
}

fn default_index_dir() -> PathBuf {
    PathBuf::from("./data/index")
}

fn default_json_path() -> PathBuf {
    PathBuf::from("./dist/docsearch.json")
}

fn default_algolia_index() -> String {
    "docs".to_string()
}

fn default_k() -> usize {
    10
}

fn default_max_k() -> usize {
    100
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: default_content_dir(),
            collection: default_collection(),
            path_prefix: default_path_prefix(),
            exclude_prefix: default_exclude_prefix(),
            version: None,
            version_file: default_version_file(),
            version_placeholder: default_version_placeholder(),
        }
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            url_prefix: default_url_prefix(),
            root_label: default_root_label(),
        }
    }
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            kind: SinkKind::default(),
            index_dir: default_index_dir(),
            json_path: default_json_path(),
            algolia: AlgoliaConfig {
                index_name: default_algolia_index(),
                ..AlgoliaConfig::default()
            },
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_k: default_k(),
            max_k: default_max_k(),
        }
    }
}

impl ContentConfig {
    /// Resolve the version string stamped into pages.
    ///
    /// An explicit `version` wins; otherwise `version_file` is read
    /// once and trimmed. A missing file yields `None`.
    pub fn resolve_version(&self) -> Result<Option<String>> {
        if let Some(version) = &self.version {
            return Ok(Some(version.trim().to_string()));
        }

        match fs::read_to_string(&self.version_file) {
            Ok(contents) => Ok(Some(contents.trim().to_string())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No version file at {:?}", self.version_file);
                Ok(None)
            }
            Err(e) => Err(DocsiftError::ConfigError(format!(
                "Failed to read version file {:?}: {e}",
                self.version_file
            ))),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| DocsiftError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. DOCSIFT_CONFIG env var
    /// 2. XDG config file (~/.config/docsift/config.toml)
    /// 3. ./docsift.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("DOCSIFT_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("docsift.toml").exists() {
                Self::from_file("docsift.toml")?
            } else {
                Self::default()
            }
        };

        // Keep the local index out of the working tree unless configured
        if env::var("DOCSIFT_INDEX_DIR").is_err() && config.sink.index_dir == default_index_dir() {
            config.sink.index_dir = xdg.index_dir();
        }

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Content configuration
        if let Ok(dir) = env::var("DOCSIFT_CONTENT_DIR") {
            self.content.dir = PathBuf::from(dir);
        }
        if let Ok(collection) = env::var("DOCSIFT_COLLECTION") {
            self.content.collection = collection;
        }
        if let Ok(prefix) = env::var("DOCSIFT_PATH_PREFIX") {
            self.content.path_prefix = prefix;
        }
        if let Ok(version) = env::var("DOCSIFT_VERSION") {
            self.content.version = Some(version);
        }

        // Index configuration
        if let Ok(prefix) = env::var("DOCSIFT_URL_PREFIX") {
            self.index.url_prefix = prefix;
        }
        if let Ok(label) = env::var("DOCSIFT_ROOT_LABEL") {
            self.index.root_label = label;
        }

        // Sink configuration
        if let Ok(kind) = env::var("DOCSIFT_SINK") {
            match kind.parse() {
                Ok(kind) => self.sink.kind = kind,
                Err(e) => tracing::warn!("Ignoring DOCSIFT_SINK: {}", e),
            }
        }
        if let Ok(dir) = env::var("DOCSIFT_INDEX_DIR") {
            self.sink.index_dir = PathBuf::from(dir);
        }
        if let Ok(path) = env::var("DOCSIFT_JSON_PATH") {
            self.sink.json_path = PathBuf::from(path);
        }
        if let Ok(app_id) = env::var("DOCSIFT_ALGOLIA_APP_ID") {
            self.sink.algolia.app_id = app_id;
        }
        if let Ok(index_name) = env::var("DOCSIFT_ALGOLIA_INDEX") {
            self.sink.algolia.index_name = index_name;
        }
        if let Ok(key) = env::var("ALGOLIA_ADMIN_API_KEY") {
            self.sink.algolia.api_key = Some(key);
        }

        // Search configuration
        if let Ok(k) = env::var("DOCSIFT_DEFAULT_K") {
            if let Ok(val) = k.parse() {
                self.search.default_k = val;
            }
        }
        if let Ok(max_k) = env::var("DOCSIFT_MAX_K") {
            if let Ok(val) = max_k.parse() {
                self.search.max_k = val;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.content.collection.trim().is_empty() {
            return Err(DocsiftError::ConfigError(
                "Collection name must not be empty".to_string(),
            ));
        }

        if self.index.url_prefix.is_empty() {
            return Err(DocsiftError::ConfigError(
                "URL prefix must not be empty".to_string(),
            ));
        }

        if self.search.max_k == 0 {
            return Err(DocsiftError::ConfigError(
                "Max k must be non-zero".to_string(),
            ));
        }

        if self.search.default_k > self.search.max_k {
            return Err(DocsiftError::ConfigError(
                "Default k cannot exceed max k".to_string(),
            ));
        }

        if self.sink.kind == SinkKind::Algolia {
            if self.sink.algolia.app_id.is_empty() {
                return Err(DocsiftError::ConfigError(
                    "Algolia sink requires an application id".to_string(),
                ));
            }
            if self.sink.algolia.index_name.is_empty() {
                return Err(DocsiftError::ConfigError(
                    "Algolia sink requires an index name".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Log configuration (redacting sensitive values)
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Content dir: {:?}", self.content.dir);
        tracing::info!("  Collection: {}", self.content.collection);
        tracing::info!("  Path prefix: {}", self.content.path_prefix);
        tracing::info!("  URL prefix: {}", self.index.url_prefix);
        tracing::info!("  Sink: {:?}", self.sink.kind);
        match self.sink.kind {
            SinkKind::Tantivy => tracing::info!("  Index dir: {:?}", self.sink.index_dir),
            SinkKind::Json => tracing::info!("  JSON path: {:?}", self.sink.json_path),
            SinkKind::Algolia => {
                tracing::info!("  Algolia app: {}", self.sink.algolia.app_id);
                tracing::info!("  Algolia index: {}", self.sink.algolia.index_name);
                tracing::info!(
                    "  Algolia key: {}",
                    if self.sink.algolia.api_key.is_some() {
                        "<redacted>"
                    } else {
                        "<unset>"
                    }
                );
            }
        }
    }
}
