//! XDG Base Directory Support
//!
//! Resolves where docsift looks for its config file and keeps its
//! local search index.

use std::env;
use std::fs;
use std::path::PathBuf;

/// XDG directory structure for docsift
#[derive(Debug, Clone)]
pub struct XdgDirs {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
}

impl XdgDirs {
    /// Resolve directories
    ///
    /// Priority order (highest to lowest):
    /// 1. Explicit DOCSIFT_* env vars
    /// 2. XDG_* environment variables
    /// 3. XDG defaults (~/.config, ~/.local/share)
    pub fn new() -> Self {
        Self {
            config_dir: resolve("DOCSIFT_CONFIG_DIR", "XDG_CONFIG_HOME", &[".config"]),
            data_dir: resolve("DOCSIFT_DATA_DIR", "XDG_DATA_HOME", &[".local", "share"]),
        }
    }

    /// Get config file path
    pub fn config_file(&self) -> PathBuf {
        if let Ok(file) = env::var("DOCSIFT_CONFIG_FILE") {
            return PathBuf::from(file);
        }

        self.config_dir.join("config.toml")
    }

    /// Directory of the local Tantivy index
    pub fn index_dir(&self) -> PathBuf {
        self.data_dir.join("index")
    }

    /// Create the config and data directories if they don't exist
    pub fn ensure_dirs_exist(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.config_dir)?;
        fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }

    /// Log the resolved XDG paths
    pub fn log_paths(&self) {
        tracing::debug!("XDG directories resolved:");
        tracing::debug!("  Config: {:?}", self.config_dir);
        tracing::debug!("  Data: {:?}", self.data_dir);
        tracing::debug!("  Config file: {:?}", self.config_file());
    }
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve(explicit_var: &str, xdg_var: &str, fallback: &[&str]) -> PathBuf {
    if let Ok(dir) = env::var(explicit_var) {
        return PathBuf::from(dir);
    }

    if let Ok(xdg) = env::var(xdg_var) {
        return PathBuf::from(xdg).join("docsift");
    }

    let mut dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    for part in fallback {
        dir.push(part);
    }
    dir.join("docsift")
}
