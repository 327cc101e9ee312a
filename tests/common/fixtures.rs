// Test fixtures for integration testing

use docsift::core::config::Config;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Page with two sections and one nested subsection
#[allow(dead_code)] // Used in integration tests
pub const GET_STARTED: &str = "---
title: Get started
---

Intro text.

## Install

Run the installer.

### Linux

Use the package.

## Configure
";

/// Synthetic documentation site on disk
///
/// Layout mirrors a real content tree: pages live under
/// `content/docs/en/`, the version file sits next to `content/`.
#[allow(dead_code)] // Used in integration tests
pub struct DocsSite {
    pub dir: TempDir,
}

impl DocsSite {
    /// A small site: one regular page, one nested page, one partial
    #[allow(dead_code)] // Used in integration tests
    pub fn sample() -> Self {
        Self::with_pages(&[
            ("get-started.md", GET_STARTED),
            (
                "guide/config.md",
                "# Configuration\n\nSet `%%bb_version%%` in the config file.\n",
            ),
            ("_snippet.md", "## Shared\n\nIncluded elsewhere.\n"),
        ])
    }

    /// Create a site with pages relative to `content/docs/en/`
    pub fn with_pages(pages: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().unwrap();
        let site = Self { dir };
        std::fs::create_dir_all(site.pages_dir()).unwrap();

        for (path, content) in pages {
            let full_path = site.pages_dir().join(path);
            std::fs::create_dir_all(full_path.parent().unwrap()).unwrap();
            std::fs::write(&full_path, content).unwrap();
        }

        site
    }

    /// Write the version file read by the markdown store
    #[allow(dead_code)] // Used in integration tests
    pub fn with_version(self, version: &str) -> Self {
        std::fs::write(self.dir.path().join("VERSION"), format!("{version}\n")).unwrap();
        self
    }

    #[allow(dead_code)] // Used in integration tests
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn content_dir(&self) -> PathBuf {
        self.dir.path().join("content")
    }

    pub fn pages_dir(&self) -> PathBuf {
        self.content_dir().join("docs").join("en")
    }

    #[allow(dead_code)] // Used in integration tests
    pub fn json_path(&self) -> PathBuf {
        self.dir.path().join("dist").join("docsearch.json")
    }

    #[allow(dead_code)] // Used in integration tests
    pub fn index_dir(&self) -> PathBuf {
        self.dir.path().join("index")
    }

    /// Default configuration with every path pointing into the site
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.content.dir = self.content_dir();
        config.content.version_file = self.dir.path().join("VERSION");
        config.sink.index_dir = self.index_dir();
        config.sink.json_path = self.json_path();
        config
    }
}
