//! Preview command - show the records one markdown file produces

use crate::cli::output::{colors, print_record, print_warning};
use crate::cli::OutputFormat;
use crate::core::config::ContentConfig;
use crate::core::content::MarkdownStore;
use crate::core::indexer::PageSelector;
use crate::core::services::Services;
use crate::core::types::{Page, SearchRecord};
use clap::Args;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Arguments for the preview command
#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Markdown file to build records for
    pub file: PathBuf,
}

/// Preview response
#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub path: String,
    pub title: String,
    pub excluded: bool,
    pub records: Vec<SearchRecord>,
}

/// Execute the preview command
pub async fn execute(
    args: PreviewArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if !args.file.is_file() {
        return Err(format!(
            "'{}' is not a file. Pass the path of a single markdown page.",
            args.file.display()
        )
        .into());
    }

    let file = args.file.canonicalize()?;
    let content = &services.config.content;
    let store = store_for(&file, content)?;
    let document = store.load_document(&file)?;

    let selector = PageSelector::from_config(content);
    let excluded = selector.is_excluded(&document.slug);
    let page = Page {
        path: selector.public_path(&document.path),
        title: document.title,
        body: document.body,
    };
    let records = services.record_builder().build_records(&page);

    let response = PreviewResponse {
        path: page.path,
        title: page.title,
        excluded,
        records,
    };

    match format {
        OutputFormat::Human => {
            if response.excluded {
                print_warning(&format!(
                    "'{}' is excluded from indexing by its name",
                    document.slug
                ));
            }
            println!(
                "{} {} ({} records)\n",
                colors::label(&response.title),
                colors::url(&response.path),
                colors::number(&response.records.len().to_string())
            );
            for (i, record) in response.records.iter().enumerate() {
                print_record(i, record);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

/// Use the configured content root when `file` (canonical) lives under it,
/// so the page path matches what `build` produces. Otherwise root at the
/// file's own directory.
fn store_for(file: &Path, content: &ContentConfig) -> crate::core::error::Result<MarkdownStore> {
    if let Ok(dir) = content.dir.canonicalize() {
        if file.starts_with(&dir) {
            return MarkdownStore::from_config(&ContentConfig {
                dir,
                ..content.clone()
            });
        }
    }

    let parent = file
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    MarkdownStore::from_config(&ContentConfig {
        dir: parent,
        ..content.clone()
    })
}
