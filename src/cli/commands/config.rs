//! Config command - show current configuration

use crate::cli::output::{colors, print_output};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also print the directories docsift reads from and writes to
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<String>,
    pub algolia_api_key: &'static str,
    #[serde(flatten)]
    pub config: Config,
}

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = services.config.as_ref().clone();

    let (config_dir, data_dir) = if args.all {
        let xdg = XdgDirs::new();
        (
            Some(xdg.config_dir.to_string_lossy().into_owned()),
            Some(xdg.data_dir.to_string_lossy().into_owned()),
        )
    } else {
        (None, None)
    };

    let response = ConfigResponse {
        config_dir,
        data_dir,
        algolia_api_key: if config.sink.algolia.api_key.is_some() {
            "<redacted>"
        } else {
            "<unset>"
        },
        config,
    };

    match format {
        OutputFormat::Human => {
            let c = &response.config;
            println!("{}", colors::label("Configuration:"));
            if let (Some(config_dir), Some(data_dir)) = (&response.config_dir, &response.data_dir) {
                println!("  config_dir: {config_dir}");
                println!("  data_dir: {data_dir}");
            }
            println!("  content:");
            println!("    dir: {}", c.content.dir.display());
            println!("    collection: {}", c.content.collection);
            println!("    path_prefix: {}", c.content.path_prefix);
            println!("    exclude_prefix: {}", c.content.exclude_prefix);
            println!(
                "    version: {}",
                c.content.version.as_deref().unwrap_or("<from version file>")
            );
            println!("  index:");
            println!("    url_prefix: {}", c.index.url_prefix);
            println!("    root_label: {}", c.index.root_label);
            println!("  sink:");
            println!("    kind: {:?}", c.sink.kind);
            println!("    index_dir: {}", c.sink.index_dir.display());
            println!("    json_path: {}", c.sink.json_path.display());
            println!("    algolia.app_id: {}", c.sink.algolia.app_id);
            println!("    algolia.index_name: {}", c.sink.algolia.index_name);
            println!("    algolia.api_key: {}", response.algolia_api_key);
            println!("  search:");
            println!("    default_k: {}", c.search.default_k);
            println!("    max_k: {}", c.search.max_k);
        }
        OutputFormat::Json => print_output(&response, format),
    }

    Ok(())
}
