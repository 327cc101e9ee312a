//! Search command - query the local search index

use crate::cli::output::{colors, print_record};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::SearchRecord;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query (supports boolean operators: AND, OR, NOT)
    pub query: String,

    /// Maximum number of results (defaults to the configured default_k)
    #[arg(long, short = 'k')]
    pub limit: Option<usize>,
}

/// Search result item
#[derive(Debug, Serialize)]
pub struct SearchResultItem {
    pub rank: usize,
    pub score: f32,
    #[serde(flatten)]
    pub record: SearchRecord,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponseOutput {
    pub query: String,
    pub total_results: usize,
    pub results: Vec<SearchResultItem>,
}

/// Execute the search command
pub async fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let search = &services.config.search;
    let limit = args
        .limit
        .unwrap_or(search.default_k)
        .clamp(1, search.max_k);

    let index = services.open_local_index()?;
    if index.count()? == 0 {
        return Err("The local index is empty. Run 'docsift build --sink tantivy' first.".into());
    }

    let hits = index.search(&args.query, limit)?;

    let output = SearchResponseOutput {
        query: args.query.clone(),
        total_results: hits.len(),
        results: hits
            .into_iter()
            .enumerate()
            .map(|(i, hit)| SearchResultItem {
                rank: i + 1,
                score: hit.score,
                record: hit.record,
            })
            .collect(),
    };

    match format {
        OutputFormat::Human => {
            if output.results.is_empty() {
                println!("No results found for '{}'", colors::label(&args.query));
            } else {
                println!(
                    "Found {} result(s):\n",
                    colors::number(&output.total_results.to_string())
                );
                for result in &output.results {
                    print_record(result.rank, &result.record);
                    println!("    {}", colors::dim(&format!("(score: {:.2})", result.score)));
                    println!();
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
