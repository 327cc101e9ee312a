//! Build command - build search records and publish them

use crate::cli::output::{colors, format_duration, print_warning};
use crate::cli::OutputFormat;
use crate::core::config::SinkKind;
use crate::core::services::Services;
use crate::core::sink::PublishOutcome;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the build command
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Index store to publish to (tantivy, json, algolia)
    #[arg(long, short = 's')]
    pub sink: Option<SinkKind>,

    /// Build records without publishing them
    #[arg(long)]
    pub dry_run: bool,
}

/// Build result response
#[derive(Debug, Serialize)]
pub struct BuildResponse {
    pub collection: String,
    pub sink: String,
    pub pages_fetched: usize,
    pub pages_selected: usize,
    pub records_created: usize,
    pub duration_secs: f64,
    pub publish: PublishOutcome,
}

/// Execute the build command
pub async fn execute(
    args: BuildArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let pipeline = services.create_pipeline();

    let (records, stats) = pipeline.build().await?;

    let (sink_name, outcome) = if args.dry_run {
        ("none".to_string(), PublishOutcome::Skipped)
    } else {
        let kind = services.sink_config(args.sink).kind;
        let outcome = services.publish(args.sink, &records).await;
        (kind.as_str().to_string(), outcome)
    };

    let response = BuildResponse {
        collection: services.config.content.collection.clone(),
        sink: sink_name,
        pages_fetched: stats.pages_fetched,
        pages_selected: stats.pages_selected,
        records_created: stats.records_created,
        duration_secs: stats.duration_ms as f64 / 1000.0,
        publish: outcome,
    };

    match format {
        OutputFormat::Human => {
            println!(
                "{} {} records from {} of {} pages in {}",
                colors::success("Built"),
                colors::number(&response.records_created.to_string()),
                colors::number(&response.pages_selected.to_string()),
                colors::number(&response.pages_fetched.to_string()),
                colors::number(&format_duration(response.duration_secs))
            );
            match &response.publish {
                PublishOutcome::Published { records } => println!(
                    "{} {} records to {}",
                    colors::success("Published"),
                    colors::number(&records.to_string()),
                    colors::label(&response.sink)
                ),
                PublishOutcome::Failed { reason } => {
                    print_warning(&format!("Publishing to {} failed: {reason}", response.sink))
                }
                PublishOutcome::Skipped => println!("{}", colors::dim("Dry run, nothing published")),
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
