//! Tests for the build CLI command

use crate::common::{create_test_services, read_json_records, DocsSite};
use docsift::cli::commands::build::{execute, BuildArgs};
use docsift::cli::OutputFormat;
use docsift::core::config::SinkKind;
use docsift::core::services::Services;
use std::sync::Arc;

#[tokio::test]
async fn test_build_to_json_sink() {
    let site = DocsSite::sample();
    let services = create_test_services(&site);

    let args = BuildArgs {
        sink: Some(SinkKind::Json),
        dry_run: false,
    };

    let result = execute(args, &services, OutputFormat::Json).await;
    assert!(result.is_ok(), "Build should succeed: {:?}", result.err());
    assert_eq!(read_json_records(&site.json_path()).len(), 10);
}

#[tokio::test]
async fn test_build_default_sink_is_tantivy() {
    let site = DocsSite::sample();
    let services = create_test_services(&site);

    let args = BuildArgs {
        sink: None,
        dry_run: false,
    };

    let result = execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Build should succeed: {:?}", result.err());
    assert_eq!(services.open_local_index().unwrap().count().unwrap(), 10);
}

#[tokio::test]
async fn test_dry_run_publishes_nothing() {
    let site = DocsSite::sample();
    let services = create_test_services(&site);

    let args = BuildArgs {
        sink: Some(SinkKind::Json),
        dry_run: true,
    };

    let result = execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok());
    assert!(!site.json_path().exists());
}

#[tokio::test]
async fn test_failed_publish_does_not_fail_build() {
    let site = DocsSite::sample();
    let mut config = site.config();
    config.sink.algolia.app_id = "APP123".to_string();
    config.sink.algolia.base_url = Some("http://127.0.0.1:9".to_string());
    // No API key: the store rejects the batch before any request
    config.sink.algolia.api_key = None;
    let services = Arc::new(Services::new(config).unwrap());

    let args = BuildArgs {
        sink: Some(SinkKind::Algolia),
        dry_run: false,
    };

    let result = execute(args, &services, OutputFormat::Json).await;
    assert!(result.is_ok(), "Publish failure must not fail the build");
}

#[tokio::test]
async fn test_missing_collection_fails_build() {
    let site = DocsSite::sample();
    let mut config = site.config();
    config.content.collection = "blog".to_string();
    let services = Arc::new(Services::new(config).unwrap());

    let args = BuildArgs {
        sink: Some(SinkKind::Json),
        dry_run: false,
    };

    let result = execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_err());
    assert!(!site.json_path().exists());
}

#[tokio::test]
async fn test_unopenable_index_does_not_fail_build() {
    let site = DocsSite::sample();
    // A regular file where the index directory should be
    std::fs::write(site.index_dir(), "not an index").unwrap();
    let services = create_test_services(&site);

    let args = BuildArgs {
        sink: Some(SinkKind::Tantivy),
        dry_run: false,
    };

    let result = execute(args, &services, OutputFormat::Json).await;
    assert!(
        result.is_ok(),
        "Store open failure must not fail the build: {:?}",
        result.err()
    );
}

#[tokio::test]
async fn test_unconfigured_algolia_does_not_fail_build() {
    let site = DocsSite::sample();
    let mut config = site.config();
    config.sink.algolia.app_id = String::new();
    let services = Arc::new(Services::new(config).unwrap());

    let args = BuildArgs {
        sink: Some(SinkKind::Algolia),
        dry_run: false,
    };

    let result = execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "got: {:?}", result.err());
}
