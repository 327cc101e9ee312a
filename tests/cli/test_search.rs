//! Tests for the search CLI command

use crate::common::{create_test_services, DocsSite};
use docsift::cli::commands::build::{self, BuildArgs};
use docsift::cli::commands::search::{execute, SearchArgs};
use docsift::cli::OutputFormat;
use docsift::core::config::SinkKind;

#[tokio::test]
async fn test_search_after_build() {
    let site = DocsSite::sample();
    let services = create_test_services(&site);

    let build_args = BuildArgs {
        sink: Some(SinkKind::Tantivy),
        dry_run: false,
    };
    build::execute(build_args, &services, OutputFormat::Json)
        .await
        .unwrap();

    for format in [OutputFormat::Human, OutputFormat::Json] {
        let args = SearchArgs {
            query: "package".to_string(),
            limit: Some(5),
        };
        let result = execute(args, &services, format).await;
        assert!(result.is_ok(), "Search should succeed: {:?}", result.err());
    }
}

#[tokio::test]
async fn test_search_empty_index() {
    let site = DocsSite::sample();
    let services = create_test_services(&site);

    let args = SearchArgs {
        query: "package".to_string(),
        limit: None,
    };

    let err = execute(args, &services, OutputFormat::Human)
        .await
        .unwrap_err()
        .to_string();
    assert!(err.contains("docsift build"), "got: {err}");
}

#[tokio::test]
async fn test_search_limit_is_clamped() {
    let site = DocsSite::sample();
    let services = create_test_services(&site);
    build::execute(
        BuildArgs {
            sink: None,
            dry_run: false,
        },
        &services,
        OutputFormat::Json,
    )
    .await
    .unwrap();

    let args = SearchArgs {
        query: "install".to_string(),
        limit: Some(0),
    };
    assert!(execute(args, &services, OutputFormat::Json).await.is_ok());
}
