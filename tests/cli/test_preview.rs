//! Tests for the preview CLI command

use crate::common::{create_test_services, DocsSite};
use docsift::cli::commands::preview::{execute, PreviewArgs};
use docsift::cli::OutputFormat;

#[tokio::test]
async fn test_preview_page_inside_content_dir() {
    let site = DocsSite::sample();
    let services = create_test_services(&site);

    let args = PreviewArgs {
        file: site.pages_dir().join("get-started.md"),
    };

    let result = execute(args, &services, OutputFormat::Json).await;
    assert!(result.is_ok(), "Preview should succeed: {:?}", result.err());
}

#[tokio::test]
async fn test_preview_excluded_page_still_renders() {
    let site = DocsSite::sample();
    let services = create_test_services(&site);

    let args = PreviewArgs {
        file: site.pages_dir().join("_snippet.md"),
    };

    let result = execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_preview_file_outside_content_dir() {
    let site = DocsSite::sample();
    let services = create_test_services(&site);
    let loose = site.path().join("notes.md");
    std::fs::write(&loose, "# Notes\n\nLoose page.\n").unwrap();

    let args = PreviewArgs { file: loose };

    let result = execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_preview_missing_file() {
    let site = DocsSite::sample();
    let services = create_test_services(&site);

    let args = PreviewArgs {
        file: site.pages_dir().join("nope.md"),
    };

    let result = execute(args, &services, OutputFormat::Human).await;
    let err = result.unwrap_err().to_string();
    assert!(err.contains("not a file"), "got: {err}");
}
