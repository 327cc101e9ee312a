//! Markdown content store tests

use crate::common::{DocsSite, GET_STARTED};
use docsift::core::config::ContentConfig;
use docsift::core::content::{ContentStore, MarkdownStore};

#[tokio::test]
async fn test_fetch_returns_sorted_documents() {
    let site = DocsSite::sample();
    let store = MarkdownStore::new(site.content_dir());

    let docs = store.fetch("docs").await.unwrap();
    let paths: Vec<&str> = docs.iter().map(|d| d.path.as_str()).collect();

    assert_eq!(
        paths,
        vec![
            "/docs/en/_snippet",
            "/docs/en/get-started",
            "/docs/en/guide/config"
        ]
    );
    assert_eq!(docs[0].slug, "_snippet");
    assert_eq!(docs[2].slug, "config");
}

#[tokio::test]
async fn test_title_sources() {
    let site = DocsSite::with_pages(&[
        ("front.md", GET_STARTED),
        ("heading.md", "Lead paragraph.\n\n## From Heading\n"),
        ("bare.md", "Just text.\n"),
    ]);
    let store = MarkdownStore::new(site.content_dir());

    let docs = store.fetch("docs").await.unwrap();
    let title_of = |slug: &str| {
        docs.iter()
            .find(|d| d.slug == slug)
            .map(|d| d.title.clone())
            .unwrap()
    };

    assert_eq!(title_of("front"), "Get started");
    assert_eq!(title_of("heading"), "From Heading");
    assert_eq!(title_of("bare"), "bare");
}

#[tokio::test]
async fn test_headings_get_anchor_ids() {
    let site = DocsSite::with_pages(&[("page.md", "## Install It\n\ntext\n\n## Install It\n")]);
    let store = MarkdownStore::new(site.content_dir());

    let docs = store.fetch("docs").await.unwrap();
    let anchors: Vec<Option<&str>> = docs[0]
        .body
        .children()
        .iter()
        .filter(|n| n.heading_level().is_some())
        .map(|n| n.anchor_id())
        .collect();

    assert_eq!(anchors, vec![Some("install-it"), Some("install-it-1")]);
}

#[tokio::test]
async fn test_version_placeholder_from_file() {
    let site = DocsSite::sample().with_version("2.4.0");
    let store = MarkdownStore::from_config(&site.config().content).unwrap();

    let docs = store.fetch("docs").await.unwrap();
    let config_page = docs.iter().find(|d| d.slug == "config").unwrap();

    assert_eq!(
        config_page.body.flatten_text(),
        "ConfigurationSet 2.4.0 in the config file."
    );
}

#[tokio::test]
async fn test_explicit_version_wins_over_file() {
    let site = DocsSite::sample().with_version("2.4.0");
    let content = ContentConfig {
        version: Some("9.9.9".to_string()),
        ..site.config().content
    };
    let store = MarkdownStore::from_config(&content).unwrap();

    let docs = store.fetch("docs").await.unwrap();
    let config_page = docs.iter().find(|d| d.slug == "config").unwrap();
    assert!(config_page.body.flatten_text().contains("9.9.9"));
}

#[tokio::test]
async fn test_missing_collection_is_fetch_error() {
    let site = DocsSite::sample();
    let store = MarkdownStore::new(site.content_dir());

    let err = store.fetch("blog").await.unwrap_err();
    assert!(err.is_fetch_error());
}

#[tokio::test]
async fn test_unterminated_front_matter_fails_fetch() {
    let site = DocsSite::with_pages(&[("broken.md", "---\ntitle: Broken\n\n# Body\n")]);
    let store = MarkdownStore::new(site.content_dir());

    let err = store.fetch("docs").await.unwrap_err();
    assert!(err.is_fetch_error(), "got {err:?}");
}
