//! Record building over parsed markdown pages

use crate::common::{assert_hierarchy, DocsSite, GET_STARTED};
use docsift::core::content::{parse_markdown, ContentStore, MarkdownStore};
use docsift::core::indexer::{PageSelector, RecordBuilder};
use docsift::core::types::{Page, RecordType};

fn page_from_markdown(path: &str, title: &str, source: &str) -> Page {
    Page {
        path: path.to_string(),
        title: title.to_string(),
        body: parse_markdown(source),
    }
}

#[tokio::test]
async fn test_get_started_outline() {
    let site = DocsSite::with_pages(&[("get-started.md", GET_STARTED)]);
    let store = MarkdownStore::new(site.content_dir());
    let pages = PageSelector::default().select_pages(store.fetch("docs").await.unwrap());

    let records = RecordBuilder::default().build_records(&pages[0]);

    let ids: Vec<&str> = records.iter().map(|r| r.object_id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "/get-started",
            "/get-started1",
            "/get-started2",
            "/get-started3",
            "/get-started4",
            "/get-started5",
            "/get-started6"
        ]
    );

    let types: Vec<RecordType> = records.iter().map(|r| r.record_type).collect();
    assert_eq!(
        types,
        vec![
            RecordType::Page,
            RecordType::Content,
            RecordType::Heading(2),
            RecordType::Content,
            RecordType::Heading(3),
            RecordType::Content,
            RecordType::Heading(2),
        ]
    );

    // Page record
    assert_eq!(records[0].url, "/docs/get-started");
    assert_eq!(records[0].content, None);
    assert_hierarchy(
        &records[0],
        [Some("Documentation"), Some("Get started"), None, None, None, None, None],
    );

    // Intro text inherits the page hierarchy
    assert_eq!(records[1].content.as_deref(), Some("Intro text."));
    assert_eq!(records[1].hierarchy, records[0].hierarchy);

    // No h1 on the page, so h2 starts a fresh hierarchy
    assert_eq!(records[2].url, "/docs/get-started#install");
    assert_hierarchy(
        &records[2],
        [None, None, Some("Install"), None, None, None, None],
    );

    assert_eq!(records[4].url, "/docs/get-started#linux");
    assert_hierarchy(
        &records[4],
        [None, None, Some("Install"), Some("Linux"), None, None, None],
    );
    assert_eq!(records[5].hierarchy, records[4].hierarchy);
    assert_eq!(records[5].content.as_deref(), Some("Use the package."));

    // Second h2 replaces the first, dropping lvl3
    assert_hierarchy(
        &records[6],
        [None, None, Some("Configure"), None, None, None, None],
    );
}

#[test]
fn test_consecutive_blocks_coalesce() {
    let page = page_from_markdown(
        "/faq",
        "FAQ",
        "# FAQ\n\nFirst.\n\nSecond.\n\n- one\n- two\n",
    );

    let records = RecordBuilder::default().build_records(&page);

    assert_eq!(records.len(), 3);
    assert_eq!(records[2].record_type, RecordType::Content);
    assert_eq!(records[2].content.as_deref(), Some("First.Second.onetwo"));
    assert_eq!(records[2].url, "/docs/faq");
}

#[test]
fn test_h1_sets_lvl1_only() {
    let page = page_from_markdown("/intro", "Intro", "# Welcome\n\n## Details\n");

    let records = RecordBuilder::default().build_records(&page);

    assert_eq!(records[1].record_type, RecordType::Heading(1));
    assert_hierarchy(&records[1], [None, Some("Welcome"), None, None, None, None, None]);
    assert_hierarchy(
        &records[2],
        [None, Some("Welcome"), Some("Details"), None, None, None, None],
    );
    assert_eq!(records[2].url, "/docs/intro#details");
}

#[test]
fn test_inline_markup_flattened_in_titles() {
    let page = page_from_markdown("/api", "API", "## The `run` *command*\n");

    let records = RecordBuilder::default().build_records(&page);

    assert_eq!(records[1].content.as_deref(), Some("The run command"));
    assert_eq!(records[1].url, "/docs/api#the-run-command");
}

#[test]
fn test_thematic_break_is_content() {
    let page = page_from_markdown("/misc", "Misc", "Before\n\n---\n\nAfter\n");

    let records = RecordBuilder::default().build_records(&page);

    assert_eq!(records.len(), 2);
    assert_eq!(records[1].record_type, RecordType::Content);
    assert_eq!(records[1].content.as_deref(), Some("BeforeAfter"));
}

#[test]
fn test_custom_prefix_and_label() {
    let page = page_from_markdown("/setup", "Setup", "## Step one\n");

    let records = RecordBuilder::new("/handbook", "Handbook").build_records(&page);

    assert_eq!(records[0].url, "/handbook/setup");
    assert_eq!(records[0].hierarchy.lvl0.as_deref(), Some("Handbook"));
    assert_eq!(records[1].url, "/handbook/setup#step-one");
}
