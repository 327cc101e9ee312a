//! JSON sink replacement semantics

use crate::common::{read_json_records, DocsSite};
use docsift::core::indexer::RecordBuilder;
use docsift::core::sink::{publish, JsonFileStore};
use docsift::core::types::{ContentNode, Page};

fn page(path: &str, title: &str) -> Page {
    Page {
        path: path.to_string(),
        title: title.to_string(),
        body: ContentNode::root(vec![]),
    }
}

#[tokio::test]
async fn test_second_publish_replaces_first() {
    let site = DocsSite::with_pages(&[]);
    let sink = JsonFileStore::new(site.json_path());
    let builder = RecordBuilder::default();

    let first = builder.build_all(&[page("/a", "A"), page("/b", "B")]);
    assert!(publish(&sink, &first).await.is_published());

    let second = builder.build_all(&[page("/c", "C")]);
    assert!(publish(&sink, &second).await.is_published());

    let written = read_json_records(&site.json_path());
    assert_eq!(written.len(), 1);
    assert_eq!(written[0]["objectID"], "/c");
}

#[tokio::test]
async fn test_empty_batch_writes_empty_array() {
    let site = DocsSite::with_pages(&[]);
    let sink = JsonFileStore::new(site.json_path());

    assert!(publish(&sink, &[]).await.is_published());
    assert!(read_json_records(&site.json_path()).is_empty());
}
