//! End-to-end pipeline runs over a site on disk

use crate::common::{read_json_records, DocsSite};
use docsift::core::content::MarkdownStore;
use docsift::core::indexer::IndexingPipeline;
use docsift::core::sink::{JsonFileStore, PublishOutcome};
use std::sync::Arc;

fn pipeline_for(site: &DocsSite) -> IndexingPipeline {
    let config = site.config();
    let store = Arc::new(MarkdownStore::from_config(&config.content).unwrap());
    IndexingPipeline::from_config(store, &config)
}

#[tokio::test]
async fn test_build_skips_partials_and_keeps_order() {
    let site = DocsSite::sample();

    let (records, stats) = pipeline_for(&site).build().await.unwrap();

    assert_eq!(stats.pages_fetched, 3);
    assert_eq!(stats.pages_selected, 2);
    assert_eq!(stats.records_created, 10);
    assert_eq!(records.len(), 10);

    assert_eq!(records[0].object_id, "/get-started");
    assert_eq!(records[7].object_id, "/guide/config");
    assert_eq!(records[7].url, "/docs/guide/config");
    assert!(records.iter().all(|r| !r.url.contains("_snippet")));
}

#[tokio::test]
async fn test_run_publishes_to_json() {
    let site = DocsSite::sample().with_version("1.2.3");
    let sink = JsonFileStore::new(site.json_path());

    let (stats, outcome) = pipeline_for(&site).run(&sink).await.unwrap();

    assert_eq!(outcome, PublishOutcome::Published { records: 10 });
    assert_eq!(stats.records_created, 10);

    let written = read_json_records(&site.json_path());
    assert_eq!(written.len(), 10);

    let page = &written[7];
    assert_eq!(page["objectID"], "/guide/config");
    assert_eq!(page["type"], "lvl1");
    assert_eq!(page["hierarchy"]["lvl0"], "Documentation");
    assert_eq!(page["hierarchy"]["lvl1"], "Configuration");
    assert!(page["hierarchy"]["lvl2"].is_null());
    assert!(page.get("content").is_none());

    let heading = &written[8];
    assert_eq!(heading["type"], "lvl1");
    assert_eq!(heading["url"], "/docs/guide/config#configuration");
    assert!(heading["hierarchy"]["lvl0"].is_null());

    let content = &written[9];
    assert_eq!(content["type"], "content");
    assert_eq!(content["content"], "Set 1.2.3 in the config file.");
}

#[tokio::test]
async fn test_missing_content_dir_aborts_before_publish() {
    let site = DocsSite::sample();
    let mut config = site.config();
    config.content.collection = "missing".to_string();
    let store = Arc::new(MarkdownStore::from_config(&config.content).unwrap());
    let pipeline = IndexingPipeline::from_config(store, &config);
    let sink = JsonFileStore::new(site.json_path());

    let err = pipeline.run(&sink).await.unwrap_err();

    assert!(err.is_fetch_error());
    assert!(!site.json_path().exists());
}
