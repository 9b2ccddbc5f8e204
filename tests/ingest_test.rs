//! Integration test for the fetch-file → Paper ingestion path.

use std::collections::BTreeMap;

use pageleaf::fetch::RawPaperData;
use pageleaf::ArxivIngester;
use serde_json::json;

#[test]
fn ingests_arxiv_with_huggingface_enrichment() {
    let dir = tempfile::tempdir().unwrap();

    let meta_path = dir.path().join("2301.12345.json");
    std::fs::write(
        &meta_path,
        serde_json::to_vec_pretty(&json!({
            "id": "http://arxiv.org/abs/2301.12345v2",
            "short_id": "2301.12345v2",
            "title": "A Paper About Things",
            "summary": "We study things.",
            "published": "2023-01-28T00:00:00Z",
            "updated": "2023-02-01T00:00:00Z",
            "categories": ["cs.CL", "cs.LG"],
            "primary_category": "cs.CL",
            "authors": ["Ada Lovelace", "Alan Turing"],
            "pdf_url": "http://arxiv.org/pdf/2301.12345v2",
            "doi": "10.1000/182"
        }))
        .unwrap(),
    )
    .unwrap();

    let hf_path = dir.path().join("hf-2301.12345.json");
    std::fs::write(
        &hf_path,
        serde_json::to_vec_pretty(&json!({
            "title": "A Paper About Things",
            "ai_summary": "Things are studied.",
            "ai_keywords": ["things", "studies"],
            "upvotes": 41,
            "githubRepo": "https://github.com/example/things",
            "githubStars": 1200
        }))
        .unwrap(),
    )
    .unwrap();

    let pdf_path = dir.path().join("2301.12345.pdf");
    std::fs::write(&pdf_path, b"%PDF-1.7").unwrap();

    let fetched: BTreeMap<String, RawPaperData> = [
        (
            "arxiv_api".to_string(),
            RawPaperData {
                source: "arxiv_api".to_string(),
                external_ids: [("arxiv".to_string(), "2301.12345".to_string())]
                    .into_iter()
                    .collect(),
                payload: json!({"json_path": meta_path}),
            },
        ),
        (
            "arxiv".to_string(),
            RawPaperData {
                source: "arxiv".to_string(),
                external_ids: BTreeMap::new(),
                payload: json!({"pdf_path": pdf_path}),
            },
        ),
        (
            "huggingface".to_string(),
            RawPaperData {
                source: "huggingface".to_string(),
                external_ids: BTreeMap::new(),
                payload: json!({"json_path": hf_path}),
            },
        ),
    ]
    .into_iter()
    .collect();

    let fetched_file = dir.path().join("fetched.json");
    std::fs::write(&fetched_file, serde_json::to_vec_pretty(&fetched).unwrap()).unwrap();

    let paper = ArxivIngester::new().ingest(&fetched_file).unwrap();

    assert_eq!(paper.identifiers.arxiv.as_deref(), Some("2301.12345"));
    assert_eq!(paper.identifiers.doi.as_deref(), Some("10.1000/182"));

    assert_eq!(paper.metadata.title, "A Paper About Things");
    assert_eq!(paper.metadata.authors, vec!["Ada Lovelace", "Alan Turing"]);
    assert_eq!(paper.metadata.year, Some(2023));
    assert_eq!(paper.metadata.venue.as_deref(), Some("arxiv"));
    assert_eq!(paper.metadata.paper_type.as_deref(), Some("preprint"));
    assert_eq!(paper.metadata.source, "arxiv");
    assert_eq!(paper.metadata.extra["hf_upvotes"], 41);
    assert_eq!(paper.metadata.extra["github_stars"], 1200);
    assert_eq!(paper.metadata.extra["primary_category"], "cs.CL");

    assert_eq!(paper.content.abstract_text.as_deref(), Some("We study things."));
    assert_eq!(paper.content.keywords, vec!["things", "studies"]);
    assert_eq!(
        paper.content.resources,
        vec!["https://github.com/example/things"]
    );
}

#[test]
fn ingests_without_huggingface() {
    let dir = tempfile::tempdir().unwrap();

    let meta_path = dir.path().join("2412.00001.json");
    std::fs::write(
        &meta_path,
        serde_json::to_vec(&json!({
            "id": "http://arxiv.org/abs/2412.00001v1",
            "title": "Solo",
            "summary": "No HF entry.",
            "published": "2024-12-01T00:00:00Z",
            "authors": ["Solo Author"]
        }))
        .unwrap(),
    )
    .unwrap();
    let pdf_path = dir.path().join("2412.00001.pdf");
    std::fs::write(&pdf_path, b"%PDF-1.7").unwrap();

    let fetched: BTreeMap<String, RawPaperData> = [
        (
            "arxiv_api".to_string(),
            RawPaperData {
                source: "arxiv_api".to_string(),
                external_ids: BTreeMap::new(),
                payload: json!({"json_path": meta_path}),
            },
        ),
        (
            "arxiv".to_string(),
            RawPaperData {
                source: "arxiv".to_string(),
                external_ids: BTreeMap::new(),
                payload: json!({"pdf_path": pdf_path}),
            },
        ),
    ]
    .into_iter()
    .collect();

    let fetched_file = dir.path().join("fetched.json");
    std::fs::write(&fetched_file, serde_json::to_vec(&fetched).unwrap()).unwrap();

    let paper = ArxivIngester::new().ingest(&fetched_file).unwrap();
    assert_eq!(paper.metadata.title, "Solo");
    assert_eq!(paper.identifiers.arxiv.as_deref(), Some("2412.00001"));
    assert!(paper.content.keywords.is_empty());
    assert!(paper.metadata.extra.contains_key("pdf_path"));
}
