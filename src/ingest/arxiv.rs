//! Merge fetched arXiv (and optional HuggingFace) payloads into a Paper.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Datelike, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::fetch::{extract_arxiv_id, RawPaperData};
use crate::files::json_load;
use crate::schema::{Content, ExternalIdentifiers, Metadata, Paper, PaperAnalysis};

/// Sources a complete arXiv ingest requires: bibliographic metadata and
/// the downloaded PDF.
const REQUIRED_SOURCES: [&str; 2] = ["arxiv_api", "arxiv"];

/// Turns a fetched-result file (the map written by
/// [`FetcherManager::fetch_to_file`](crate::fetch::FetcherManager::fetch_to_file))
/// into a [`Paper`] record by straight field remapping.
#[derive(Debug, Default)]
pub struct ArxivIngester;

impl ArxivIngester {
    /// Create an ingester.
    pub fn new() -> Self {
        Self
    }

    /// Ingest one fetched-result file.
    pub fn ingest(&self, fetched_file: impl AsRef<Path>) -> Result<Paper> {
        let fetched_file = fetched_file.as_ref();
        if !fetched_file.exists() {
            return Err(Error::FileNotFound(fetched_file.to_path_buf()));
        }

        let fetched: BTreeMap<String, RawPaperData> = json_load(fetched_file)?;

        let missing: Vec<String> = REQUIRED_SOURCES
            .iter()
            .filter(|source| !fetched.contains_key(**source))
            .map(|source| source.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(Error::IncompleteData(missing));
        }

        self.merge(&fetched)
    }

    fn merge(&self, fetched: &BTreeMap<String, RawPaperData>) -> Result<Paper> {
        let arxiv_meta: Value = json_load(payload_path(&fetched["arxiv_api"], "json_path")?)?;
        let hf_data: Option<Value> = match fetched.get("huggingface") {
            Some(raw) => Some(json_load(payload_path(raw, "json_path")?)?),
            None => None,
        };
        let pdf_path = payload_path(&fetched["arxiv"], "pdf_path")?.to_string();

        let arxiv_id = str_field(&arxiv_meta, "id").and_then(|id| extract_arxiv_id(&id));
        let publish_date = str_field(&arxiv_meta, "published")
            .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
            .map(|dt| dt.with_timezone(&Utc));

        let mut extra = BTreeMap::new();
        extra.insert("pdf_path".to_string(), Value::String(pdf_path));
        if let Some(pdf_url) = arxiv_meta.get("pdf_url").cloned() {
            extra.insert("pdf_url".to_string(), pdf_url);
        }
        if let Some(primary) = arxiv_meta.get("primary_category").cloned() {
            extra.insert("primary_category".to_string(), primary);
        }
        if let Some(categories) = arxiv_meta.get("categories").cloned() {
            extra.insert("categories".to_string(), categories);
        }

        let mut content = Content {
            abstract_text: str_field(&arxiv_meta, "summary"),
            ..Default::default()
        };

        if let Some(hf) = &hf_data {
            if let Some(upvotes) = hf.get("upvotes").cloned() {
                extra.insert("hf_upvotes".to_string(), upvotes);
            }
            if let Some(summary) = str_field(hf, "ai_summary") {
                extra.insert("hf_ai_summary".to_string(), Value::String(summary));
            }
            if let Some(stars) = hf.get("githubStars").cloned() {
                extra.insert("github_stars".to_string(), stars);
            }
            if let Some(keywords) = hf.get("ai_keywords").and_then(Value::as_array) {
                content.keywords = keywords
                    .iter()
                    .filter_map(|k| k.as_str().map(str::to_string))
                    .collect();
            }
            if let Some(repo) = str_field(hf, "githubRepo") {
                content.resources.push(repo);
            }
        }

        let metadata = Metadata {
            title: str_field(&arxiv_meta, "title").unwrap_or_default(),
            authors: arxiv_meta
                .get("authors")
                .and_then(Value::as_array)
                .map(|authors| {
                    authors
                        .iter()
                        .filter_map(|a| a.as_str().map(str::to_string))
                        .collect()
                })
                .unwrap_or_default(),
            year: publish_date.map(|dt| dt.year()),
            publish_date,
            venue: Some("arxiv".to_string()),
            paper_type: Some("preprint".to_string()),
            source: "arxiv".to_string(),
            extra,
        };

        Ok(Paper {
            id: Uuid::new_v4(),
            identifiers: ExternalIdentifiers {
                arxiv: arxiv_id,
                doi: str_field(&arxiv_meta, "doi"),
                acl: None,
            },
            metadata,
            content,
            analysis: PaperAnalysis::default(),
        })
    }
}

/// A cache-file path inside a fetcher payload.
fn payload_path<'a>(raw: &'a RawPaperData, key: &str) -> Result<&'a str> {
    raw.payload
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| Error::Other(format!("source {} payload missing `{}`", raw.source, key)))
}

fn str_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}
