//! arXiv metadata fetcher, backed by the export API's Atom feed.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{Error, Result};
use crate::files::{json_dump_pretty, json_load};

use super::base::{extract_arxiv_id, FetchHints, PaperFetcher, RawPaperData};

const ARXIV_API_URL: &str = "https://export.arxiv.org/api/query";

/// Fetches bibliographic metadata for an arXiv paper and caches it as
/// JSON under the configured directory, keyed by id. An existing cache
/// file short-circuits the network entirely.
pub struct ArxivMetaFetcher {
    client: reqwest::blocking::Client,
    cache_dir: PathBuf,
}

impl ArxivMetaFetcher {
    /// Create a fetcher caching under `cache_dir`.
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            cache_dir: cache_dir.into(),
        }
    }

    fn cache_path(&self, arxiv_id: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", arxiv_id))
    }

    fn fetch_entry(&self, arxiv_id: &str) -> Result<Option<Value>> {
        let body = self
            .client
            .get(ARXIV_API_URL)
            .query(&[("id_list", arxiv_id)])
            .send()?
            .error_for_status()?
            .text()?;

        let feed: Feed =
            quick_xml::de::from_str(&body).map_err(|e| Error::Feed(e.to_string()))?;
        let Some(entry) = feed.entry.into_iter().next() else {
            return Ok(None);
        };

        // The API reports unknown ids as an entry without a title.
        if entry.title.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(entry.into_payload()))
    }
}

impl PaperFetcher for ArxivMetaFetcher {
    fn source(&self) -> &'static str {
        "arxiv_api"
    }

    fn priority(&self) -> u8 {
        9
    }

    fn can_handle(&self, identifier: &str) -> bool {
        extract_arxiv_id(identifier).is_some()
    }

    fn fetch(&self, identifier: &str, _hints: &FetchHints) -> Result<Option<RawPaperData>> {
        let arxiv_id = extract_arxiv_id(identifier)
            .ok_or_else(|| Error::InvalidArxivId(identifier.to_string()))?;

        let save_path = self.cache_path(&arxiv_id);
        let mut external_ids = BTreeMap::new();
        external_ids.insert("arxiv".to_string(), arxiv_id.clone());

        if save_path.exists() {
            log::info!("metadata already cached at {:?}, skipping download", save_path);
            let mut payload: Value = json_load(&save_path)?;
            if let Value::Object(map) = &mut payload {
                map.insert("json_path".to_string(), json!(save_path));
            }
            return Ok(Some(RawPaperData {
                source: self.source().to_string(),
                external_ids,
                payload,
            }));
        }

        let Some(mut payload) = self.fetch_entry(&arxiv_id)? else {
            log::warn!("arXiv API returned no entry for {}", arxiv_id);
            return Ok(None);
        };

        std::fs::create_dir_all(&self.cache_dir)?;
        json_dump_pretty(&payload, &save_path)?;

        if let Value::Object(map) = &mut payload {
            map.insert("json_path".to_string(), json!(save_path));
        }

        Ok(Some(RawPaperData {
            source: self.source().to_string(),
            external_ids,
            payload,
        }))
    }
}

// Atom feed shapes, limited to the fields the payload needs.

#[derive(Debug, Deserialize)]
struct Feed {
    #[serde(default)]
    entry: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
struct Entry {
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    summary: String,
    published: Option<String>,
    updated: Option<String>,
    #[serde(default)]
    author: Vec<Author>,
    #[serde(default)]
    link: Vec<Link>,
    #[serde(default)]
    category: Vec<Category>,
    // quick-xml reports namespaced elements (arxiv:primary_category,
    // arxiv:doi, arxiv:comment) by their local name.
    primary_category: Option<Category>,
    doi: Option<String>,
    comment: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Author {
    name: String,
}

#[derive(Debug, Deserialize)]
struct Link {
    #[serde(rename = "@href")]
    href: String,
    #[serde(rename = "@rel")]
    rel: Option<String>,
    #[serde(rename = "@type")]
    content_type: Option<String>,
    #[serde(rename = "@title")]
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Category {
    #[serde(rename = "@term")]
    term: String,
}

impl Entry {
    /// Flatten the Atom entry into the payload shape the ingester reads.
    fn into_payload(self) -> Value {
        let short_id = self
            .id
            .rsplit('/')
            .next()
            .map(str::to_string)
            .unwrap_or_else(|| self.id.clone());

        let pdf_url = self
            .link
            .iter()
            .find(|l| {
                l.title.as_deref() == Some("pdf")
                    || l.content_type.as_deref() == Some("application/pdf")
            })
            .map(|l| l.href.clone());

        json!({
            "id": self.id,
            "short_id": short_id,
            "title": normalize_whitespace(&self.title),
            "summary": self.summary.trim(),
            "published": self.published,
            "updated": self.updated,
            "categories": self.category.iter().map(|c| c.term.clone()).collect::<Vec<_>>(),
            "primary_category": self.primary_category.map(|c| c.term),
            "authors": self.author.iter().map(|a| a.name.clone()).collect::<Vec<_>>(),
            "links": self.link.iter().map(|l| json!({
                "href": l.href,
                "rel": l.rel,
                "content-type": l.content_type,
                "title": l.title,
            })).collect::<Vec<_>>(),
            "pdf_url": pdf_url,
            "doi": self.doi,
            "comment": self.comment,
        })
    }
}

/// Titles in the feed wrap across lines; collapse runs of whitespace.
fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom" xmlns:arxiv="http://arxiv.org/schemas/atom">
  <entry>
    <id>http://arxiv.org/abs/2301.12345v2</id>
    <updated>2023-02-01T00:00:00Z</updated>
    <published>2023-01-28T00:00:00Z</published>
    <title>A Paper About
    Things</title>
    <summary>  We study things.  </summary>
    <author><name>Ada Lovelace</name></author>
    <author><name>Alan Turing</name></author>
    <arxiv:comment>10 pages</arxiv:comment>
    <arxiv:doi>10.1000/182</arxiv:doi>
    <link href="http://arxiv.org/abs/2301.12345v2" rel="alternate" type="text/html"/>
    <link title="pdf" href="http://arxiv.org/pdf/2301.12345v2" rel="related" type="application/pdf"/>
    <arxiv:primary_category term="cs.CL" scheme="http://arxiv.org/schemas/atom"/>
    <category term="cs.CL" scheme="http://arxiv.org/schemas/atom"/>
    <category term="cs.LG" scheme="http://arxiv.org/schemas/atom"/>
  </entry>
</feed>"#;

    #[test]
    fn test_feed_parsing_and_payload_shape() {
        let feed: Feed = quick_xml::de::from_str(SAMPLE_FEED).unwrap();
        assert_eq!(feed.entry.len(), 1);

        let payload = feed.entry.into_iter().next().unwrap().into_payload();
        assert_eq!(payload["short_id"], "2301.12345v2");
        assert_eq!(payload["title"], "A Paper About Things");
        assert_eq!(payload["summary"], "We study things.");
        assert_eq!(payload["primary_category"], "cs.CL");
        assert_eq!(payload["categories"].as_array().unwrap().len(), 2);
        assert_eq!(
            payload["authors"],
            serde_json::json!(["Ada Lovelace", "Alan Turing"])
        );
        assert_eq!(payload["pdf_url"], "http://arxiv.org/pdf/2301.12345v2");
        assert_eq!(payload["comment"], "10 pages");
        assert_eq!(payload["doi"], "10.1000/182");
    }

    #[test]
    fn test_cache_hit_skips_network() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = ArxivMetaFetcher::new(dir.path());

        // Pre-seed the cache; a network call would fail in this test.
        std::fs::write(
            fetcher.cache_path("2301.12345"),
            r#"{"title": "Cached", "summary": "s"}"#,
        )
        .unwrap();

        let data = fetcher
            .fetch("https://arxiv.org/abs/2301.12345v2", &FetchHints::default())
            .unwrap()
            .unwrap();
        assert_eq!(data.source, "arxiv_api");
        assert_eq!(data.payload["title"], "Cached");
        assert!(data.payload["json_path"].is_string());
        assert_eq!(data.external_ids["arxiv"], "2301.12345");
    }
}
