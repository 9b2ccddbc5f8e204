//! HuggingFace daily-papers API fetcher.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde_json::{json, Value};

use crate::error::{Error, Result};
use crate::files::{json_dump_pretty, json_load};

use super::base::{extract_arxiv_id, FetchHints, PaperFetcher, RawPaperData};

const HF_PAPERS_API: &str = "https://huggingface.co/api/papers";

/// Fetches community data (AI summary, keywords, upvotes, linked GitHub
/// repo) from `huggingface.co/api/papers/{id}`. Papers are keyed by
/// arXiv id there, so any identifier with an embedded arXiv id works.
pub struct HuggingFacePaperFetcher {
    client: reqwest::blocking::Client,
    cache_dir: PathBuf,
}

impl HuggingFacePaperFetcher {
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
}

impl PaperFetcher for HuggingFacePaperFetcher {
    fn source(&self) -> &'static str {
        "huggingface"
    }

    fn priority(&self) -> u8 {
        1
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

        let mut payload: Value = if save_path.exists() {
            log::info!("HF data already cached at {:?}, skipping download", save_path);
            json_load(&save_path)?
        } else {
            let url = format!("{}/{}", HF_PAPERS_API, arxiv_id);
            let response = self.client.get(&url).send()?;
            if response.status() == reqwest::StatusCode::NOT_FOUND {
                log::debug!("paper {} not on HuggingFace", arxiv_id);
                return Ok(None);
            }
            let body: Value = response.error_for_status()?.json()?;

            std::fs::create_dir_all(&self.cache_dir)?;
            json_dump_pretty(&body, &save_path)?;
            body
        };

        match &mut payload {
            Value::Object(map) => {
                map.insert("json_path".to_string(), json!(save_path));
            }
            _ => {
                return Err(Error::Other(format!(
                    "unexpected HF papers response shape for {}",
                    arxiv_id
                )))
            }
        }

        Ok(Some(RawPaperData {
            source: self.source().to_string(),
            external_ids,
            payload,
        }))
    }
}
