//! Fan-out over the registered paper fetchers.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::files::json_dump_pretty;

use super::arxiv::ArxivPdfFetcher;
use super::arxiv_meta::ArxivMetaFetcher;
use super::base::{FetchHints, PaperFetcher, RawPaperData};
use super::huggingface::HuggingFacePaperFetcher;

/// Runs every fetcher that understands an identifier, in priority order,
/// and collects their raw results by source name.
///
/// HuggingFace runs first so its title can be threaded forward as a
/// filename hint for the PDF download. A fetcher error is downgraded to
/// a warning — other sources still run.
pub struct FetcherManager {
    fetchers: Vec<Box<dyn PaperFetcher>>,
}

impl FetcherManager {
    /// Create a manager with the standard fetcher set, caching under
    /// `cache_root` (`{cache_root}/huggingface`, `{cache_root}/arxiv`).
    pub fn new(cache_root: impl Into<PathBuf>) -> Self {
        let cache_root = cache_root.into();
        let mut fetchers: Vec<Box<dyn PaperFetcher>> = vec![
            Box::new(HuggingFacePaperFetcher::new(cache_root.join("huggingface"))),
            Box::new(ArxivMetaFetcher::new(cache_root.join("arxiv"))),
            Box::new(ArxivPdfFetcher::new(cache_root.join("arxiv"))),
        ];
        fetchers.sort_by_key(|fetcher| fetcher.priority());
        Self { fetchers }
    }

    /// Create a manager from an explicit fetcher list (kept in the given
    /// order after priority sorting).
    pub fn with_fetchers(mut fetchers: Vec<Box<dyn PaperFetcher>>) -> Self {
        fetchers.sort_by_key(|fetcher| fetcher.priority());
        Self { fetchers }
    }

    /// Fetch one identifier from every capable source.
    pub fn fetch(&self, identifier: &str) -> BTreeMap<String, RawPaperData> {
        let mut results = BTreeMap::new();
        let mut hints = FetchHints::default();

        for fetcher in &self.fetchers {
            if !fetcher.can_handle(identifier) {
                continue;
            }

            match fetcher.fetch(identifier, &hints) {
                Ok(Some(raw)) => {
                    if fetcher.source() == "huggingface" {
                        if let Some(title) = raw.payload.get("title").and_then(|t| t.as_str()) {
                            hints.suggested_title = Some(title.to_string());
                        }
                    }
                    results.insert(fetcher.source().to_string(), raw);
                }
                Ok(None) => {
                    log::debug!("source {} has nothing for {}", fetcher.source(), identifier)
                }
                Err(e) => log::warn!("source {} failed for {}: {}", fetcher.source(), identifier, e),
            }
        }

        results
    }

    /// Fetch and dump the result map as JSON, the file shape
    /// [`ArxivIngester`](crate::ingest::ArxivIngester) consumes.
    pub fn fetch_to_file(
        &self,
        identifier: &str,
        output: impl AsRef<Path>,
    ) -> Result<BTreeMap<String, RawPaperData>> {
        let results = self.fetch(identifier);
        json_dump_pretty(&results, output)?;
        Ok(results)
    }
}
