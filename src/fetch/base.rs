//! Fetcher trait and arXiv identifier helpers.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// New-style id, post April 2007: `YYMM.NNNNN` with optional version
/// (e.g., "2301.12345", "2301.12345v2").
static NEW_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}\.\d{4,5}(v\d+)?$").expect("valid regex"));

/// Old-style id, pre April 2007: `archive[.XX]/YYMMNNN` with optional
/// version (e.g., "cs/0703001", "math.AG/0703001", "hep-th/9901001v2").
static OLD_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z\-]+(\.[A-Z]{2})?/\d{7}(v\d+)?$").expect("valid regex"));

/// New-style id embedded anywhere (bare ids, abs/pdf URLs).
static EMBEDDED_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{4}\.\d{4,5})(v\d+)?\b").expect("valid regex"));

/// Check whether a string is a well-formed arXiv paper id.
pub fn is_valid_arxiv_id(arxiv_id: &str) -> bool {
    let arxiv_id = arxiv_id.trim();
    if arxiv_id.is_empty() {
        return false;
    }
    NEW_FORMAT.is_match(arxiv_id) || OLD_FORMAT.is_match(arxiv_id)
}

/// Extract a canonical new-style arXiv id (version stripped) from a bare
/// id or an arxiv.org URL. Returns `None` when nothing matches.
pub fn extract_arxiv_id(url_or_id: &str) -> Option<String> {
    EMBEDDED_ID
        .captures(url_or_id)
        .map(|caps| caps[1].to_string())
}

/// Raw, source-shaped data returned by one fetcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPaperData {
    /// Which fetcher produced this (arxiv / arxiv_api / huggingface).
    pub source: String,

    /// External identifiers the fetcher resolved.
    #[serde(default)]
    pub external_ids: BTreeMap<String, String>,

    /// Source-shaped payload. Always carries the cache-file path keys the
    /// ingester relies on (`json_path` / `pdf_path`).
    pub payload: serde_json::Value,
}

/// Cross-fetcher hints the manager threads through a fetch pass.
#[derive(Debug, Clone, Default)]
pub struct FetchHints {
    /// Title suggested by an earlier source, used for nicer download
    /// filenames.
    pub suggested_title: Option<String>,
}

/// One upstream paper source.
pub trait PaperFetcher {
    /// Stable source name, used as the key in fetch results.
    fn source(&self) -> &'static str;

    /// Fetch order: lower runs first.
    fn priority(&self) -> u8;

    /// Whether this fetcher understands the identifier.
    fn can_handle(&self, identifier: &str) -> bool;

    /// Fetch the paper. `Ok(None)` means the source has nothing for this
    /// identifier; errors are transport or decode failures.
    fn fetch(&self, identifier: &str, hints: &FetchHints) -> Result<Option<RawPaperData>>;
}
