//! arXiv PDF download fetcher.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::json;

use crate::error::{Error, Result};

use super::base::{extract_arxiv_id, FetchHints, PaperFetcher, RawPaperData};

/// Downloads the paper PDF from arxiv.org into the cache directory.
///
/// Files are deduplicated by existence check: a previously downloaded
/// PDF is reported without touching the network. When a suggested title
/// is available the file is named `{id} - {title}.pdf`, otherwise
/// `{id}.pdf`.
pub struct ArxivPdfFetcher {
    client: reqwest::blocking::Client,
    cache_dir: PathBuf,
}

impl ArxivPdfFetcher {
    /// Create a fetcher downloading into `cache_dir`.
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            cache_dir: cache_dir.into(),
        }
    }

    fn pdf_path(&self, arxiv_id: &str, suggested_title: Option<&str>) -> PathBuf {
        let file_name = match suggested_title {
            Some(title) => format!("{} - {}.pdf", arxiv_id, sanitize_file_name(title)),
            None => format!("{}.pdf", arxiv_id),
        };
        self.cache_dir.join(file_name)
    }

    /// Stream a download body into the cache. The bytes go to a temp
    /// file first and only reach `pdf_path` on a complete read, so a
    /// mid-stream failure never leaves a truncated PDF at the cache
    /// path for the existence check to mistake for a finished download.
    fn write_pdf(&self, mut body: impl io::Read, pdf_path: &Path) -> Result<()> {
        let mut tmp = tempfile::NamedTempFile::new_in(&self.cache_dir)?;
        io::copy(&mut body, &mut tmp)?;
        tmp.persist(pdf_path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl PaperFetcher for ArxivPdfFetcher {
    fn source(&self) -> &'static str {
        "arxiv"
    }

    fn priority(&self) -> u8 {
        10
    }

    fn can_handle(&self, identifier: &str) -> bool {
        extract_arxiv_id(identifier).is_some()
    }

    fn fetch(&self, identifier: &str, hints: &FetchHints) -> Result<Option<RawPaperData>> {
        let arxiv_id = extract_arxiv_id(identifier)
            .ok_or_else(|| Error::InvalidArxivId(identifier.to_string()))?;

        let pdf_path = self.pdf_path(&arxiv_id, hints.suggested_title.as_deref());
        let mut external_ids = BTreeMap::new();
        external_ids.insert("arxiv".to_string(), arxiv_id.clone());

        if !pdf_path.exists() {
            std::fs::create_dir_all(&self.cache_dir)?;

            let url = format!("https://arxiv.org/pdf/{}", arxiv_id);
            let response = self.client.get(&url).send()?.error_for_status()?;
            self.write_pdf(response, &pdf_path)?;
        } else {
            log::info!("PDF already cached at {:?}, skipping download", pdf_path);
        }

        Ok(Some(RawPaperData {
            source: self.source().to_string(),
            external_ids,
            payload: json!({ "pdf_path": pdf_path }),
        }))
    }
}

/// Strip characters that are unsafe in filenames, collapsing whitespace.
fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => ' ',
            c => c,
        })
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}
