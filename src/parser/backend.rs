//! Rendering backend abstraction.
//!
//! The low-level PDF rendering engine is an external collaborator: all
//! this crate consumes is its per-page dictionary output
//! (`{width, height, blocks: [...]}`). The [`RenderBackend`] trait is
//! that boundary; any engine binding can implement it.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::Value;

use crate::error::{Error, Result};

/// Abstract interface to a PDF rendering engine's structured page output.
///
/// Implementations enumerate pages in physical order and return the raw
/// per-page dictionary, without exposing any engine types.
pub trait RenderBackend {
    /// Number of pages in the source, in physical order.
    fn page_count(&self) -> usize;

    /// The raw dictionary for the page at `index` (0-based).
    fn page(&self, index: usize) -> Result<Value>;
}

/// A backend over pre-rendered page dictionaries stored as JSON.
///
/// Accepts either a top-level array of page dictionaries or an object
/// with a `pages` array — the two shapes engine-side dump scripts
/// produce. Image bytes inside the dump may be base64 strings or plain
/// byte arrays.
#[derive(Debug)]
pub struct JsonBackend {
    pages: Vec<Value>,
}

impl JsonBackend {
    /// Open a JSON page-dump file.
    ///
    /// A file that cannot be opened or decoded yields
    /// [`Error::UnreadableSource`]; a decodable file with no pages is a
    /// valid, empty source.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::UnreadableSource {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let value: Value =
            serde_json::from_reader(BufReader::new(file)).map_err(|e| Error::UnreadableSource {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        Self::from_value(value).map_err(|e| Error::UnreadableSource {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Build a backend from an already-decoded dump value.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Array(pages) => Ok(Self { pages }),
            Value::Object(mut map) => match map.remove("pages") {
                Some(Value::Array(pages)) => Ok(Self { pages }),
                _ => Err(Error::Other(
                    "expected a page array or an object with a `pages` array".to_string(),
                )),
            },
            _ => Err(Error::Other(
                "expected a page array or an object with a `pages` array".to_string(),
            )),
        }
    }

    /// Build a backend directly from page dictionaries.
    pub fn from_pages(pages: Vec<Value>) -> Self {
        Self { pages }
    }
}

impl RenderBackend for JsonBackend {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page(&self, index: usize) -> Result<Value> {
        self.pages
            .get(index)
            .cloned()
            .ok_or_else(|| Error::Other(format!("page index {} out of range", index)))
    }
}
