//! Error types for the pageleaf library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pageleaf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during fetching, ingestion, and document building.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The source file could not be opened or decoded at all.
    ///
    /// Distinct from a readable source that yields no pages: `load_file`
    /// raises this variant, while an empty-but-readable source returns a
    /// zero-page [`Document`](crate::model::Document).
    #[error("unreadable source {path:?}: {reason}")]
    UnreadableSource {
        /// Path that failed to open or decode.
        path: PathBuf,
        /// Underlying open/decode failure.
        reason: String,
    },

    /// A raw page/block/line/span dictionary is missing a required field
    /// or carries a malformed value.
    #[error("invalid {context}: {message}")]
    InvalidStructure {
        /// Which level of the raw tree failed validation.
        context: &'static str,
        /// Deserialization failure detail.
        message: String,
    },

    /// JSON serialization or deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request failure from a fetcher.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The arXiv Atom feed could not be parsed.
    #[error("feed parse error: {0}")]
    Feed(String),

    /// The identifier is not a recognizable arXiv id or URL.
    #[error("invalid arXiv identifier: {0}")]
    InvalidArxivId(String),

    /// Fetched paper data is missing required sources.
    #[error("incomplete paper data, missing sources: {0:?}")]
    IncompleteData(Vec<String>),

    /// A referenced file does not exist.
    #[error("file not found: {0:?}")]
    FileNotFound(PathBuf),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Build an [`Error::InvalidStructure`] from a serde failure at a known level.
    pub(crate) fn invalid(context: &'static str, err: serde_json::Error) -> Self {
        Error::InvalidStructure {
            context,
            message: err.to_string(),
        }
    }
}
