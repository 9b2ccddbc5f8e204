//! Ingestion: merging fetched source payloads into paper records.

mod arxiv;

pub use arxiv::ArxivIngester;
