//! Paper fetchers: retry-free HTTP wrappers over arXiv and HuggingFace,
//! deduplicated by on-disk cache-file existence.

mod arxiv;
mod arxiv_meta;
mod base;
mod huggingface;
mod manager;

pub use arxiv::ArxivPdfFetcher;
pub use arxiv_meta::ArxivMetaFetcher;
pub use base::{extract_arxiv_id, is_valid_arxiv_id, FetchHints, PaperFetcher, RawPaperData};
pub use huggingface::HuggingFacePaperFetcher;
pub use manager::FetcherManager;
