//! # pageleaf
//!
//! Academic paper ingestion: fetch paper metadata and PDFs from arXiv
//! and HuggingFace, merge them into a unified record, and decompose
//! rendered PDF pages into a structured page/block/line/span tree for
//! text and image extraction.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pageleaf::{load_file_with_options, BuildOptions};
//!
//! fn main() -> pageleaf::Result<()> {
//!     // Build a document from a rendered page dump, persisting images
//!     let options = BuildOptions::new().with_image_dir("./images");
//!     let doc = load_file_with_options("paper.pages.json", options)?;
//!
//!     for page in &doc.pages {
//!         println!("page {}: {} blocks", page.page_number, page.block_count());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Structural decomposition**: document → pages → blocks → lines → spans,
//!   with font-flag decoding and whitespace-gap text reconstruction
//! - **Image extraction**: size-filtered persistence of embedded rasters
//! - **Fetchers**: arXiv metadata/PDF and HuggingFace paper data, cached on disk
//! - **Ingestion**: merges fetched sources into one paper record
//!
//! The low-level PDF rendering engine is an external collaborator behind
//! the [`RenderBackend`] trait; this crate consumes its per-page
//! dictionary output.

pub mod error;
pub mod fetch;
pub mod files;
pub mod ingest;
pub mod model;
pub mod parser;
pub mod schema;

// Re-export commonly used types
pub use error::{Error, Result};
pub use fetch::{FetcherManager, PaperFetcher, RawPaperData};
pub use ingest::ArxivIngester;
pub use model::{BBox, Block, Document, Font, ImageBlock, Line, Page, Point, Span, TextBlock};
pub use parser::{BuildOptions, DocumentBuilder, JsonBackend, RenderBackend};
pub use schema::{Paper, PaperEntry};

use std::path::Path;

/// Build a document from a rendered page-dump file.
///
/// The file holds the rendering engine's per-page dictionaries as JSON
/// (array or `{"pages": [...]}`). An unopenable or undecodable file
/// raises [`Error::UnreadableSource`]; a readable source with no
/// surviving pages returns an empty document.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    load_file_with_options(path, BuildOptions::default())
}

/// Build a document from a rendered page-dump file with custom options.
///
/// # Example
///
/// ```no_run
/// use pageleaf::{load_file_with_options, BuildOptions};
///
/// let options = BuildOptions::new()
///     .with_image_dir("./images")
///     .with_min_image_size(50.0, 50.0);
/// let doc = load_file_with_options("paper.pages.json", options).unwrap();
/// ```
pub fn load_file_with_options<P: AsRef<Path>>(path: P, options: BuildOptions) -> Result<Document> {
    let backend = JsonBackend::open(path)?;
    Ok(DocumentBuilder::with_options(options).build(&backend))
}
