//! PDF structural decomposition.
//!
//! Consumes the rendering engine's per-page dictionaries (behind
//! [`RenderBackend`]) and builds the [`model`](crate::model) tree
//! bottom-up: spans into lines, lines into text blocks, blocks into
//! pages, pages into a document.

mod backend;
mod builder;
mod images;
mod raw;

pub use backend::{JsonBackend, RenderBackend};
pub use builder::{build_line, build_span, BuildOptions, DocumentBuilder};
pub use images::{save_image_block, DEFAULT_MIN_IMAGE_HEIGHT, DEFAULT_MIN_IMAGE_WIDTH};
pub use raw::{RawImageBlock, RawLine, RawPage, RawSpan, RawTextBlock};
