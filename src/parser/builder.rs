//! Bottom-up construction of the document tree from raw page dictionaries.
//!
//! Two outcome channels, never conflated: *absence* (`Ok(None)`) for
//! input that yields no valid entity — empty child collections, unknown
//! block types, below-threshold images — and *hard errors* (`Err`) for
//! structurally malformed dictionaries. Hard errors propagate to the page
//! level, where the document pass downgrades them to a logged skip so one
//! bad page never aborts a load.

use std::path::PathBuf;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::{
    Block, Document, ImageBlock, Line, ObjectType, Page, Span, TextBlock, BLOCK_TYPE_IMAGE,
    BLOCK_TYPE_TEXT,
};

use super::backend::RenderBackend;
use super::images::{save_image_block, DEFAULT_MIN_IMAGE_HEIGHT, DEFAULT_MIN_IMAGE_WIDTH};
use super::raw::{RawImageBlock, RawLine, RawPage, RawSpan, RawTextBlock};

/// Options for building a document from rendered pages.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Directory to persist embedded images into. When set, image blocks
    /// are written to disk (or dropped when too small) instead of holding
    /// bytes in memory.
    pub image_dir: Option<PathBuf>,

    /// Minimum placed width, in points, for an image to be persisted.
    pub min_image_width: f64,

    /// Minimum placed height, in points, for an image to be persisted.
    pub min_image_height: f64,
}

impl BuildOptions {
    /// Create build options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Persist images under the given directory.
    pub fn with_image_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.image_dir = Some(dir.into());
        self
    }

    /// Set the minimum placed size for persisted images.
    pub fn with_min_image_size(mut self, width: f64, height: f64) -> Self {
        self.min_image_width = width;
        self.min_image_height = height;
        self
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            image_dir: None,
            min_image_width: DEFAULT_MIN_IMAGE_WIDTH,
            min_image_height: DEFAULT_MIN_IMAGE_HEIGHT,
        }
    }
}

/// Builds [`Document`] trees from a rendering backend's page dictionaries.
pub struct DocumentBuilder {
    options: BuildOptions,
}

impl DocumentBuilder {
    /// Create a builder with default options.
    pub fn new() -> Self {
        Self::with_options(BuildOptions::default())
    }

    /// Create a builder with custom options.
    pub fn with_options(options: BuildOptions) -> Self {
        Self { options }
    }

    /// Build a document from every page the backend reports.
    ///
    /// Pages are processed strictly sequentially in physical order with
    /// 1-based numbering. A page that fails — in the backend or in its
    /// own build — is logged and skipped; the returned document may have
    /// zero pages but this operation itself never fails.
    pub fn build<B: RenderBackend>(&self, backend: &B) -> Document {
        let mut pages = Vec::new();

        for index in 0..backend.page_count() {
            let page_number = (index + 1) as u32;

            let raw = match backend.page(index) {
                Ok(raw) => raw,
                Err(e) => {
                    log::warn!("skipping page {}: {}", page_number, e);
                    continue;
                }
            };

            match self.build_page(raw, page_number) {
                Ok(Some(page)) => pages.push(page),
                Ok(None) => {}
                Err(e) => log::warn!("skipping page {}: {}", page_number, e),
            }
        }

        Document::new(pages)
    }

    /// Build one page. Absent when the raw page has no blocks or none of
    /// them survive filtering.
    pub fn build_page(&self, raw: Value, page_number: u32) -> Result<Option<Page>> {
        let raw: RawPage = serde_json::from_value(raw).map_err(|e| Error::invalid("page", e))?;
        if raw.blocks.is_empty() {
            return Ok(None);
        }

        let mut blocks = Vec::new();
        for raw_block in raw.blocks {
            if let Some(block) = self.build_block(raw_block, page_number)? {
                blocks.push(block);
            }
        }
        if blocks.is_empty() {
            return Ok(None);
        }

        Ok(Some(Page::new(page_number, raw.width, raw.height, blocks)))
    }

    /// Build one block, dispatching on the engine's `type` discriminant.
    /// Unknown types are absent, not errors.
    pub fn build_block(&self, raw: Value, page_number: u32) -> Result<Option<Block>> {
        let block_type = raw
            .get("type")
            .and_then(Value::as_i64)
            .ok_or(Error::InvalidStructure {
                context: "block",
                message: "missing or non-integer `type` field".to_string(),
            })?;

        match block_type {
            t if t == BLOCK_TYPE_TEXT as i64 => self.build_text_block(raw, page_number),
            t if t == BLOCK_TYPE_IMAGE as i64 => self.build_image_block(raw, page_number),
            other => {
                log::debug!(
                    "dropping unknown block type {} on page {}",
                    other,
                    page_number
                );
                Ok(None)
            }
        }
    }

    fn build_text_block(&self, raw: Value, page_number: u32) -> Result<Option<Block>> {
        // Emptiness makes the block absent before any field validation.
        if child_list_is_empty(&raw, "lines") {
            return Ok(None);
        }

        let raw: RawTextBlock =
            serde_json::from_value(raw).map_err(|e| Error::invalid("text block", e))?;

        let mut lines = Vec::new();
        for raw_line in raw.lines {
            if let Some(line) = build_line(raw_line, page_number)? {
                lines.push(line);
            }
        }

        Ok(
            TextBlock::from_lines(page_number, raw.block_number, raw.bbox, raw.flags, lines)
                .map(Block::Text),
        )
    }

    /// Image blocks hold their bytes in memory unless an image directory
    /// is configured, in which case persistence runs first and a declined
    /// image makes the whole block absent — the bytes are never retained.
    fn build_image_block(&self, raw: Value, page_number: u32) -> Result<Option<Block>> {
        let raw: RawImageBlock =
            serde_json::from_value(raw).map_err(|e| Error::invalid("image block", e))?;

        let (image, image_path) = match &self.options.image_dir {
            Some(dir) => {
                match save_image_block(
                    &raw,
                    dir,
                    page_number,
                    self.options.min_image_width,
                    self.options.min_image_height,
                )? {
                    Some(path) => (None, Some(path)),
                    None => return Ok(None),
                }
            }
            None => (Some(raw.image), None),
        };

        Ok(Some(Block::Image(ImageBlock {
            page_number,
            block_type: BLOCK_TYPE_IMAGE,
            block_number: raw.block_number,
            bbox: raw.bbox,
            width: raw.width,
            height: raw.height,
            ext: raw.ext,
            image,
            image_path,
            mask: raw.mask,
            object_type: ObjectType::Block,
        })))
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether `key` is missing or an empty array. A present non-array value
/// is not empty; it stays for serde to reject with a descriptive error.
fn child_list_is_empty(raw: &Value, key: &str) -> bool {
    match raw.get(key) {
        None | Some(Value::Null) => true,
        Some(Value::Array(items)) => items.is_empty(),
        Some(_) => false,
    }
}

/// Build one line. Absent when the raw line has no spans or every span
/// fails to validate; individually failing spans are dropped. The span
/// emptiness check runs before field validation, so an empty line is
/// absent even when its other fields are malformed.
pub fn build_line(raw: Value, page_number: u32) -> Result<Option<Line>> {
    if child_list_is_empty(&raw, "spans") {
        return Ok(None);
    }

    let raw: RawLine = serde_json::from_value(raw).map_err(|e| Error::invalid("line", e))?;

    let mut spans = Vec::new();
    for raw_span in raw.spans {
        match build_span(raw_span, page_number) {
            Ok(span) => spans.push(span),
            Err(e) => log::debug!("dropping span on page {}: {}", page_number, e),
        }
    }

    Ok(Line::from_spans(
        page_number,
        raw.writing_mode,
        raw.dir,
        raw.bbox,
        spans,
    ))
}

/// Build one span. Every raw span produces a span or a hard error — no
/// filtering happens at this level.
pub fn build_span(raw: Value, page_number: u32) -> Result<Span> {
    let raw: RawSpan = serde_json::from_value(raw).map_err(|e| Error::invalid("span", e))?;

    Ok(Span {
        page_number,
        origin: raw.origin,
        bbox: raw.bbox,
        text: raw.text,
        font_name: raw.font_name,
        font_size: raw.font_size,
        font_color: raw.font_color,
        ascender: raw.ascender,
        descender: raw.descender,
        flags: raw.flags,
        chars: raw.chars,
    })
}
