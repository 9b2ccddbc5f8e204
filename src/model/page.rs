//! Page-level types.

use serde::{Deserialize, Serialize};

use super::{Block, ObjectType};

/// A single physical page holding an ordered sequence of blocks.
///
/// Pages only exist with at least one surviving block; input pages whose
/// blocks all fail filtering are dropped from the document instead of
/// being kept as empty placeholders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed, from physical order).
    pub page_number: u32,

    /// Page width in points.
    pub width: f64,

    /// Page height in points.
    pub height: f64,

    /// Content blocks in rendering order.
    pub blocks: Vec<Block>,

    /// Serialization tag, always `"page"`.
    pub object_type: ObjectType,
}

impl Page {
    /// Construct a page from its surviving blocks.
    pub fn new(page_number: u32, width: f64, height: f64, blocks: Vec<Block>) -> Self {
        Self {
            page_number,
            width,
            height,
            blocks,
            object_type: ObjectType::Page,
        }
    }

    /// Number of blocks on the page.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Iterate the text blocks on the page.
    pub fn text_blocks(&self) -> impl Iterator<Item = &super::TextBlock> {
        self.blocks.iter().filter_map(|b| b.as_text())
    }

    /// Iterate the image blocks on the page.
    pub fn image_blocks(&self) -> impl Iterator<Item = &super::ImageBlock> {
        self.blocks.iter().filter_map(|b| b.as_image())
    }

    /// Plain text content of the page: text-block texts joined with
    /// blank lines, image blocks skipped.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .filter_map(|block| block.text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Page dimensions as (width, height).
    pub fn dimensions(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}
