//! Block-level types: page regions holding either text lines or one image.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{BBox, Line, ObjectType};

/// Numeric discriminant the rendering engine uses for text blocks.
pub const BLOCK_TYPE_TEXT: u8 = 0;
/// Numeric discriminant the rendering engine uses for image blocks.
pub const BLOCK_TYPE_IMAGE: u8 = 1;

/// A page-level unit of content.
///
/// Serialized forms of both variants carry the engine's numeric `type`
/// discriminant alongside `object_type: "block"`, so the enum itself
/// stays untagged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Block {
    /// A block of text lines.
    Text(TextBlock),
    /// A block wrapping one embedded raster image.
    Image(ImageBlock),
}

impl Block {
    /// Page the block was rendered on (1-indexed).
    pub fn page_number(&self) -> u32 {
        match self {
            Block::Text(b) => b.page_number,
            Block::Image(b) => b.page_number,
        }
    }

    /// Block index within the page, as numbered by the engine.
    pub fn block_number(&self) -> u32 {
        match self {
            Block::Text(b) => b.block_number,
            Block::Image(b) => b.block_number,
        }
    }

    /// Bounding box of the block.
    pub fn bbox(&self) -> BBox {
        match self {
            Block::Text(b) => b.bbox,
            Block::Image(b) => b.bbox,
        }
    }

    /// Check if this is a text block.
    pub fn is_text(&self) -> bool {
        matches!(self, Block::Text(_))
    }

    /// Check if this is an image block.
    pub fn is_image(&self) -> bool {
        matches!(self, Block::Image(_))
    }

    /// Text content for text blocks, `None` for image blocks.
    pub fn text(&self) -> Option<&str> {
        match self {
            Block::Text(b) => Some(b.text()),
            Block::Image(_) => None,
        }
    }

    /// Borrow the text block, if this is one.
    pub fn as_text(&self) -> Option<&TextBlock> {
        match self {
            Block::Text(b) => Some(b),
            Block::Image(_) => None,
        }
    }

    /// Borrow the image block, if this is one.
    pub fn as_image(&self) -> Option<&ImageBlock> {
        match self {
            Block::Text(_) => None,
            Block::Image(b) => Some(b),
        }
    }
}

/// A block containing one or more text lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextBlock {
    /// Page the block was rendered on (1-indexed).
    pub page_number: u32,

    /// Engine discriminant, always [`BLOCK_TYPE_TEXT`].
    #[serde(rename = "type")]
    pub block_type: u8,

    /// Block index within the page.
    pub block_number: u32,

    /// Bounding box of the block.
    pub bbox: BBox,

    /// Block-level flags reported by the engine.
    pub flags: i64,

    /// Lines in rendering order. Never empty.
    pub lines: Vec<Line>,

    /// Block text, newline-joined from the line texts.
    text: String,

    /// Serialization tag, always `"block"`.
    pub object_type: ObjectType,
}

impl TextBlock {
    /// Construct a text block from its surviving lines, computing the
    /// joined text eagerly. Returns `None` for an empty line list.
    pub fn from_lines(
        page_number: u32,
        block_number: u32,
        bbox: BBox,
        flags: i64,
        lines: Vec<Line>,
    ) -> Option<Self> {
        if lines.is_empty() {
            return None;
        }

        let text = lines
            .iter()
            .map(|line| line.text())
            .collect::<Vec<_>>()
            .join("\n");

        Some(Self {
            page_number,
            block_type: BLOCK_TYPE_TEXT,
            block_number,
            bbox,
            flags,
            lines,
            text,
            object_type: ObjectType::Block,
        })
    }

    /// The block text: line texts joined with newlines, in order.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the block holds exactly one line.
    pub fn is_single_line(&self) -> bool {
        self.lines.len() == 1
    }
}

/// A block wrapping one embedded raster image.
///
/// Depending on persistence mode, the image lives either in memory
/// (`image`) or on disk (`image_path`), never both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageBlock {
    /// Page the block was rendered on (1-indexed).
    pub page_number: u32,

    /// Engine discriminant, always [`BLOCK_TYPE_IMAGE`].
    #[serde(rename = "type")]
    pub block_type: u8,

    /// Block index within the page.
    pub block_number: u32,

    /// Bounding box of the placed image on the page.
    pub bbox: BBox,

    /// Pixel width of the embedded raster.
    pub width: u32,

    /// Pixel height of the embedded raster.
    pub height: u32,

    /// File extension of the embedded format (e.g., "png", "jpeg").
    pub ext: String,

    /// Raw image bytes, populated only when the block was not persisted.
    #[serde(default, skip_serializing)]
    pub image: Option<Vec<u8>>,

    /// On-disk path, populated only when the block was persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<PathBuf>,

    /// Optional soft-mask bytes.
    #[serde(default, skip_serializing)]
    pub mask: Option<Vec<u8>>,

    /// Serialization tag, always `"block"`.
    pub object_type: ObjectType,
}

impl ImageBlock {
    /// Whether the image was written to disk rather than kept in memory.
    pub fn persisted(&self) -> bool {
        self.image_path.is_some()
    }

    /// Size of the image payload in bytes.
    ///
    /// For persisted blocks this stats the file; a missing file counts
    /// as zero.
    pub fn size(&self) -> u64 {
        if let Some(ref data) = self.image {
            return data.len() as u64;
        }
        if let Some(ref path) = self.image_path {
            return std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        }
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Point, Span};

    fn line(page_number: u32, text: &str) -> Line {
        let span = Span {
            page_number,
            origin: Point(0.0, 0.0),
            bbox: BBox(0.0, 0.0, 10.0, 5.0),
            text: text.to_string(),
            font_name: "CMR10".to_string(),
            font_size: 10.0,
            font_color: 0,
            ascender: 0.69,
            descender: -0.19,
            flags: 0,
            chars: Vec::new(),
        };
        Line::from_spans(page_number, 0, Point(1.0, 0.0), BBox(0.0, 0.0, 10.0, 5.0), vec![span])
            .unwrap()
    }

    #[test]
    fn test_text_block_joins_lines_with_newlines() {
        let block =
            TextBlock::from_lines(1, 0, BBox(0.0, 0.0, 100.0, 50.0), 0, vec![
                line(1, "first"),
                line(1, "second"),
            ])
            .unwrap();
        assert_eq!(block.text(), "first\nsecond");
        assert!(!block.is_single_line());
    }

    #[test]
    fn test_text_block_rejects_empty_lines() {
        assert!(TextBlock::from_lines(1, 0, BBox::default(), 0, Vec::new()).is_none());
    }

    #[test]
    fn test_block_accessors() {
        let block = Block::Text(
            TextBlock::from_lines(3, 7, BBox(1.0, 2.0, 3.0, 4.0), 0, vec![line(3, "x")]).unwrap(),
        );
        assert!(block.is_text());
        assert!(!block.is_image());
        assert_eq!(block.page_number(), 3);
        assert_eq!(block.block_number(), 7);
        assert_eq!(block.text(), Some("x"));
        assert!(block.as_image().is_none());
    }

    #[test]
    fn test_image_block_size_and_persisted() {
        let block = ImageBlock {
            page_number: 1,
            block_type: BLOCK_TYPE_IMAGE,
            block_number: 2,
            bbox: BBox(0.0, 0.0, 50.0, 50.0),
            width: 640,
            height: 480,
            ext: "png".to_string(),
            image: Some(vec![0u8; 16]),
            image_path: None,
            mask: None,
            object_type: ObjectType::Block,
        };
        assert!(!block.persisted());
        assert_eq!(block.size(), 16);
    }

    #[test]
    fn test_image_bytes_never_serialized() {
        let block = ImageBlock {
            page_number: 1,
            block_type: BLOCK_TYPE_IMAGE,
            block_number: 0,
            bbox: BBox(0.0, 0.0, 50.0, 50.0),
            width: 8,
            height: 8,
            ext: "png".to_string(),
            image: Some(vec![1, 2, 3]),
            image_path: None,
            mask: Some(vec![4, 5]),
            object_type: ObjectType::Block,
        };
        let json = serde_json::to_string(&block).unwrap();
        assert!(!json.contains("\"image\""));
        assert!(!json.contains("\"mask\""));
        assert!(json.contains("\"ext\":\"png\""));
    }
}
