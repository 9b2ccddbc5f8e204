//! Document tree types for decomposed PDF content.
//!
//! The types here mirror the structure a rendering engine reports for a
//! page: a [`Document`] owns [`Page`]s, a page owns [`Block`]s, a text
//! block owns [`Line`]s, and a line owns [`Span`]s. All values are
//! immutable after construction; derived text is computed eagerly while
//! building.

mod block;
mod document;
mod geometry;
mod line;
mod page;
mod span;

pub use block::{Block, ImageBlock, TextBlock, BLOCK_TYPE_IMAGE, BLOCK_TYPE_TEXT};
pub use document::Document;
pub use geometry::{BBox, Point};
pub use line::Line;
pub use page::Page;
pub use span::{Font, Span};

use serde::{Deserialize, Serialize};

/// Discriminant tag carried by each serialized level of the document tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    /// Top-level document.
    Document,
    /// A physical page.
    Page,
    /// A page-level content block (text or image).
    Block,
    /// One visually rendered text line.
    Line,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_type_serialization() {
        assert_eq!(
            serde_json::to_string(&ObjectType::Document).unwrap(),
            "\"document\""
        );
        assert_eq!(serde_json::to_string(&ObjectType::Line).unwrap(), "\"line\"");
    }
}
