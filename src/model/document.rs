//! Document-level types.

use serde::{Deserialize, Serialize};

use super::{ObjectType, Page};

/// A decomposed PDF document: the ordered sequence of surviving pages.
///
/// Pages that failed to build are omitted, not replaced with
/// placeholders, so page numbers may be sparse (a three-page source with
/// a failed second page yields pages numbered 1 and 3).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Surviving pages, ascending by page number.
    pub pages: Vec<Page>,

    /// Serialization tag, always `"document"`.
    pub object_type: ObjectType,
}

impl Document {
    /// Construct a document from its surviving pages.
    pub fn new(pages: Vec<Page>) -> Self {
        Self {
            pages,
            object_type: ObjectType::Document,
        }
    }

    /// Number of surviving pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Look up a page by its physical page number (1-indexed).
    ///
    /// Searches by number rather than position, because dropped pages
    /// leave gaps in the sequence.
    pub fn get_page(&self, page_number: u32) -> Option<&Page> {
        self.pages.iter().find(|p| p.page_number == page_number)
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.pages
            .iter()
            .map(|page| page.plain_text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let doc = Document::default();
        assert!(doc.is_empty());
        assert_eq!(doc.page_count(), 0);
        assert!(doc.get_page(1).is_none());
    }

    #[test]
    fn test_get_page_by_number_with_gaps() {
        let doc = Document::new(vec![
            Page::new(1, 612.0, 792.0, Vec::new()),
            Page::new(3, 612.0, 792.0, Vec::new()),
        ]);
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.get_page(3).unwrap().page_number, 3);
        assert!(doc.get_page(2).is_none());
    }
}
