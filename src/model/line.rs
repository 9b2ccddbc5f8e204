//! Line-level types: one visually rendered text line.

use serde::{Deserialize, Serialize};

use super::{BBox, ObjectType, Point, Span};

/// Horizontal gap between adjacent spans at or above which a word break
/// is assumed. Below it the spans are treated as one continuous run
/// (split word, ligature, or mid-word style change).
const WORD_GAP_THRESHOLD: f64 = 0.1;

/// An ordered sequence of spans rendered on one visual line.
///
/// A line always carries at least one span; input that would produce an
/// empty line is rejected at build time, not represented as an empty value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    /// Page the line was rendered on (1-indexed).
    pub page_number: u32,

    /// Writing mode reported by the engine (0 horizontal, 1 vertical).
    pub writing_mode: i64,

    /// Unit direction vector of the line.
    pub dir: Point,

    /// Bounding box of the full line.
    pub bbox: BBox,

    /// Spans in rendering order. Never empty.
    pub spans: Vec<Span>,

    /// Line text, joined from spans with the word-gap heuristic.
    text: String,

    /// Serialization tag, always `"line"`.
    pub object_type: ObjectType,
}

impl Line {
    /// Construct a line from its spans, computing the joined text eagerly.
    ///
    /// Returns `None` for an empty span list — such a line does not exist
    /// in the document tree.
    pub fn from_spans(
        page_number: u32,
        writing_mode: i64,
        dir: Point,
        bbox: BBox,
        spans: Vec<Span>,
    ) -> Option<Self> {
        if spans.is_empty() {
            return None;
        }

        let text = join_spans(&spans);
        Some(Self {
            page_number,
            writing_mode,
            dir,
            bbox,
            spans,
            text,
            object_type: ObjectType::Line,
        })
    }

    /// The reconstructed line text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of spans on the line.
    pub fn span_count(&self) -> usize {
        self.spans.len()
    }
}

/// Join span texts in order, inserting a single space wherever the
/// horizontal gap to the next span reads as a word break.
fn join_spans(spans: &[Span]) -> String {
    let mut text = String::new();
    for (i, span) in spans.iter().enumerate() {
        text.push_str(&span.text);
        if let Some(next) = spans.get(i + 1) {
            if next.bbox.x0() - span.bbox.x1() >= WORD_GAP_THRESHOLD {
                text.push(' ');
            }
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span_at(x0: f64, x1: f64, text: &str) -> Span {
        Span {
            page_number: 1,
            origin: Point(x0, 0.0),
            bbox: BBox(x0, 0.0, x1, 5.0),
            text: text.to_string(),
            font_name: "CMR10".to_string(),
            font_size: 10.0,
            font_color: 0,
            ascender: 0.69,
            descender: -0.19,
            flags: 0,
            chars: Vec::new(),
        }
    }

    fn line_from(spans: Vec<Span>) -> Option<Line> {
        Line::from_spans(1, 0, Point(1.0, 0.0), BBox(0.0, 0.0, 20.0, 5.0), spans)
    }

    #[test]
    fn test_small_gap_joins_without_space() {
        // gap 0.05 < 0.1: continuous run
        let line = line_from(vec![span_at(0.0, 10.0, "foo"), span_at(10.05, 20.0, "bar")]).unwrap();
        assert_eq!(line.text(), "foobar");
    }

    #[test]
    fn test_visible_gap_inserts_space() {
        // gap 0.2 >= 0.1: word break
        let line = line_from(vec![span_at(0.0, 10.0, "foo"), span_at(10.2, 20.0, "bar")]).unwrap();
        assert_eq!(line.text(), "foo bar");
    }

    #[test]
    fn test_last_span_has_no_trailing_separator() {
        let line = line_from(vec![
            span_at(0.0, 10.0, "a"),
            span_at(10.5, 20.0, "b"),
            span_at(20.5, 30.0, "c"),
        ])
        .unwrap();
        assert_eq!(line.text(), "a b c");
    }

    #[test]
    fn test_single_span_line() {
        let line = line_from(vec![span_at(0.0, 10.0, "solo")]).unwrap();
        assert_eq!(line.text(), "solo");
        assert_eq!(line.span_count(), 1);
    }

    #[test]
    fn test_empty_span_list_is_rejected() {
        assert!(line_from(Vec::new()).is_none());
    }
}
