//! Span-level types: one run of characters sharing a single font.

use serde::{Deserialize, Serialize};

use super::{BBox, Point};

/// Style flag bits packed into a span's `flags` integer.
///
/// Bit layout follows the rendering engine's font flag encoding; any
/// integer is a valid flags value, unknown bits are ignored.
const FLAG_SUPERSCRIPT: i64 = 1 << 0;
const FLAG_ITALIC: i64 = 1 << 1;
const FLAG_SERIFED: i64 = 1 << 2;
const FLAG_MONOSPACED: i64 = 1 << 3;
const FLAG_BOLD: i64 = 1 << 4;

/// A run of characters sharing one font, the smallest unit of styled text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Span {
    /// Page the span was rendered on (1-indexed).
    pub page_number: u32,

    /// Baseline origin of the first character.
    pub origin: Point,

    /// Bounding box of the rendered text.
    pub bbox: BBox,

    /// Text content. May be empty.
    pub text: String,

    /// Font name (e.g., "CMR10", "Helvetica-Bold").
    pub font_name: String,

    /// Font size in points.
    pub font_size: f64,

    /// Font color as a packed integer (sRGB).
    pub font_color: i64,

    /// Ascender metric of the font.
    pub ascender: f64,

    /// Descender metric of the font (usually negative).
    pub descender: f64,

    /// Packed style flag bits.
    pub flags: i64,

    /// Per-character detail, present only when the engine was asked for it.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub chars: Vec<serde_json::Value>,
}

impl Span {
    /// Whether the superscript flag bit is set.
    pub fn is_superscript(&self) -> bool {
        self.flags & FLAG_SUPERSCRIPT != 0
    }

    /// Whether the italic flag bit is set.
    pub fn is_italic(&self) -> bool {
        self.flags & FLAG_ITALIC != 0
    }

    /// Whether the serifed flag bit is set.
    pub fn is_serifed(&self) -> bool {
        self.flags & FLAG_SERIFED != 0
    }

    /// Whether the monospaced flag bit is set.
    pub fn is_monospaced(&self) -> bool {
        self.flags & FLAG_MONOSPACED != 0
    }

    /// Whether the bold flag bit is set.
    pub fn is_bold(&self) -> bool {
        self.flags & FLAG_BOLD != 0
    }

    /// Project the span's font identity and decoded style.
    ///
    /// Recomputed on every call; the projection is cheap and never cached.
    pub fn font(&self) -> Font {
        Font {
            name: self.font_name.clone(),
            size: self.font_size,
            color: self.font_color,
            is_bold: self.is_bold(),
            is_italic: self.is_italic(),
            is_monospaced: self.is_monospaced(),
        }
    }
}

/// Font identity plus decoded style attributes, projected from one span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Font name as reported by the engine.
    pub name: String,
    /// Size in points.
    pub size: f64,
    /// Packed color integer.
    pub color: i64,
    /// Decoded bold flag.
    pub is_bold: bool,
    /// Decoded italic flag.
    pub is_italic: bool,
    /// Decoded monospace flag.
    pub is_monospaced: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span_with_flags(flags: i64) -> Span {
        Span {
            page_number: 1,
            origin: Point(0.0, 0.0),
            bbox: BBox(0.0, 0.0, 10.0, 10.0),
            text: "x".to_string(),
            font_name: "CMR10".to_string(),
            font_size: 9.96,
            font_color: 0,
            ascender: 0.69,
            descender: -0.19,
            flags,
            chars: Vec::new(),
        }
    }

    #[test]
    fn test_zero_flags_decode_to_false() {
        let span = span_with_flags(0);
        assert!(!span.is_superscript());
        assert!(!span.is_italic());
        assert!(!span.is_serifed());
        assert!(!span.is_monospaced());
        assert!(!span.is_bold());
    }

    #[test]
    fn test_each_flag_bit_is_independent() {
        assert!(span_with_flags(0b00001).is_superscript());
        assert!(span_with_flags(0b00010).is_italic());
        assert!(span_with_flags(0b00100).is_serifed());
        assert!(span_with_flags(0b01000).is_monospaced());
        assert!(span_with_flags(0b10000).is_bold());
    }

    #[test]
    fn test_combined_flags() {
        // superscript + bold, nothing else
        let span = span_with_flags(0b10001);
        assert!(span.is_superscript());
        assert!(span.is_bold());
        assert!(!span.is_italic());
        assert!(!span.is_serifed());
        assert!(!span.is_monospaced());
    }

    #[test]
    fn test_negative_flags_are_valid_input() {
        // -1 has every bit set in two's complement
        let span = span_with_flags(-1);
        assert!(span.is_superscript());
        assert!(span.is_italic());
        assert!(span.is_serifed());
        assert!(span.is_monospaced());
        assert!(span.is_bold());
    }

    #[test]
    fn test_font_projection() {
        let mut span = span_with_flags(0b10010);
        span.font_name = "NimbusRomNo9L-Medi".to_string();

        let font = span.font();
        assert_eq!(font.name, "NimbusRomNo9L-Medi");
        assert_eq!(font.size, 9.96);
        assert!(font.is_bold);
        assert!(font.is_italic);
        assert!(!font.is_monospaced);
    }
}
