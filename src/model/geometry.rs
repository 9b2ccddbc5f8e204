//! Geometric primitives reported by the rendering engine.

use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box `(x0, y0, x1, y1)` in page coordinates.
///
/// Serializes as a 4-element array, matching the rendering engine's
/// tuple representation. Coordinates come from the engine as-is and are
/// not re-validated.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BBox(pub f64, pub f64, pub f64, pub f64);

impl BBox {
    /// Left edge.
    pub fn x0(&self) -> f64 {
        self.0
    }

    /// Top edge.
    pub fn y0(&self) -> f64 {
        self.1
    }

    /// Right edge.
    pub fn x1(&self) -> f64 {
        self.2
    }

    /// Bottom edge.
    pub fn y1(&self) -> f64 {
        self.3
    }

    /// Horizontal extent (`x1 - x0`).
    pub fn width(&self) -> f64 {
        self.2 - self.0
    }

    /// Vertical extent (`y1 - y0`).
    pub fn height(&self) -> f64 {
        self.3 - self.1
    }
}

/// A 2D point, used for span origins and line direction vectors.
///
/// Serializes as a 2-element array.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point(pub f64, pub f64);

impl Point {
    /// X component.
    pub fn x(&self) -> f64 {
        self.0
    }

    /// Y component.
    pub fn y(&self) -> f64 {
        self.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbox_dimensions() {
        let bbox = BBox(10.0, 20.0, 110.0, 50.0);
        assert_eq!(bbox.width(), 100.0);
        assert_eq!(bbox.height(), 30.0);
    }

    #[test]
    fn test_bbox_serializes_as_array() {
        let bbox = BBox(0.0, 1.0, 2.0, 3.0);
        let json = serde_json::to_string(&bbox).unwrap();
        assert_eq!(json, "[0.0,1.0,2.0,3.0]");

        let back: BBox = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bbox);
    }
}
