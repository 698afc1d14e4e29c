//! Placement geometry.

use serde::{Deserialize, Serialize};

use crate::symbols::SymbolId;

/// Slack for floating-point rounding in containment checks.
const EPSILON: f64 = 1e-9;

/// Position and size of one symbol on a card canvas.
///
/// `x`/`y` are the top-left corner in canvas units; `size` is the edge of
/// the square bounding box (image width/height, or glyph font size).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub symbol: SymbolId,
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

impl Placement {
    #[must_use]
    pub const fn new(symbol: SymbolId, x: f64, y: f64, size: f64) -> Self {
        Self { symbol, x, y, size }
    }

    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        let half = self.size / 2.0;
        (self.x + half, self.y + half)
    }

    #[must_use]
    pub fn center_distance(&self, other: &Placement) -> f64 {
        let (ax, ay) = self.center();
        let (bx, by) = other.center();
        (ax - bx).hypot(ay - by)
    }

    /// Minimum center distance that keeps the two bounding circles
    /// `clearance` apart.
    #[must_use]
    pub fn required_distance(&self, other: &Placement, clearance: f64) -> f64 {
        (self.size + other.size) / 2.0 + clearance
    }

    /// True if the two placements do not overlap given `clearance`.
    #[must_use]
    pub fn clears(&self, other: &Placement, clearance: f64) -> bool {
        self.center_distance(other) > self.required_distance(other, clearance)
    }

    /// True if the bounding box lies within `[margin, canvas_size - margin]`
    /// on both axes.
    #[must_use]
    pub fn within_canvas(&self, canvas_size: f64, margin: f64) -> bool {
        let low = margin - EPSILON;
        let high = canvas_size - margin + EPSILON;
        self.x >= low && self.y >= low && self.x + self.size <= high && self.y + self.size <= high
    }
}
