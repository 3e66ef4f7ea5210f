//! Mapping selections from display space to source-pixel space.
//!
//! The editor shows a scaled copy of the loaded image. A rectangle dragged
//! over that copy is expressed in *display* pixels and has to be mapped back
//! onto the *source* image before cropping.
//!
//! # Rounding
//!
//! Scaled coordinates are floored (`floor(x * sx)`), never rounded. A display
//! pixel therefore always maps to the first source pixel it covers, and the
//! same drag always produces the same source rectangle.

use serde::{Deserialize, Serialize};
use tracing::trace;

/// An axis-aligned rectangle given by two corners.
///
/// Rectangles produced by [`map_rect_to_source`] are normalized
/// (`x1 <= x2`, `y1 <= y2`) and select the half-open pixel ranges
/// `x1..x2` and `y1..y2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x1: i64,
    pub y1: i64,
    pub x2: i64,
    pub y2: i64,
}

impl Rect {
    pub fn new(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Order the corners so that `x1 <= x2` and `y1 <= y2`.
    pub fn normalized(self) -> Self {
        Self {
            x1: self.x1.min(self.x2),
            y1: self.y1.min(self.y2),
            x2: self.x1.max(self.x2),
            y2: self.y1.max(self.y2),
        }
    }

    pub fn width(&self) -> u64 {
        self.x1.abs_diff(self.x2)
    }

    pub fn height(&self) -> u64 {
        self.y1.abs_diff(self.y2)
    }

    /// True when the rectangle covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

/// Ratio between source and display dimensions on each axis.
///
/// The two axes are independent; `sx == sy` only when the display copy kept
/// the source aspect ratio exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleFactor {
    pub sx: f64,
    pub sy: f64,
}

impl ScaleFactor {
    /// Returns `None` unless both factors are finite and positive.
    pub fn new(sx: f64, sy: f64) -> Option<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        (valid(sx) && valid(sy)).then_some(Self { sx, sy })
    }

    /// Factor that maps `display` dimensions onto `source` dimensions.
    pub fn between(source: (u32, u32), display: (u32, u32)) -> Option<Self> {
        if display.0 == 0 || display.1 == 0 {
            return None;
        }
        Self::new(
            source.0 as f64 / display.0 as f64,
            source.1 as f64 / display.1 as f64,
        )
    }

    pub fn identity() -> Self {
        Self { sx: 1.0, sy: 1.0 }
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self::identity()
    }
}

/// Map a display-space rectangle onto the source image.
///
/// The corners may be given in either drag direction and may lie outside the
/// display. After normalizing, each coordinate is scaled with floor and then
/// clamped independently into `[0, width - 1]` / `[0, height - 1]` of
/// `source_bounds`. Zero-area results are returned unchanged; rejecting them
/// is up to the caller.
///
/// # Example
///
/// ```ignore
/// // 500x450 source shown at 250x225
/// let scale = ScaleFactor::new(2.0, 2.0).unwrap();
/// let mapped = map_rect_to_source(Rect::new(10, 10, 60, 60), scale, (500, 450));
/// assert_eq!(mapped, Rect::new(20, 20, 120, 120));
/// ```
pub fn map_rect_to_source(rect: Rect, scale: ScaleFactor, source_bounds: (u32, u32)) -> Rect {
    let rect = rect.normalized();
    let max_x = (source_bounds.0 as i64 - 1).max(0);
    let max_y = (source_bounds.1 as i64 - 1).max(0);

    let map = |v: i64, factor: f64, max: i64| -> i64 {
        // `as` saturates on overflow and maps NaN to 0
        let scaled = (v as f64 * factor).floor() as i64;
        scaled.clamp(0, max)
    };

    let mapped = Rect {
        x1: map(rect.x1, scale.sx, max_x),
        y1: map(rect.y1, scale.sy, max_y),
        x2: map(rect.x2, scale.sx, max_x),
        y2: map(rect.y2, scale.sy, max_y),
    };
    trace!(?rect, ?mapped, sx = scale.sx, sy = scale.sy, "Mapped selection to source");
    mapped
}


// ============================================================================
// Property-Based Tests
// ============================================================================
