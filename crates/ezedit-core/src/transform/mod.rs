//! Geometry: selection mapping, cropping and lossless orientation changes.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner, x grows right, y grows down
//! - Display space is the scaled copy shown to the user
//! - Source space is the loaded image at full resolution
//! - Crop rectangles are half-open: `x1..x2`, `y1..y2`

mod crop;
mod mapping;
mod orient;

pub use crop::apply_crop;
pub use mapping::{map_rect_to_source, Rect, ScaleFactor};
pub use orient::{flip_horizontal, flip_vertical, rotate_clockwise_90};
