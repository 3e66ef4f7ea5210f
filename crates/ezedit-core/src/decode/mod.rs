//! Image decoding for the editor.
//!
//! This module provides:
//! - [`PixelBuffer`], the RGB8 raster every other module works on
//! - Decoding JPEG and PNG bytes or files, with EXIF orientation applied
//! - Resizing for the fit-to-canvas display copy and the resize preview
//!
//! All operations are synchronous and single-threaded.
//!
//! # Examples
//!
//! ```ignore
//! use ezedit_core::decode::{decode_file, fit_to_canvas, FilterType};
//!
//! let image = decode_file("photo.jpg").unwrap();
//! let display = fit_to_canvas(&image, 500, 450, FilterType::Bilinear).unwrap();
//! println!("Showing {}x{} as {}x{}", image.width, image.height, display.width, display.height);
//! ```

mod raster;
mod resize;
mod types;

pub use raster::{decode_file, decode_image};
pub use resize::{fit_to_canvas, resize, scale_by_percent};
pub use types::{DecodeError, FilterType, PixelBuffer, CHANNELS};
