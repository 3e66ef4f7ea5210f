//! Image encoding for saving edits.
//!
//! The editor saves to a single lossless format, PNG.
//!
//! # Examples
//!
//! ```ignore
//! use ezedit_core::encode::encode_png;
//!
//! let pixels = vec![128u8; 100 * 100 * 3]; // Gray image
//! let png_bytes = encode_png(&pixels, 100, 100).unwrap();
//! println!("Encoded {} bytes", png_bytes.len());
//! ```

mod png;

pub use png::{encode_buffer, encode_png, save_png, EncodeError};
