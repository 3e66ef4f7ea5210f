//! EzEdit Core - Image editing library
//!
//! This crate provides the editing core for EzEdit: decoding and encoding,
//! mapping a selection from the fitted display copy back to source pixels,
//! cropping, lossless rotate/flip, a resize preview, and linear undo/redo.
//!
//! # Usage
//!
//! ```ignore
//! use ezedit_core::{EditSession, Rect};
//!
//! let mut session = EditSession::default();
//! session.open("photo.jpg")?;
//! session.crop_display(Rect::new(100, 100, 300, 300))?;
//! session.rotate()?;
//! session.undo()?;
//! session.save("cropped.png")?;
//! ```

pub mod config;
pub mod decode;
pub mod encode;
pub mod session;
pub mod transform;

pub use config::EditorConfig;
pub use decode::{DecodeError, FilterType, PixelBuffer};
pub use encode::EncodeError;
pub use session::{Controls, EditError, EditResult, EditSession, SessionState, Transform};
pub use transform::{map_rect_to_source, Rect, ScaleFactor};
