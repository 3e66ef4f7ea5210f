//! EzEdit WASM - WebAssembly bindings for EzEdit
//!
//! This crate exposes the ezedit-core editing session and codec to a
//! browser page, which owns all drawing and input handling.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for images and rectangles
//! - `decode` - Image decoding bindings (JPEG/PNG, fit to canvas)
//! - `encode` - Image encoding bindings (PNG export)
//! - `transform` - Selection mapping from display to source pixels
//! - `session` - The stateful editing session with undo/redo
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsEditSession } from '@ezedit/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const session = new JsEditSession();
//! session.load_bytes(new Uint8Array(await file.arrayBuffer()));
//! session.crop(100, 100, 300, 300);
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod session;
mod transform;
mod types;

// Re-export public types
pub use decode::{decode_image, fit_to_canvas};
pub use encode::{encode_image, encode_png};
pub use session::JsEditSession;
pub use transform::map_rect_to_source;
pub use types::{JsPixelBuffer, JsRect};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
