//! WASM bindings for the editing session.
//!
//! A `JsEditSession` owns the loaded image, the working crop and the
//! undo/redo history. Every method runs synchronously; after each call the
//! page redraws from `working` (or `preview`) and refreshes its buttons from
//! `controls`.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const session = new JsEditSession({ canvasWidth: 500, canvasHeight: 450 });
//! session.load_bytes(new Uint8Array(await file.arrayBuffer()));
//! drawImage(session.display());
//!
//! session.crop(100, 100, 300, 300);
//! session.rotate();
//! session.undo();
//! const png = session.export_png();
//! ```

use crate::types::{rect_from_js, to_js_error, JsPixelBuffer, JsRect};
use ezedit_core::{EditSession, EditorConfig};
use wasm_bindgen::prelude::*;

/// An editing session for JavaScript.
#[wasm_bindgen]
pub struct JsEditSession {
    inner: EditSession,
}

#[wasm_bindgen]
impl JsEditSession {
    /// Create a session.
    ///
    /// `config` is an optional object with any of `canvasWidth`,
    /// `canvasHeight`, `minPreviewScale`, `maxPreviewScale`, `previewFilter`
    /// (`"nearest" | "bilinear" | "lanczos3"`) and `historyLimit`. Missing
    /// fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` cannot be deserialized.
    #[wasm_bindgen(constructor)]
    pub fn new(config: Option<js_sys::Object>) -> Result<JsEditSession, JsValue> {
        let config = match config {
            Some(object) => serde_wasm_bindgen::from_value::<EditorConfig>(object.into())
                .map_err(|e| to_js_error(format!("Invalid editor config: {}", e)))?,
            None => EditorConfig::default(),
        };
        Ok(JsEditSession::with_config(config))
    }

    /// Decode JPEG or PNG bytes and load them, resetting the session.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<(), JsValue> {
        self.inner.load_bytes(bytes).map_err(to_js_error)
    }

    /// Load an already decoded image, resetting the session.
    pub fn load(&mut self, image: &JsPixelBuffer) -> Result<(), JsValue> {
        self.inner.load(image.to_buffer()).map_err(to_js_error)
    }

    /// Crop to a selection drawn on the display copy.
    ///
    /// Returns the rectangle that was cropped, in source pixels.
    pub fn crop(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<JsRect, JsValue> {
        self.inner
            .crop_display(rect_from_js(x1, y1, x2, y2))
            .map(JsRect::from_rect)
            .map_err(to_js_error)
    }

    pub fn rotate(&mut self) -> Result<(), JsValue> {
        self.inner.rotate().map_err(to_js_error)
    }

    pub fn flip_horizontal(&mut self) -> Result<(), JsValue> {
        self.inner.flip_horizontal().map_err(to_js_error)
    }

    pub fn flip_vertical(&mut self) -> Result<(), JsValue> {
        self.inner.flip_vertical().map_err(to_js_error)
    }

    /// Set the preview scale in percent; out-of-range values are clamped.
    pub fn set_preview_scale(&mut self, percent: u32) -> Result<(), JsValue> {
        self.inner.set_preview_scale(percent).map_err(to_js_error)
    }

    /// Step back one edit. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.inner.undo().is_ok()
    }

    /// Step forward one edit. Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.inner.redo().is_ok()
    }

    /// The current working image, if a crop has been made.
    pub fn working(&self) -> Option<JsPixelBuffer> {
        self.inner
            .current_working()
            .cloned()
            .map(JsPixelBuffer::from_buffer)
    }

    /// The loaded image fitted to the canvas.
    pub fn display(&self) -> Option<JsPixelBuffer> {
        self.inner.display().cloned().map(JsPixelBuffer::from_buffer)
    }

    /// The working image scaled by the preview scale.
    pub fn preview(&self) -> Result<JsPixelBuffer, JsValue> {
        self.inner
            .preview()
            .map(JsPixelBuffer::from_buffer)
            .map_err(to_js_error)
    }

    /// The working image encoded as PNG.
    pub fn export_png(&self) -> Result<Vec<u8>, JsValue> {
        self.inner.export_png().map_err(to_js_error)
    }

    /// `"empty"`, `"loaded"` or `"editing"`.
    #[wasm_bindgen(getter)]
    pub fn state(&self) -> String {
        self.inner.state().as_str().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn preview_scale(&self) -> u32 {
        self.inner.preview_scale()
    }

    #[wasm_bindgen(getter)]
    pub fn can_undo(&self) -> bool {
        self.inner.can_undo()
    }

    #[wasm_bindgen(getter)]
    pub fn can_redo(&self) -> bool {
        self.inner.can_redo()
    }

    /// Which controls are enabled, as `{ crop, resize, rotate, flip, save, undo, redo }`.
    pub fn controls(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.controls()).map_err(to_js_error)
    }
}

impl JsEditSession {
    pub(crate) fn with_config(config: EditorConfig) -> Self {
        Self {
            inner: EditSession::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ezedit_core::encode::encode_png;

    fn gradient_png(width: u32, height: u32) -> Vec<u8> {
        let pixels: Vec<u8> = (0..(width * height * 3)).map(|i| (i % 256) as u8).collect();
        encode_png(&pixels, width, height).unwrap()
    }

    fn loaded() -> JsEditSession {
        let mut session = JsEditSession::with_config(EditorConfig::default());
        session.load_bytes(&gradient_png(500, 450)).unwrap();
        session
    }

    #[test]
    fn test_new_session_state() {
        let session = JsEditSession::with_config(EditorConfig::default());
        assert_eq!(session.state(), "empty");
        assert!(session.working().is_none());
        assert!(session.display().is_none());
        assert!(!session.can_undo());
    }

    #[test]
    fn test_crop_rotate_undo() {
        let mut session = loaded();
        assert_eq!(session.state(), "loaded");

        let rect = session.crop(100, 100, 300, 300).unwrap();
        assert_eq!((rect.width(), rect.height()), (200, 200));
        assert_eq!(session.state(), "editing");
        let crop = session.working().unwrap().pixels();

        session.rotate().unwrap();
        assert_ne!(session.working().unwrap().pixels(), crop);

        assert!(session.undo());
        assert_eq!(session.working().unwrap().pixels(), crop);
        assert!(session.can_redo());
        assert!(session.redo());
        assert!(!session.redo());
    }

    #[test]
    fn test_flips_and_preview() {
        let mut session = loaded();
        session.crop(0, 0, 40, 20).unwrap();
        session.flip_horizontal().unwrap();
        session.flip_vertical().unwrap();

        session.set_preview_scale(150).unwrap();
        assert_eq!(session.preview_scale(), 150);
        let preview = session.preview().unwrap();
        assert_eq!((preview.width(), preview.height()), (60, 30));
    }

    #[test]
    fn test_export_png() {
        let mut session = loaded();
        session.crop(10, 10, 20, 30).unwrap();
        let png = session.export_png().unwrap();
        let decoded = ezedit_core::decode::decode_image(&png).unwrap();
        assert_eq!(decoded.pixels, session.working().unwrap().pixels());
    }

    #[test]
    fn test_undo_with_nothing_loaded() {
        let mut session = JsEditSession::with_config(EditorConfig::default());
        assert!(!session.undo());
        assert!(!session.redo());
    }
}
