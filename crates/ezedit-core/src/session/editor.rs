//! [`EditSession`], the stateful half of the editor core.

use std::path::Path;

use tracing::debug;

use super::{Controls, EditError, EditResult, History, SessionState, Transform};
use crate::config::EditorConfig;
use crate::decode::{self, DecodeError, PixelBuffer};
use crate::encode;
use crate::transform::{
    apply_crop, flip_horizontal, flip_vertical, map_rect_to_source, rotate_clockwise_90, Rect,
    ScaleFactor,
};

const DEFAULT_PREVIEW_SCALE: u32 = 100;

/// Editing state for one loaded image.
///
/// The session keeps the loaded `original`, a `display` copy fitted to the
/// configured canvas, the current `working` crop and its undo/redo history.
/// Every history entry is the state *after* an edit.
#[derive(Debug, Clone)]
pub struct EditSession {
    config: EditorConfig,
    original: Option<PixelBuffer>,
    display: Option<PixelBuffer>,
    scale: Option<ScaleFactor>,
    working: Option<PixelBuffer>,
    history: History,
    preview_scale: u32,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditSession {
    pub fn new(config: EditorConfig) -> Self {
        let history = History::new(config.history_limit);
        let preview_scale = config.clamp_preview_scale(DEFAULT_PREVIEW_SCALE);
        Self {
            config,
            original: None,
            display: None,
            scale: None,
            working: None,
            history,
            preview_scale,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Replace the loaded image and reset all editing state.
    ///
    /// The display copy is fitted to the configured canvas and the
    /// display-to-source scale is recorded for [`crop_display`](Self::crop_display).
    ///
    /// # Errors
    ///
    /// Returns `EditError::Decode` if the buffer is empty or malformed; the
    /// session is unchanged in that case.
    pub fn load(&mut self, image: PixelBuffer) -> EditResult<()> {
        let image = PixelBuffer::try_new(image.width, image.height, image.pixels)?;

        let (canvas_width, canvas_height) = self.config.canvas();
        let fitted =
            decode::fit_to_canvas(&image, canvas_width, canvas_height, self.config.preview_filter)?;
        let (fitted_width, fitted_height) = fitted.dimensions();
        let scale = ScaleFactor::between(image.dimensions(), (fitted_width, fitted_height)).ok_or(
            DecodeError::EmptyImage {
                width: fitted_width,
                height: fitted_height,
            },
        )?;

        debug!(
            width = image.width,
            height = image.height,
            fitted_width,
            fitted_height,
            "Loaded image"
        );

        self.original = Some(image);
        self.display = Some(fitted);
        self.scale = Some(scale);
        self.working = None;
        self.history.clear();
        self.preview_scale = self.config.clamp_preview_scale(DEFAULT_PREVIEW_SCALE);
        Ok(())
    }

    /// Decode JPEG or PNG bytes and load the result.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> EditResult<()> {
        let image = decode::decode_image(bytes)?;
        self.load(image)
    }

    /// Read an image file and load it.
    pub fn open(&mut self, path: impl AsRef<Path>) -> EditResult<()> {
        let image = decode::decode_file(path)?;
        self.load(image)
    }

    /// Crop the original image to a selection made in display space.
    ///
    /// The selection is mapped with [`map_rect_to_source`] against the
    /// original's bounds. On success the previous working image (if any) and
    /// then the new crop are pushed onto the history, the redo stack is
    /// cleared and the preview scale returns to 100%.
    ///
    /// Returns the source-space rectangle that was cropped.
    ///
    /// # Errors
    ///
    /// - `EditError::NoActiveImage` if nothing is loaded
    /// - `EditError::InvalidSelection` if the mapped selection has zero area
    pub fn crop(&mut self, display_rect: Rect, scale: ScaleFactor) -> EditResult<Rect> {
        let original = self.original.as_ref().ok_or(EditError::NoActiveImage)?;

        let source_rect = map_rect_to_source(display_rect, scale, original.dimensions());
        let invalid = EditError::InvalidSelection {
            width: source_rect.width(),
            height: source_rect.height(),
        };
        if source_rect.is_empty() {
            return Err(invalid);
        }
        let cropped = apply_crop(original, source_rect).ok_or(invalid)?;

        debug!(
            ?source_rect,
            width = cropped.width,
            height = cropped.height,
            "Committed crop"
        );

        if let Some(previous) = self.working.take() {
            self.history.push_undo(previous);
        }
        self.history.commit(cropped.clone());
        self.working = Some(cropped);
        self.preview_scale = self.config.clamp_preview_scale(DEFAULT_PREVIEW_SCALE);
        Ok(source_rect)
    }

    /// [`crop`](Self::crop) using the scale recorded when the image was loaded.
    pub fn crop_display(&mut self, display_rect: Rect) -> EditResult<Rect> {
        let scale = self.scale.ok_or(EditError::NoActiveImage)?;
        self.crop(display_rect, scale)
    }

    /// Apply a transform to the working image.
    ///
    /// `Resize` only changes the preview scale (clamped to the configured
    /// range). The other transforms push the current working image onto the
    /// history, clear the redo stack and replace the working image.
    ///
    /// # Errors
    ///
    /// Returns `EditError::NoActiveImage` if no crop has been committed.
    pub fn apply_transform(&mut self, transform: Transform) -> EditResult<()> {
        let working = self.working.as_ref().ok_or(EditError::NoActiveImage)?;

        let next = match transform {
            Transform::Resize(percent) => {
                self.preview_scale = self.config.clamp_preview_scale(percent);
                debug!(percent = self.preview_scale, "Set preview scale");
                return Ok(());
            }
            Transform::RotateClockwise90 => rotate_clockwise_90(working),
            Transform::FlipHorizontal => flip_horizontal(working),
            Transform::FlipVertical => flip_vertical(working),
        };

        debug!(
            ?transform,
            width = next.width,
            height = next.height,
            "Committed transform"
        );

        if let Some(previous) = self.working.replace(next) {
            self.history.commit(previous);
        }
        Ok(())
    }

    pub fn rotate(&mut self) -> EditResult<()> {
        self.apply_transform(Transform::RotateClockwise90)
    }

    pub fn flip_horizontal(&mut self) -> EditResult<()> {
        self.apply_transform(Transform::FlipHorizontal)
    }

    pub fn flip_vertical(&mut self) -> EditResult<()> {
        self.apply_transform(Transform::FlipVertical)
    }

    pub fn set_preview_scale(&mut self, percent: u32) -> EditResult<()> {
        self.apply_transform(Transform::Resize(percent))
    }

    /// Restore the most recent history snapshot.
    ///
    /// The current working image moves onto the redo stack.
    pub fn undo(&mut self) -> EditResult<()> {
        let Some(previous) = self.history.pop_undo() else {
            debug!("Undo requested with empty history");
            return Err(EditError::NothingToUndo);
        };
        if let Some(current) = self.working.replace(previous) {
            self.history.push_redo(current);
        }
        debug!(
            undo = self.history.undo_count(),
            redo = self.history.redo_count(),
            "Undo"
        );
        Ok(())
    }

    /// Re-apply the most recently undone state.
    ///
    /// The current working image moves back onto the history.
    pub fn redo(&mut self) -> EditResult<()> {
        let Some(next) = self.history.pop_redo() else {
            debug!("Redo requested with empty redo stack");
            return Err(EditError::NothingToRedo);
        };
        if let Some(current) = self.working.replace(next) {
            self.history.push_undo(current);
        }
        debug!(
            undo = self.history.undo_count(),
            redo = self.history.redo_count(),
            "Redo"
        );
        Ok(())
    }

    /// The working image scaled by the current preview scale.
    pub fn preview(&self) -> EditResult<PixelBuffer> {
        let working = self.working.as_ref().ok_or(EditError::NoActiveImage)?;
        Ok(decode::scale_by_percent(
            working,
            self.preview_scale,
            self.config.preview_filter,
        )?)
    }

    /// Encode the working image as PNG.
    pub fn export_png(&self) -> EditResult<Vec<u8>> {
        let working = self.working.as_ref().ok_or(EditError::NoActiveImage)?;
        Ok(encode::encode_buffer(working)?)
    }

    /// Save the working image as PNG at `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> EditResult<()> {
        let working = self.working.as_ref().ok_or(EditError::NoActiveImage)?;
        encode::save_png(working, path)?;
        Ok(())
    }

    pub fn state(&self) -> SessionState {
        match (&self.original, &self.working) {
            (None, _) => SessionState::Empty,
            (Some(_), None) => SessionState::Loaded,
            (Some(_), Some(_)) => SessionState::Editing,
        }
    }

    pub fn controls(&self) -> Controls {
        let state = self.state();
        let editing = state == SessionState::Editing;
        Controls {
            crop: state != SessionState::Empty,
            resize: editing,
            rotate: editing,
            flip: editing,
            save: editing,
            undo: self.history.can_undo(),
            redo: self.history.can_redo(),
        }
    }

    pub fn original(&self) -> Option<&PixelBuffer> {
        self.original.as_ref()
    }

    /// The loaded image fitted to the canvas.
    pub fn display(&self) -> Option<&PixelBuffer> {
        self.display.as_ref()
    }

    /// Display-to-source scale of the loaded image.
    pub fn scale(&self) -> Option<ScaleFactor> {
        self.scale
    }

    pub fn current_working(&self) -> Option<&PixelBuffer> {
        self.working.as_ref()
    }

    pub fn preview_scale(&self) -> u32 {
        self.preview_scale
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_len(&self) -> usize {
        self.history.undo_count()
    }

    pub fn redo_len(&self) -> usize {
        self.history.redo_count()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
