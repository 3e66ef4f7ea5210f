//! Error type for editing operations.

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;

/// Errors returned by [`EditSession`](super::EditSession) operations.
///
/// A failed operation never leaves the session half-updated.
#[derive(Debug, Error)]
pub enum EditError {
    /// The selection covers no pixels once mapped and clamped.
    #[error("Selection is empty after mapping ({width}x{height} pixels)")]
    InvalidSelection { width: u64, height: u64 },

    /// There is no image to operate on yet.
    #[error("No active image: load an image and crop a region first")]
    NoActiveImage,

    /// The undo stack is empty.
    #[error("Nothing to undo")]
    NothingToUndo,

    /// The redo stack is empty.
    #[error("Nothing to redo")]
    NothingToRedo,

    /// The codec could not produce an image.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The working image could not be written.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

impl EditError {
    /// True for expected conditions a UI can ignore quietly
    /// (an exhausted undo or redo stack).
    pub fn is_benign(&self) -> bool {
        matches!(self, EditError::NothingToUndo | EditError::NothingToRedo)
    }
}

/// Result type for editing operations.
pub type EditResult<T> = Result<T, EditError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_benign_errors() {
        assert!(EditError::NothingToUndo.is_benign());
        assert!(EditError::NothingToRedo.is_benign());
        assert!(!EditError::NoActiveImage.is_benign());
        assert!(!EditError::InvalidSelection {
            width: 0,
            height: 3
        }
        .is_benign());
    }

    #[test]
    fn test_error_display() {
        let err = EditError::InvalidSelection {
            width: 0,
            height: 12,
        };
        assert_eq!(
            err.to_string(),
            "Selection is empty after mapping (0x12 pixels)"
        );

        let err = EditError::from(DecodeError::InvalidFormat);
        assert_eq!(err.to_string(), "Invalid or unsupported image format");
    }
}
