//! The editing session: crop, transforms and undo/redo over one loaded image.
//!
//! # States
//!
//! ```text
//! Empty ──load──► Loaded ──crop──► Editing ◄─┐ crop, rotate, flip,
//!                   ▲                 │      │ resize, undo, redo
//!                   └──────load───────┘──────┘
//! ```
//!
//! Every operation runs to completion synchronously. A session owns all of
//! its buffers; share one across threads by wrapping the whole session in a
//! single `Mutex`.

mod editor;
mod error;
mod history;

pub use editor::EditSession;
pub use error::{EditError, EditResult};
pub use history::History;

use serde::{Deserialize, Serialize};

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    /// Nothing loaded.
    Empty,
    /// An image is loaded but no region has been cropped yet.
    Loaded,
    /// A working image exists and can be transformed.
    Editing,
}

impl SessionState {
    pub fn as_str(self) -> &'static str {
        match self {
            SessionState::Empty => "empty",
            SessionState::Loaded => "loaded",
            SessionState::Editing => "editing",
        }
    }
}

/// An edit applied to the working image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Preview-only scale in percent; never recorded in history.
    Resize(u32),
    RotateClockwise90,
    FlipHorizontal,
    FlipVertical,
}

/// Which editor controls are usable, derived from the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Controls {
    pub crop: bool,
    pub resize: bool,
    pub rotate: bool,
    pub flip: bool,
    pub save: bool,
    pub undo: bool,
    pub redo: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_names() {
        assert_eq!(SessionState::Empty.as_str(), "empty");
        assert_eq!(SessionState::Loaded.as_str(), "loaded");
        assert_eq!(SessionState::Editing.as_str(), "editing");
    }
}
