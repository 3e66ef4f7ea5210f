//! Undo/redo stacks of image snapshots.
//!
//! Each entry is a complete, owned [`PixelBuffer`]. Nothing is shared with
//! the session's working image, so mutating the working image can never
//! change a stored snapshot.

use std::collections::VecDeque;

use crate::decode::PixelBuffer;

/// Linear edit history.
///
/// Both stacks are ordered oldest to newest. With a limit set, the oldest
/// undo snapshot is dropped once the stack grows past it.
#[derive(Debug, Clone, Default)]
pub struct History {
    undo_stack: VecDeque<PixelBuffer>,
    redo_stack: Vec<PixelBuffer>,
    limit: Option<usize>,
}

impl History {
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            limit,
        }
    }

    /// Record a snapshot for a new edit and discard the redo branch.
    pub fn commit(&mut self, snapshot: PixelBuffer) {
        self.push_undo(snapshot);
        self.redo_stack.clear();
    }

    /// Push onto the undo stack without touching the redo stack.
    pub fn push_undo(&mut self, snapshot: PixelBuffer) {
        self.undo_stack.push_back(snapshot);
        self.prune();
    }

    pub fn pop_undo(&mut self) -> Option<PixelBuffer> {
        self.undo_stack.pop_back()
    }

    pub fn push_redo(&mut self, snapshot: PixelBuffer) {
        self.redo_stack.push(snapshot);
    }

    pub fn pop_redo(&mut self) -> Option<PixelBuffer> {
        self.redo_stack.pop()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    /// Most recent undo snapshot.
    pub fn peek_undo(&self) -> Option<&PixelBuffer> {
        self.undo_stack.back()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    fn prune(&mut self) {
        if let Some(limit) = self.limit {
            while self.undo_stack.len() > limit {
                self.undo_stack.pop_front();
            }
        }
    }
}
