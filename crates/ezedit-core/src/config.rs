//! Editor configuration.

use serde::{Deserialize, Serialize};

use crate::decode::FilterType;

/// Settings for an [`EditSession`](crate::session::EditSession).
///
/// Every field has a default, so partial configs deserialize cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Width of the canvas the loaded image is fitted into
    pub canvas_width: u32,
    /// Height of the canvas the loaded image is fitted into
    pub canvas_height: u32,
    /// Smallest accepted preview scale, in percent
    pub min_preview_scale: u32,
    /// Largest accepted preview scale, in percent
    pub max_preview_scale: u32,
    /// Filter used for the display copy and the resize preview
    pub preview_filter: FilterType,
    /// Maximum number of undo snapshots kept; `None` keeps all of them
    pub history_limit: Option<usize>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_width: 500,
            canvas_height: 450,
            min_preview_scale: 50,
            max_preview_scale: 200,
            preview_filter: FilterType::Bilinear,
            history_limit: None,
        }
    }
}

impl EditorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp a requested preview scale into the configured range.
    pub fn clamp_preview_scale(&self, percent: u32) -> u32 {
        let lo = self.min_preview_scale.max(1);
        let hi = self.max_preview_scale.max(lo);
        percent.clamp(lo, hi)
    }

    /// Canvas size with zero dimensions replaced by 1.
    pub(crate) fn canvas(&self) -> (u32, u32) {
        (self.canvas_width.max(1), self.canvas_height.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::new();
        assert_eq!((config.canvas_width, config.canvas_height), (500, 450));
        assert_eq!(config.min_preview_scale, 50);
        assert_eq!(config.max_preview_scale, 200);
        assert_eq!(config.history_limit, None);
    }

    #[test]
    fn test_clamp_preview_scale() {
        let config = EditorConfig::default();
        assert_eq!(config.clamp_preview_scale(10), 50);
        assert_eq!(config.clamp_preview_scale(120), 120);
        assert_eq!(config.clamp_preview_scale(500), 200);
    }

    #[test]
    fn test_clamp_preview_scale_inverted_range() {
        let mut config = EditorConfig::default();
        config.min_preview_scale = 150;
        config.max_preview_scale = 100;
        assert_eq!(config.clamp_preview_scale(10), 150);
        assert_eq!(config.clamp_preview_scale(300), 150);
    }

    #[test]
    fn test_zero_canvas_is_sanitized() {
        let mut config = EditorConfig::default();
        config.canvas_width = 0;
        assert_eq!(config.canvas(), (1, 450));
    }
}
