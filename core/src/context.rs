//! Content model handed to the renderer.
//!
//! The `ContentModel` struct is a plain data container with public fields.
//! After every `InputSession::handle()` call the renderer reads it to redraw
//! the suggestion, input and score panels. It never writes back; the only
//! thing a renderer sends to the session is the next key event.

use crate::stats::StatsSnapshot;
use serde::Serialize;

/// Snapshot of everything a renderer needs to draw.
///
/// # Fields
///
/// - `buffer`: full typed text
/// - `cursor`: cursor position within `buffer`, in characters
/// - `suggestions`: completions for the current word, best first
/// - `selected_index`: highlighted suggestion (0 when there are none)
/// - `stats`: the last statistics tuple emitted by a qualifying edit
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContentModel {
    pub buffer: String,
    pub cursor: usize,
    pub suggestions: Vec<String>,
    pub selected_index: usize,
    pub stats: StatsSnapshot,
}

impl ContentModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// The highlighted suggestion, if any.
    pub fn selected_suggestion(&self) -> Option<&str> {
        self.suggestions
            .get(self.selected_index)
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let ctx = ContentModel::new();
        assert_eq!(ctx.buffer, "");
        assert_eq!(ctx.cursor, 0);
        assert!(ctx.suggestions.is_empty());
        assert_eq!(ctx.selected_suggestion(), None);
        assert_eq!(ctx.stats, StatsSnapshot::default());
    }

    #[test]
    fn test_selected_suggestion() {
        let ctx = ContentModel {
            suggestions: vec!["sleep".into(), "sleepy".into()],
            selected_index: 1,
            ..ContentModel::default()
        };
        assert_eq!(ctx.selected_suggestion(), Some("sleepy"));
    }
}
