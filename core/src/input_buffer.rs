//! Text buffer with cursor tracking for predictive input.
//!
//! The buffer holds everything typed so far and the cursor position inside
//! it. The "current word" is the run of non-whitespace characters that ends
//! at the cursor; it is what suggestions are computed for and what an
//! accepted suggestion replaces.
//!
//! Internally the cursor is a byte offset so slicing stays cheap. Anything
//! published outside the crate uses character indices instead
//! (`char_cursor`, `current_word_char_bounds`).

use std::ops::Range;

/// Typed text and cursor position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
    cursor: usize, // Byte offset, not char offset
}

impl InputBuffer {
    /// Create a new empty input buffer.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
        }
    }

    /// Get the typed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the cursor position (byte offset).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Cursor position as a character index into `text`.
    pub fn char_cursor(&self) -> usize {
        self.text[..self.cursor].chars().count()
    }

    /// Insert a character at the cursor position.
    pub fn insert_char(&mut self, ch: char) {
        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Delete the character before the cursor (backspace).
    /// Returns the removed character, or `None` at the start of the buffer.
    pub fn delete_before(&mut self) -> Option<char> {
        if self.cursor == 0 {
            return None;
        }

        // Find the previous character boundary
        let mut prev = self.cursor;
        while prev > 0 {
            prev -= 1;
            if self.text.is_char_boundary(prev) {
                break;
            }
        }

        let removed = self.text.remove(prev);
        self.cursor = prev;
        Some(removed)
    }

    /// Move cursor to the left by one character.
    /// Returns true if cursor moved.
    pub fn move_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }

        // Find the previous character boundary
        let mut prev = self.cursor;
        while prev > 0 {
            prev -= 1;
            if self.text.is_char_boundary(prev) {
                self.cursor = prev;
                return true;
            }
        }
        false
    }

    /// Move cursor to the right by one character.
    /// Returns true if cursor moved.
    pub fn move_right(&mut self) -> bool {
        if self.cursor >= self.text.len() {
            return false;
        }

        // Find the next character boundary
        let mut next = self.cursor + 1;
        while next < self.text.len() && !self.text.is_char_boundary(next) {
            next += 1;
        }
        if next <= self.text.len() {
            self.cursor = next;
            true
        } else {
            false
        }
    }

    /// Byte range of the current word: the non-whitespace run ending at the
    /// cursor. Empty (`cursor..cursor`) when the cursor follows whitespace.
    pub fn current_word_bounds(&self) -> Range<usize> {
        let before = &self.text[..self.cursor];
        let start = before
            .char_indices()
            .rev()
            .find(|(_, ch)| ch.is_whitespace())
            .map(|(i, ch)| i + ch.len_utf8())
            .unwrap_or(0);
        start..self.cursor
    }

    /// `current_word_bounds` expressed in character indices.
    pub fn current_word_char_bounds(&self) -> Range<usize> {
        let bytes = self.current_word_bounds();
        let start = self.text[..bytes.start].chars().count();
        start..start + self.text[bytes].chars().count()
    }

    /// The current word (see `current_word_bounds`).
    pub fn current_word(&self) -> &str {
        &self.text[self.current_word_bounds()]
    }

    /// Replace the current word with `word` and put the cursor right after it.
    /// Text after the cursor is kept.
    pub fn replace_current_word(&mut self, word: &str) {
        let range = self.current_word_bounds();
        let start = range.start;
        self.text.replace_range(range, word);
        self.cursor = start + word.len();
    }

    /// Number of whitespace-delimited words in the buffer.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

impl Default for InputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(text: &str) -> InputBuffer {
        let mut b = InputBuffer::new();
        for ch in text.chars() {
            b.insert_char(ch);
        }
        b
    }

    fn move_left_by(b: &mut InputBuffer, steps: usize) {
        for _ in 0..steps {
            assert!(b.move_left());
        }
    }

    #[test]
    fn test_insert_and_delete() {
        let mut b = InputBuffer::new();
        b.insert_char('h');
        b.insert_char('i');
        assert_eq!(b.text(), "hi");
        assert_eq!(b.cursor(), 2);

        assert_eq!(b.delete_before(), Some('i'));
        assert_eq!(b.text(), "h");
        assert_eq!(b.cursor(), 1);

        assert_eq!(b.delete_before(), Some('h'));
        assert_eq!(b.delete_before(), None);
        assert!(b.text().is_empty());
    }

    #[test]
    fn test_cursor_movement_bounds() {
        let mut b = buffer("ab");
        assert!(!b.move_right());
        assert!(b.move_left());
        assert!(b.move_left());
        assert!(!b.move_left());
        assert_eq!(b.cursor(), 0);

        b.insert_char('x');
        assert_eq!(b.text(), "xab");
        assert_eq!(b.cursor(), 1);
    }

    #[test]
    fn test_current_word_at_end() {
        let b = buffer("sleep is ess");
        assert_eq!(b.current_word_bounds(), 9..12);
        assert_eq!(b.current_word(), "ess");
    }

    #[test]
    fn test_current_word_after_space() {
        let b = buffer("sleep ");
        assert_eq!(b.current_word(), "");
        assert_eq!(b.current_word_bounds(), 6..6);
    }

    #[test]
    fn test_current_word_mid_buffer() {
        let mut b = buffer("sleep well");
        move_left_by(&mut b, 7);
        assert_eq!(b.current_word(), "sle");

        move_left_by(&mut b, 3);
        assert_eq!(b.current_word(), "");
    }

    #[test]
    fn test_replace_current_word() {
        let mut b = buffer("good sl");
        b.replace_current_word("sleep");
        assert_eq!(b.text(), "good sleep");
        assert_eq!(b.cursor(), 10);
    }

    #[test]
    fn test_replace_keeps_text_after_cursor() {
        let mut b = buffer("sl well");
        move_left_by(&mut b, 5);
        b.replace_current_word("sleep");
        assert_eq!(b.text(), "sleep well");
        assert_eq!(b.cursor(), 5);
    }

    #[test]
    fn test_word_count() {
        assert_eq!(buffer("").word_count(), 0);
        assert_eq!(buffer("  a  b c ").word_count(), 3);
    }

    #[test]
    fn test_char_positions_with_multibyte_word() {
        let mut b = buffer("ca");
        b.replace_current_word("café");
        assert_eq!(b.text(), "café");
        assert_eq!(b.cursor(), 5);
        assert_eq!(b.char_cursor(), 4);
        assert_eq!(b.current_word_char_bounds(), 0..4);

        b.insert_char(' ');
        move_left_by(&mut b, 2);
        assert_eq!(b.char_cursor(), 3);
        assert_eq!(b.current_word(), "caf");
        assert_eq!(b.current_word_char_bounds(), 0..3);
    }

    #[test]
    fn test_char_bounds_after_multibyte_prefix() {
        let b = buffer("né sl");
        assert_eq!(b.current_word_bounds(), 4..6);
        assert_eq!(b.current_word_char_bounds(), 3..5);
    }
}
