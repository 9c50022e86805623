//! Typing statistics measured against a reference text.
//!
//! `TypingStats` holds the live counters. `compute` folds the current word
//! into the running accuracy and returns the `StatsSnapshot` shown to the
//! user. It is called once per qualifying edit, not once per finished word,
//! so `completed_word_count` really counts recomputations.

use serde::{Deserialize, Serialize};

/// Statistics tuple emitted after each recomputation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// Printable characters typed, minus non-space characters deleted
    pub letters_typed: i64,
    /// Tab presses so far
    pub tab_presses: u64,
    /// Running mean of per-recomputation letter accuracy
    pub running_letter_accuracy: f64,
    /// `tab_presses` divided by the number of words in the buffer (min 1)
    pub avg_tabs_per_word: f64,
}

/// Live typing counters for one session.
#[derive(Debug, Clone, Default)]
pub struct TypingStats {
    letters_typed: i64,
    tab_presses: u64,
    running_letter_accuracy: f64,
    completed_word_count: usize,
}

impl TypingStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn letters_typed(&self) -> i64 {
        self.letters_typed
    }

    pub fn tab_presses(&self) -> u64 {
        self.tab_presses
    }

    pub fn running_letter_accuracy(&self) -> f64 {
        self.running_letter_accuracy
    }

    pub fn completed_word_count(&self) -> usize {
        self.completed_word_count
    }

    pub fn record_letter(&mut self) {
        self.letters_typed += 1;
    }

    /// Undo one letter after a non-space character was deleted.
    /// May go below zero when accepted suggestions are deleted.
    pub fn remove_letter(&mut self) {
        self.letters_typed -= 1;
    }

    pub fn record_tab(&mut self) {
        self.tab_presses += 1;
    }

    /// Recompute statistics after an edit.
    ///
    /// - `buffer_words`: whitespace-delimited words currently in the buffer
    /// - `current_word`: the word ending at the cursor
    /// - `reference_words`: whitespace-delimited words of the reference text
    ///
    /// The target word is `reference_words[completed_word_count]` while the
    /// reference lasts, then the current word itself.
    pub fn compute(
        &mut self,
        buffer_words: usize,
        current_word: &str,
        reference_words: &[String],
    ) -> StatsSnapshot {
        let total_words = buffer_words.max(1);
        let avg_tabs_per_word = self.tab_presses as f64 / total_words as f64;

        let target_word = reference_words
            .get(self.completed_word_count)
            .map(String::as_str)
            .unwrap_or(current_word);
        let accuracy = letter_accuracy(current_word, target_word);

        let done = self.completed_word_count as f64;
        self.running_letter_accuracy =
            (self.running_letter_accuracy * done + accuracy) / (done + 1.0);
        self.completed_word_count += 1;

        StatsSnapshot {
            letters_typed: self.letters_typed,
            tab_presses: self.tab_presses,
            running_letter_accuracy: self.running_letter_accuracy,
            avg_tabs_per_word,
        }
    }
}

/// Length-overlap accuracy of `typed` against `target`.
///
/// `min(len(typed), len(target)) / len(target)`, or 0 for an empty target.
/// Only lengths are compared, not the characters themselves.
pub fn letter_accuracy(typed: &str, target: &str) -> f64 {
    let target_len = target.chars().count();
    if target_len == 0 {
        return 0.0;
    }
    let typed_len = typed.chars().count();
    typed_len.min(target_len) as f64 / target_len as f64
}
