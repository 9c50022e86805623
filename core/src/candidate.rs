//! Candidate types for word completion.
//!
//! This module provides:
//! - `Candidate`: A single completion with its model score
//! - `CandidateList`: Ordered suggestion list with a cycling selection cursor

use serde::{Deserialize, Serialize};

/// A single word completion with an associated score.
///
/// Scores are raw word probabilities in `(0, 1]`; higher is better. They are
/// kept as `f64` because long padded words multiply many small factors and
/// would underflow in `f32`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub text: String,
    pub score: f64,
}

impl Candidate {
    pub fn new<T: Into<String>>(text: T, score: f64) -> Self {
        Candidate {
            text: text.into(),
            score,
        }
    }
}

/// Ordered list of suggestions with a selection cursor.
///
/// The cursor is always 0 when the list is empty or freshly replaced.
#[derive(Debug, Clone, Default)]
pub struct CandidateList {
    /// All available candidates, best first
    candidates: Vec<Candidate>,

    /// Index of the highlighted candidate
    cursor: usize,
}

impl CandidateList {
    /// Create a new empty candidate list.
    pub fn new() -> Self {
        Self {
            candidates: Vec::new(),
            cursor: 0,
        }
    }

    /// Replace the candidates and reset the cursor.
    pub fn set_candidates(&mut self, candidates: Vec<Candidate>) {
        self.candidates = candidates;
        self.cursor = 0;
    }

    /// Candidate texts in display order.
    pub fn texts(&self) -> Vec<String> {
        self.candidates.iter().map(|c| c.text.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Index of the highlighted candidate (0 when empty).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Get the currently highlighted candidate, if the cursor is valid.
    pub fn selected_candidate(&self) -> Option<&Candidate> {
        self.candidates.get(self.cursor)
    }

    /// Advance the cursor by one, wrapping to the first candidate.
    /// Returns true if the list was non-empty.
    pub fn select_next(&mut self) -> bool {
        if self.candidates.is_empty() {
            return false;
        }
        self.cursor = (self.cursor + 1) % self.candidates.len();
        true
    }

    /// Clear the candidate list.
    pub fn clear(&mut self) {
        self.candidates.clear();
        self.cursor = 0;
    }
}
