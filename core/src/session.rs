//! Predictive input session.
//!
//! The `InputSession` struct combines the text buffer, the suggestion list
//! and the typing statistics into one state machine driven by key events.
//! The trained `NGramModel` provides the completions; the session owns all
//! mutable state and republishes a `ContentModel` after every event.

use crate::candidate::CandidateList;
use crate::context::ContentModel;
use crate::input_buffer::InputBuffer;
use crate::key_event::{KeyEvent, KeyResult};
use crate::ngram::NGramModel;
use crate::stats::{StatsSnapshot, TypingStats};
use crate::Config;
use std::ops::Range;
use std::sync::Arc;
use tracing::trace;

/// Input session state.
///
/// This struct manages the state across key events. It contains:
/// - Text buffer and cursor
/// - Suggestion list with the highlighted index
/// - Typing statistics against a fixed reference text
///
/// The session is separate from the model: the model is shared read-only,
/// the session is exclusively owned by whoever feeds it events.
#[derive(Debug, Clone)]
pub struct InputSession {
    /// Trained completion model
    model: Arc<NGramModel>,

    /// Typed text and cursor
    input_buffer: InputBuffer,

    /// Suggestions for the current word
    candidates: CandidateList,

    /// Live counters
    stats: TypingStats,

    /// Last tuple emitted by a statistics recomputation
    last_stats: StatsSnapshot,

    /// Text whose words the user is expected to type
    reference_text: String,

    /// Whitespace-delimited words of `reference_text`
    reference_words: Vec<String>,

    /// Number of suggestions requested from the model
    suggestion_limit: usize,

    /// Lowercase the current word before asking the model
    lowercase_prefix: bool,

    /// Snapshot for the renderer, rebuilt after every event
    context: ContentModel,
}

impl InputSession {
    /// Create a session with default settings.
    pub fn new(model: Arc<NGramModel>, reference_text: impl Into<String>) -> Self {
        Self::with_config(model, reference_text, &Config::default())
    }

    /// Create a session using the suggestion settings from `config`.
    pub fn with_config(
        model: Arc<NGramModel>,
        reference_text: impl Into<String>,
        config: &Config,
    ) -> Self {
        let reference_text = reference_text.into();
        let reference_words = reference_text
            .split_whitespace()
            .map(str::to_string)
            .collect();
        Self {
            model,
            input_buffer: InputBuffer::new(),
            candidates: CandidateList::new(),
            stats: TypingStats::new(),
            last_stats: StatsSnapshot::default(),
            reference_text,
            reference_words,
            suggestion_limit: config.suggestion_limit,
            lowercase_prefix: config.lowercase_prefix,
            context: ContentModel::new(),
        }
    }

    /// Process a key event and update the session state.
    ///
    /// After calling this, the renderer should read `content()`. Returns
    /// `KeyResult::Exit` only for `Escape`; every other event, including ones
    /// the session does not understand, returns `KeyResult::Continue`.
    pub fn handle(&mut self, key: KeyEvent) -> KeyResult {
        trace!(?key, cursor = self.input_buffer.cursor(), "handle key");

        match key {
            KeyEvent::Space | KeyEvent::Char(' ') => {
                self.input_buffer.insert_char(' ');
                self.candidates.clear();
                self.compute_stats();
            }
            KeyEvent::Char(ch) if key.is_printable_char() => {
                self.stats.record_letter();
                self.input_buffer.insert_char(ch);
                self.refresh_suggestions();
                self.compute_stats();
            }
            KeyEvent::Resize => {}
            KeyEvent::Escape => return KeyResult::Exit,
            KeyEvent::Tab => {
                self.stats.record_tab();
                self.candidates.select_next();
            }
            KeyEvent::Enter => {
                if let Some(selected) = self.candidates.selected_candidate() {
                    let word = selected.text.clone();
                    self.input_buffer.replace_current_word(&word);
                    self.refresh_suggestions();
                    self.compute_stats();
                }
            }
            KeyEvent::Backspace => {
                if let Some(removed) = self.input_buffer.delete_before() {
                    if removed != ' ' {
                        self.stats.remove_letter();
                    }
                    self.refresh_suggestions();
                    self.compute_stats();
                }
            }
            KeyEvent::Left => {
                if self.input_buffer.move_left() {
                    self.refresh_suggestions();
                }
            }
            KeyEvent::Right => {
                if self.input_buffer.move_right() {
                    self.refresh_suggestions();
                }
            }
            KeyEvent::Char(_) | KeyEvent::Unknown(_) => {}
        }

        self.sync_to_context();
        KeyResult::Continue
    }

    /// Ask the model for completions of the current word.
    fn refresh_suggestions(&mut self) {
        let word = self.input_buffer.current_word();
        let prefix = if self.lowercase_prefix {
            word.to_lowercase()
        } else {
            word.to_string()
        };
        let candidates = self
            .model
            .predict_top_candidates(&prefix, self.suggestion_limit);
        trace!(prefix = %prefix, count = candidates.len(), "refreshed suggestions");
        self.candidates.set_candidates(candidates);
    }

    fn compute_stats(&mut self) {
        self.last_stats = self.stats.compute(
            self.input_buffer.word_count(),
            self.input_buffer.current_word(),
            &self.reference_words,
        );
    }

    /// Rebuild the renderer snapshot from the session state.
    fn sync_to_context(&mut self) {
        self.context = ContentModel {
            buffer: self.input_buffer.text().to_string(),
            cursor: self.input_buffer.char_cursor(),
            suggestions: self.candidates.texts(),
            selected_index: self.candidates.cursor(),
            stats: self.last_stats,
        };
    }

    /// Snapshot for the renderer.
    pub fn content(&self) -> &ContentModel {
        &self.context
    }

    pub fn model(&self) -> &Arc<NGramModel> {
        &self.model
    }

    pub fn buffer(&self) -> &str {
        self.input_buffer.text()
    }

    /// Cursor position as a character index into `buffer()`.
    pub fn cursor(&self) -> usize {
        self.input_buffer.char_cursor()
    }

    pub fn suggestions(&self) -> &CandidateList {
        &self.candidates
    }

    pub fn selected_index(&self) -> usize {
        self.candidates.cursor()
    }

    /// Live counters (the snapshot in `content()` only changes on edits).
    pub fn stats(&self) -> &TypingStats {
        &self.stats
    }

    pub fn current_word(&self) -> &str {
        self.input_buffer.current_word()
    }

    /// Character range of the current word within `buffer()`.
    pub fn current_word_bounds(&self) -> Range<usize> {
        self.input_buffer.current_word_char_bounds()
    }

    pub fn reference_text(&self) -> &str {
        &self.reference_text
    }

    pub fn reference_words(&self) -> &[String] {
        &self.reference_words
    }
}
