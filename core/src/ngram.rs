//! Character-level n-gram model for whole-word completion.
//!
//! The model is trained once from a corpus blob and is read-only afterwards,
//! so a trained model can be shared between sessions behind an `Arc`.
use crate::candidate::Candidate;
use crate::error::{Error, Result};
use crate::trie::TrieNode;
use crate::utils;
use ahash::AHashMap;
use std::collections::BTreeSet;
use tracing::debug;

/// Left-pad sentinel, repeated `n-1` times before each word.
pub const PAD: char = '~';

/// Word terminator sentinel, appended once after each word.
pub const END: char = '$';

/// Probability substituted for a context never observed during training.
pub const SMOOTHING_FLOOR: f64 = 1e-6;

/// Character n-gram model over padded words.
///
/// Every training word is padded as `PAD * (n-1) + word + END` and a window
/// of `n` characters is slid across it: the first `n-1` characters form the
/// context, the last one is the predicted character.
///
/// # Invariants
/// - `n` is always >= 2
/// - for every context `c`, `context_counts[c]` equals the sum of the
///   `ngram_counts[c]` row
/// - the model is never mutated after `train` returns
#[derive(Debug, Clone)]
pub struct NGramModel {
    /// Order of the model (context length is `n - 1`)
    n: usize,

    /// context -> next character -> occurrences
    ngram_counts: AHashMap<String, AHashMap<char, u32>>,

    /// context -> total occurrences over all next characters
    context_counts: AHashMap<String, u32>,

    /// Every character seen in a padded word, sentinels included
    vocab: BTreeSet<char>,

    /// Distinct lowercase word tokens of the corpus
    words: BTreeSet<String>,

    /// Prefix index over `words`
    index: TrieNode,
}

impl NGramModel {
    /// Train a model of order `n` on a corpus blob.
    ///
    /// Tokenization lowercases the corpus and keeps maximal runs of word
    /// characters (letters, digits, underscore). Training is a single
    /// deterministic pass.
    ///
    /// # Errors
    /// Returns `Error::InvalidOrder` if `n < 2`.
    pub fn train(corpus: &str, n: usize) -> Result<Self> {
        if n < 2 {
            return Err(Error::InvalidOrder { order: n });
        }

        let mut model = Self {
            n,
            ngram_counts: AHashMap::new(),
            context_counts: AHashMap::new(),
            vocab: BTreeSet::new(),
            words: BTreeSet::new(),
            index: TrieNode::new(),
        };

        let tokens = utils::tokenize_words(corpus);
        for token in &tokens {
            model.add_word(token);
        }
        for word in &model.words {
            model.index.insert(word);
        }

        debug!(
            order = n,
            tokens = tokens.len(),
            words = model.words.len(),
            contexts = model.context_counts.len(),
            vocab = model.vocab.len(),
            "trained n-gram model"
        );
        Ok(model)
    }

    fn add_word(&mut self, word: &str) {
        self.words.insert(word.to_string());

        let padded = self.pad(word);
        self.vocab.extend(padded.iter().copied());

        for window in padded.windows(self.n) {
            let context: String = window[..self.n - 1].iter().collect();
            let next_char = window[self.n - 1];
            *self
                .ngram_counts
                .entry(context.clone())
                .or_default()
                .entry(next_char)
                .or_insert(0) += 1;
            *self.context_counts.entry(context).or_insert(0) += 1;
        }
    }

    /// `PAD * (n-1) + word + END` as a character vector.
    fn pad(&self, word: &str) -> Vec<char> {
        let mut padded = Vec::with_capacity(self.n + word.len());
        padded.extend(std::iter::repeat(PAD).take(self.n - 1));
        padded.extend(word.chars());
        padded.push(END);
        padded
    }

    /// Order `n` of the model.
    pub fn order(&self) -> usize {
        self.n
    }

    /// Total observations of `context`, 0 if never seen.
    pub fn context_count(&self, context: &str) -> u32 {
        self.context_counts.get(context).copied().unwrap_or(0)
    }

    /// Observations of `next_char` following `context`, 0 if never seen.
    pub fn ngram_count(&self, context: &str, next_char: char) -> u32 {
        self.ngram_counts
            .get(context)
            .and_then(|row| row.get(&next_char))
            .copied()
            .unwrap_or(0)
    }

    /// Iterate over every observed context with its next-character counts.
    pub fn contexts(&self) -> impl Iterator<Item = (&str, &AHashMap<char, u32>)> {
        self.ngram_counts.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Characters seen during training, sentinels included.
    pub fn vocabulary(&self) -> &BTreeSet<char> {
        &self.vocab
    }

    /// Distinct lowercase words of the training corpus.
    pub fn known_words(&self) -> &BTreeSet<String> {
        &self.words
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Probability of `word` as the product of its per-position conditional
    /// probabilities along the padded form.
    ///
    /// A context never seen in training contributes `SMOOTHING_FLOOR`. A seen
    /// context followed by an unseen character contributes its raw relative
    /// frequency, which is 0. Longer words accumulate more factors and score
    /// lower; this matches how the counts were collected.
    pub fn word_probability(&self, word: &str) -> f64 {
        let padded = self.pad(word);
        let mut context = String::with_capacity(self.n);
        let mut prob = 1.0f64;

        for window in padded.windows(self.n) {
            context.clear();
            context.extend(&window[..self.n - 1]);
            let next_char = window[self.n - 1];

            let context_count = self.context_count(&context);
            if context_count == 0 {
                prob *= SMOOTHING_FLOOR;
            } else {
                let char_count = self.ngram_count(&context, next_char);
                prob *= char_count as f64 / context_count as f64;
            }
        }
        prob
    }

    /// Rank the known words starting with `prefix` and keep the best `k`.
    ///
    /// Matching is an exact, case-sensitive prefix test; callers lowercase the
    /// prefix themselves when they want case-insensitive completion. Equal
    /// scores keep the words' ascending text order.
    pub fn predict_top_candidates(&self, prefix: &str, k: usize) -> Vec<Candidate> {
        if k == 0 {
            return Vec::new();
        }

        let mut scored: Vec<Candidate> = self
            .index
            .words_with_prefix(prefix)
            .into_iter()
            .map(|w| Candidate::new(w, self.word_probability(w)))
            .collect();

        // stable sort: ties stay in the trie's ascending order
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(k);
        scored
    }

    /// Top `k` known words starting with `prefix`, best first.
    ///
    /// An empty prefix ranks the whole vocabulary. No match yields an empty
    /// vector.
    pub fn predict_top_words(&self, prefix: &str, k: usize) -> Vec<String> {
        self.predict_top_candidates(prefix, k)
            .into_iter()
            .map(|c| c.text)
            .collect()
    }

    /// Single best completion for `prefix`, or `None` if nothing matches.
    pub fn generate_word(&self, prefix: &str) -> Option<String> {
        self.predict_top_candidates(prefix, 1)
            .into_iter()
            .next()
            .map(|c| c.text)
    }
}
