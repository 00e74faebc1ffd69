//! Puzzle generation - picks a round's words and scrambles them.

use serde::Serialize;
use tracing::debug;

use crate::error::PuzzleError;
use crate::rng::{scramble, SimpleRng};
use crate::vocabulary::Vocabulary;

/// Shuffle attempts in strict mode before falling back to a rotation.
const MAX_RESHUFFLES: u32 = 64;

/// One word of a round as dealt by the generator.
///
/// `word` and `scrambled` never change after generation. `solved` is always
/// `false` here; the round tracks the live solved state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PuzzleEntry {
    pub word: String,
    pub scrambled: Vec<char>,
    pub solved: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Re-shuffle any word that scrambles back to itself.
    ///
    /// Words made of a single repeated letter cannot be disguised and are
    /// dealt as-is.
    pub reject_identity: bool,
}

/// Deals `count` distinct words per round from a vocabulary.
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    vocabulary: Vocabulary,
    count: usize,
    options: GeneratorOptions,
}

impl PuzzleGenerator {
    /// Fails when the vocabulary cannot supply `count` distinct words, so
    /// `generate` never spins looking for a word that does not exist.
    pub fn new(vocabulary: Vocabulary, count: usize) -> Result<Self, PuzzleError> {
        if count == 0 {
            return Err(PuzzleError::EmptyRound);
        }
        let available = vocabulary.distinct_count();
        if available < count {
            return Err(PuzzleError::VocabularyExhausted {
                requested: count,
                available,
            });
        }
        Ok(Self {
            vocabulary,
            count,
            options: GeneratorOptions::default(),
        })
    }

    pub fn with_options(mut self, options: GeneratorOptions) -> Self {
        self.options = options;
        self
    }

    /// Draw words uniformly (rejecting repeats) until `count` distinct words
    /// are selected, then scramble each in selection order.
    pub fn generate(&self, rng: &mut SimpleRng) -> Vec<PuzzleEntry> {
        let words = self.vocabulary.words();
        let mut selected: Vec<&str> = Vec::with_capacity(self.count);

        while selected.len() < self.count {
            let word = words[rng.next_range(words.len() as u32) as usize].as_str();
            if !selected.contains(&word) {
                selected.push(word);
            }
        }

        selected
            .into_iter()
            .map(|word| PuzzleEntry {
                word: word.to_string(),
                scrambled: self.scramble_word(word, rng),
                solved: false,
            })
            .collect()
    }

    fn scramble_word(&self, word: &str, rng: &mut SimpleRng) -> Vec<char> {
        let mut letters = scramble(word, rng);
        if !self.options.reject_identity || !has_distinct_letters(word) {
            return letters;
        }

        let mut attempts = 1;
        while spells(&letters, word) && attempts < MAX_RESHUFFLES {
            letters = scramble(word, rng);
            attempts += 1;
        }
        if spells(&letters, word) {
            // Rotating by one only preserves a word built from one letter.
            letters.rotate_left(1);
        }
        if attempts > 1 {
            debug!(word, attempts, "reshuffled identity scramble");
        }
        letters
    }
}

fn has_distinct_letters(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => chars.any(|c| c != first),
        None => false,
    }
}

fn spells(letters: &[char], word: &str) -> bool {
    letters.iter().copied().eq(word.chars())
}
