//! Vocabulary - the pool of candidate words a round draws from.

use std::collections::HashSet;

use crate::error::PuzzleError;
use crate::types::MAX_WORD_LEN;

/// Stock word pool.
pub const BUILTIN_WORDS: [&str; 13] = [
    "PYTHON",
    "JAVASCRIPT",
    "REACT",
    "HTML",
    "CSS",
    "NODE",
    "GITHUB",
    "TAILWIND",
    "BOOTSTRAP",
    "VITE",
    "APPLE",
    "BANANA",
    "ASSESS",
];

/// Read-only list of uppercase candidate words.
///
/// Duplicates are allowed; the generator is responsible for dealing distinct
/// words within a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<String>,
}

impl Vocabulary {
    /// Build a vocabulary, rejecting empty pools and malformed words.
    pub fn new<I, S>(words: I) -> Result<Self, PuzzleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return Err(PuzzleError::EmptyVocabulary);
        }
        if let Some(bad) = words.iter().find(|w| !is_valid_word(w)) {
            return Err(PuzzleError::InvalidWord { word: bad.clone() });
        }
        Ok(Self { words })
    }

    pub fn builtin() -> Self {
        Self {
            words: BUILTIN_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Parse a newline-separated word list.
    ///
    /// Blank lines and lines starting with `#` are skipped; words are trimmed
    /// and uppercased before validation.
    ///
    /// ```
    /// use word_unscramble_core::Vocabulary;
    ///
    /// let vocab = Vocabulary::from_word_list("# fruit\napple\n\n pear \n").unwrap();
    /// assert_eq!(vocab.words(), ["APPLE", "PEAR"]);
    /// ```
    pub fn from_word_list(text: &str) -> Result<Self, PuzzleError> {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_uppercase),
        )
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn distinct_count(&self) -> usize {
        self.words.iter().collect::<HashSet<_>>().len()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}

fn is_valid_word(word: &str) -> bool {
    !word.is_empty() && word.len() <= MAX_WORD_LEN && word.bytes().all(|b| b.is_ascii_uppercase())
}
