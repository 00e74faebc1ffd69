use thiserror::Error;

use crate::types::MAX_WORD_LEN;

/// Configuration errors raised while building a vocabulary or generator.
///
/// Nothing in a running round can fail; every error here is caught before the
/// first puzzle is dealt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("vocabulary is empty")]
    EmptyVocabulary,

    #[error("invalid vocabulary word {word:?}: expected 1-{} uppercase ASCII letters", MAX_WORD_LEN)]
    InvalidWord { word: String },

    #[error("a round needs at least one word")]
    EmptyRound,

    #[error("vocabulary has {available} distinct words, round needs {requested}")]
    VocabularyExhausted { requested: usize, available: usize },
}
