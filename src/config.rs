//! Runtime configuration read from the environment.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use crate::core::{GeneratorOptions, PuzzleGenerator, Round, Vocabulary};
use crate::types::WORD_COUNT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Seed for the first round; later rounds continue the same stream.
    pub seed: u32,
    pub word_count: usize,
    /// Reshuffle scrambles that come out identical to the word.
    pub strict: bool,
    /// Word list file (one word per line); the builtin pool when unset.
    pub words_path: Option<PathBuf>,
    pub log_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            word_count: WORD_COUNT,
            strict: false,
            words_path: None,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from `WORD_UNSCRAMBLE_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with an arbitrary variable source.
    /// Unparseable values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = var("WORD_UNSCRAMBLE_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);

        let word_count = var("WORD_UNSCRAMBLE_WORD_COUNT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(WORD_COUNT);

        let strict = var("WORD_UNSCRAMBLE_STRICT")
            .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true"))
            .unwrap_or(false);

        Self {
            seed,
            word_count,
            strict,
            words_path: var("WORD_UNSCRAMBLE_WORDS").map(PathBuf::from),
            log_path: var("WORD_UNSCRAMBLE_LOG_PATH").map(PathBuf::from),
        }
    }

    /// Load the configured word pool.
    pub fn vocabulary(&self) -> Result<Vocabulary> {
        let Some(path) = &self.words_path else {
            return Ok(Vocabulary::builtin());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read word list {}", path.display()))?;
        Vocabulary::from_word_list(&text)
            .with_context(|| format!("parse word list {}", path.display()))
    }

    pub fn generator(&self) -> Result<PuzzleGenerator> {
        let generator = PuzzleGenerator::new(self.vocabulary()?, self.word_count)
            .context("build puzzle generator")?;
        Ok(generator.with_options(GeneratorOptions {
            reject_identity: self.strict,
        }))
    }

    /// Deal the first round.
    pub fn round(&self) -> Result<Round> {
        Ok(Round::new(self.generator()?, self.seed))
    }
}

fn clock_seed() -> u32 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    (now.as_secs() as u32) ^ now.subsec_nanos()
}
