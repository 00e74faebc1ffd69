//! Read-only render view of a round.
//!
//! Renderers key tiles by `id` and draw `letter`; nothing here can mutate the
//! round. The snapshot serializes to JSON for renderers outside this process.

use serde::Serialize;

use crate::tiles::Tile;
use crate::types::Phase;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WordSnapshot {
    pub tiles: Vec<Tile>,
    pub blinking: bool,
    /// The tiles currently spell the word.
    pub solved: bool,
    /// The word has been counted in `solved_count`. A word dealt already
    /// spelled is `solved` but not `credited` until a move leaves it spelled.
    pub credited: bool,
}

impl WordSnapshot {
    pub fn letters(&self) -> String {
        self.tiles.iter().map(|t| t.letter).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundSnapshot {
    pub words: Vec<WordSnapshot>,
    pub solved_count: usize,
    pub word_count: usize,
    pub is_complete: bool,
    pub phase: Phase,
    pub round_id: u32,
    pub seed: u32,
}

impl Default for RoundSnapshot {
    fn default() -> Self {
        Self {
            words: Vec::new(),
            solved_count: 0,
            word_count: 0,
            is_complete: false,
            phase: Phase::Playing,
            round_id: 0,
            seed: 0,
        }
    }
}
