//! Tile state - identified letter tiles and the reorder operation.
//!
//! Each word of a round becomes an ordered run of tiles. A tile's id is fixed
//! when the round starts (letter plus its index in the scrambled sequence), so
//! collaborators can key on ids even when a word repeats letters.

use serde::Serialize;

use crate::puzzle::PuzzleEntry;
use crate::types::TileId;

/// A single letter instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Tile {
    pub letter: char,
    pub id: TileId,
}

/// Pair every scrambled letter with its `(letter, origin)` id.
pub fn tiles_from_scrambled(scrambled: &[char]) -> Vec<Tile> {
    scrambled
        .iter()
        .enumerate()
        .map(|(origin, &letter)| {
            debug_assert!(origin <= u8::MAX as usize);
            Tile {
                letter,
                id: TileId::new(letter, origin as u8),
            }
        })
        .collect()
}

/// Move the tile at `source` to `target`, shifting the tiles in between by
/// one. This is a single-element move, not a swap.
///
/// Returns `false` (and leaves `tiles` untouched) when either index is out of
/// range or the two are equal.
///
/// ```
/// use word_unscramble_core::tiles::{reorder, tiles_from_scrambled};
///
/// let mut tiles = tiles_from_scrambled(&['T', 'L', 'M', 'H']);
/// assert!(reorder(&mut tiles, 3, 0));
/// let letters: String = tiles.iter().map(|t| t.letter).collect();
/// assert_eq!(letters, "HTLM");
/// ```
pub fn reorder(tiles: &mut [Tile], source: usize, target: usize) -> bool {
    let len = tiles.len();
    if source >= len || target >= len || source == target {
        return false;
    }
    if source < target {
        tiles[source..=target].rotate_left(1);
    } else {
        tiles[target..=source].rotate_right(1);
    }
    true
}

/// Current position of the tile with `id`.
pub fn position_of(tiles: &[Tile], id: TileId) -> Option<usize> {
    tiles.iter().position(|t| t.id == id)
}

/// Mutable per-word state within a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordState {
    target: String,
    tiles: Vec<Tile>,
    blinking: bool,
    /// Whether this word has already counted toward the round's solved total.
    credited: bool,
    /// Bumped on every blink start; older expiry tickets no longer match.
    blink_generation: u32,
}

impl WordState {
    pub fn new(entry: &PuzzleEntry) -> Self {
        Self {
            target: entry.word.clone(),
            tiles: tiles_from_scrambled(&entry.scrambled),
            blinking: false,
            credited: false,
            blink_generation: 0,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn blinking(&self) -> bool {
        self.blinking
    }

    pub fn credited(&self) -> bool {
        self.credited
    }

    pub fn position_of(&self, id: TileId) -> Option<usize> {
        position_of(&self.tiles, id)
    }

    pub fn reorder(&mut self, source: usize, target: usize) -> bool {
        reorder(&mut self.tiles, source, target)
    }

    /// Resolve both ids to positions and move. Unknown ids are a no-op.
    pub fn reorder_by_id(&mut self, source: TileId, target: TileId) -> bool {
        match (self.position_of(source), self.position_of(target)) {
            (Some(from), Some(to)) => self.reorder(from, to),
            _ => false,
        }
    }

    /// Letters in their current order.
    pub fn spelled(&self) -> String {
        self.tiles.iter().map(|t| t.letter).collect()
    }

    /// Whether the current tile order spells the target word.
    pub fn is_solved(&self) -> bool {
        self.tiles.iter().map(|t| t.letter).eq(self.target.chars())
    }

    pub(crate) fn start_blink(&mut self) -> u32 {
        self.blinking = true;
        self.blink_generation = self.blink_generation.wrapping_add(1);
        self.blink_generation
    }

    /// Clear the blink if `generation` is the latest one handed out.
    pub(crate) fn expire_blink(&mut self, generation: u32) -> bool {
        if generation != self.blink_generation || !self.blinking {
            return false;
        }
        self.blinking = false;
        true
    }

    /// Mark the word as counted. Returns `false` if it already was.
    pub(crate) fn credit(&mut self) -> bool {
        !std::mem::replace(&mut self.credited, true)
    }
}
