//! Core types module - shared data structures and constants
//!
//! This crate defines the small vocabulary of types that every other crate in the
//! workspace speaks: tile identities, round phases, the actions a collaborator may
//! request, and the tickets used to expire blink feedback.
//!
//! # Round Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `WORD_COUNT` | 5 | Words per round |
//! | `BLINK_MS` | 1000 | Highlight duration after a word is solved |
//! | `TICK_MS` | 16 | Fixed timestep of the terminal loop (~60 FPS) |
//! | `MAX_WORD_LEN` | 32 | Longest word a vocabulary may carry |
//!
//! # Examples
//!
//! ```
//! use word_unscramble_types::{RoundAction, TileId};
//!
//! let id = TileId::new('S', 3);
//! assert_eq!(id.to_string(), "S-3");
//! assert_eq!("S-3".parse::<TileId>(), Ok(id));
//!
//! assert_eq!(RoundAction::NewSet.as_str(), "newSet");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Number of words in a round.
pub const WORD_COUNT: usize = 5;

/// How long a solved word stays highlighted (1 second).
pub const BLINK_MS: u32 = 1000;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Longest accepted vocabulary word. Tile origins are stored as `u8`.
pub const MAX_WORD_LEN: usize = 32;

/// Stable identity of a single letter tile.
///
/// Assigned once when a round starts from the letter and its index in the
/// scrambled sequence. Reordering moves the tile but never changes its id, so
/// the four S tiles of "ASSESS" stay distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId {
    pub letter: char,
    pub origin: u8,
}

impl TileId {
    pub const fn new(letter: char, origin: u8) -> Self {
        Self { letter, origin }
    }
}

/// A string that is not in `"{letter}-{origin}"` form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid tile id {0:?}: expected LETTER-ORIGIN")]
pub struct ParseTileIdError(pub String);

/// Parses the `"{letter}-{origin}"` key form.
///
/// ```
/// use word_unscramble_types::TileId;
///
/// assert_eq!("T-0".parse::<TileId>(), Ok(TileId::new('T', 0)));
/// assert!("T0".parse::<TileId>().is_err());
/// assert!("-0".parse::<TileId>().is_err());
/// ```
impl FromStr for TileId {
    type Err = ParseTileIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseTileIdError(s.to_string());
        let (letter, origin) = s.split_once('-').ok_or_else(invalid)?;
        let mut chars = letter.chars();
        let letter = chars.next().ok_or_else(invalid)?;
        if chars.next().is_some() {
            return Err(invalid());
        }
        let origin = origin.parse().map_err(|_| invalid())?;
        Ok(Self { letter, origin })
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.letter, self.origin)
    }
}

impl Serialize for TileId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Round lifecycle phase.
///
/// The machine is re-entrant: `Complete` lasts only until the next round start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Playing,
    Complete,
}

/// Actions a collaborator may request from the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundAction {
    /// Move tile `source` to the position currently held by tile `target`
    /// within word `word_index`. Produced at the end of a drag.
    Reorder {
        word_index: usize,
        source: TileId,
        target: TileId,
    },
    /// Discard the round and deal a fresh puzzle.
    NewSet,
}

impl RoundAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundAction::Reorder { .. } => "reorder",
            RoundAction::NewSet => "newSet",
        }
    }
}

/// Handle for one scheduled blink expiry.
///
/// The round hands one out each time a word starts blinking; the timer
/// collaborator gives it back when the delay elapses. A ticket whose round or
/// generation no longer matches is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlinkTicket {
    pub round_id: u32,
    pub word_index: usize,
    pub generation: u32,
}
