//! Core puzzle logic - pure, deterministic, and testable
//!
//! This crate holds the word-unscramble state engine. It has no knowledge of
//! terminals, timers or input devices: collaborators feed it
//! [`RoundAction`](types::RoundAction)s and blink tickets, and read back a
//! [`RoundSnapshot`].
//!
//! # Module Structure
//!
//! - [`vocabulary`]: the pool of candidate words
//! - [`rng`]: seeded LCG and the Fisher-Yates letter scrambler
//! - [`puzzle`]: deals a round's distinct words and scrambles them
//! - [`tiles`]: identified letter tiles and the reorder operation
//! - [`round`]: the round controller (solved detection, blink feedback, lifecycle)
//! - [`snapshot`]: read-only render view
//!
//! # Example
//!
//! ```
//! use word_unscramble_core::{PuzzleGenerator, Round, Vocabulary};
//! use word_unscramble_core::types::{RoundAction, WORD_COUNT};
//!
//! let generator = PuzzleGenerator::new(Vocabulary::builtin(), WORD_COUNT).unwrap();
//! let mut round = Round::new(generator, 12345);
//!
//! // Drag the last tile of the first word onto its first tile.
//! let tiles = round.words()[0].tiles();
//! let action = RoundAction::Reorder {
//!     word_index: 0,
//!     source: tiles[tiles.len() - 1].id,
//!     target: tiles[0].id,
//! };
//! assert!(round.apply(action).changed);
//!
//! round.apply(RoundAction::NewSet);
//! assert_eq!(round.solved_count(), 0);
//! assert_eq!(round.round_id(), 1);
//! ```

pub mod error;
pub mod puzzle;
pub mod rng;
pub mod round;
pub mod snapshot;
pub mod tiles;
pub mod vocabulary;

pub use word_unscramble_types as types;

pub use error::PuzzleError;
pub use puzzle::{GeneratorOptions, PuzzleEntry, PuzzleGenerator};
pub use rng::{scramble, SimpleRng};
pub use round::{Outcome, Round};
pub use snapshot::{RoundSnapshot, WordSnapshot};
pub use tiles::{position_of, reorder, tiles_from_scrambled, Tile, WordState};
pub use vocabulary::Vocabulary;
