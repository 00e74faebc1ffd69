//! Keyboard drag cursor.
//!
//! Stands in for a pointer drag: the player grabs the tile under the cursor,
//! walks the cursor along the word, and drops. A drop produces the same
//! `Reorder { source, target }` request a mouse drag-and-drop would.

use crate::core::RoundSnapshot;
use crate::map::InputCommand;
use crate::types::{RoundAction, TileId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragCursor {
    word: usize,
    slot: usize,
    grabbed: Option<TileId>,
}

impl DragCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn word(&self) -> usize {
        self.word
    }

    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Tile currently held, if any.
    pub fn grabbed(&self) -> Option<TileId> {
        self.grabbed
    }

    /// Pull the cursor back inside the snapshot and drop a grab whose tile is
    /// gone (after a new set).
    pub fn sync(&mut self, snap: &RoundSnapshot) {
        if snap.words.is_empty() {
            *self = Self::default();
            return;
        }
        self.word = self.word.min(snap.words.len() - 1);
        let len = snap.words[self.word].tiles.len();
        self.slot = self.slot.min(len.saturating_sub(1));
        if let Some(id) = self.grabbed {
            if !snap.words[self.word].tiles.iter().any(|t| t.id == id) {
                self.grabbed = None;
            }
        }
    }

    /// Apply a command; returns the round action it completes, if any.
    pub fn handle(&mut self, command: InputCommand, snap: &RoundSnapshot) -> Option<RoundAction> {
        self.sync(snap);
        let word = snap.words.get(self.word)?;

        match command {
            InputCommand::Left => {
                self.slot = self.slot.saturating_sub(1);
                None
            }
            InputCommand::Right => {
                if self.slot + 1 < word.tiles.len() {
                    self.slot += 1;
                }
                None
            }
            InputCommand::Up => {
                self.change_word(self.word.saturating_sub(1), snap);
                None
            }
            InputCommand::Down => {
                self.change_word((self.word + 1).min(snap.words.len() - 1), snap);
                None
            }
            InputCommand::GrabOrDrop => {
                let under = word.tiles.get(self.slot)?.id;
                match self.grabbed.take() {
                    None => {
                        self.grabbed = Some(under);
                        None
                    }
                    Some(source) if source == under => None,
                    Some(source) => Some(RoundAction::Reorder {
                        word_index: self.word,
                        source,
                        target: under,
                    }),
                }
            }
            InputCommand::Cancel => {
                self.grabbed = None;
                None
            }
            InputCommand::NewSet => {
                *self = Self::default();
                Some(RoundAction::NewSet)
            }
        }
    }

    fn change_word(&mut self, word: usize, snap: &RoundSnapshot) {
        if word == self.word {
            return;
        }
        // A tile cannot leave its word.
        self.grabbed = None;
        self.word = word;
        let len = snap.words[word].tiles.len();
        self.slot = self.slot.min(len.saturating_sub(1));
    }
}
