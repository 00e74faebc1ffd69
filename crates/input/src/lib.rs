//! Terminal input module (engine-facing).
//!
//! This crate is the terminal's drag-and-drop collaborator. It maps
//! `crossterm` key events into cursor commands and turns a grab/move/drop
//! sequence into a [`crate::types::RoundAction::Reorder`] request.

pub mod cursor;
pub mod map;

pub use word_unscramble_core as core;
pub use word_unscramble_types as types;

pub use cursor::DragCursor;
pub use map::{handle_key_event, should_quit, InputCommand};
