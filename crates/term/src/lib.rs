//! Terminal rendering for the puzzle.
//!
//! Renders into a simple framebuffer that is then flushed to the terminal,
//! instead of going through a widget toolkit.
//!
//! - [`fb`]: styled character grid
//! - [`puzzle_view`]: pure snapshot-to-framebuffer layout
//! - [`renderer`]: crossterm output with per-run diffing

pub mod fb;
pub mod puzzle_view;
pub mod renderer;

pub use word_unscramble_core as core;
pub use word_unscramble_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use puzzle_view::{AnchorY, CursorView, PuzzleView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
