//! Word Unscramble (workspace facade crate).
//!
//! Re-exports the workspace crates under short names so the binary, the
//! integration tests and the benches share one import path:
//! `word_unscramble::{core,engine,input,term,types}`.

pub mod config;

pub use word_unscramble_core as core;
pub use word_unscramble_engine as engine;
pub use word_unscramble_input as input;
pub use word_unscramble_term as term;
pub use word_unscramble_types as types;

pub use config::GameConfig;
