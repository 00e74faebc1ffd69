//! Engine: the timer collaborator and the session that drives a round.
//!
//! The core round never waits on anything. Blink feedback is expressed as
//! tickets; this crate holds them on a fixed-tick countdown and hands them
//! back when due.

pub mod session;
pub mod timers;

pub use word_unscramble_core as core;
pub use word_unscramble_types as types;

pub use session::Session;
pub use timers::BlinkTimers;
