//! Session: a round wired to its blink timers.
//!
//! Front ends talk to a `Session` instead of a bare [`Round`]: every blink the
//! round starts is scheduled here, and `tick` feeds due tickets back.

use tracing::debug;

use crate::core::{Outcome, Round, RoundSnapshot};
use crate::timers::BlinkTimers;
use crate::types::{RoundAction, BLINK_MS};

#[derive(Debug, Clone)]
pub struct Session {
    round: Round,
    timers: BlinkTimers,
    blink_ms: u32,
}

impl Session {
    pub fn new(round: Round) -> Self {
        Self {
            round,
            timers: BlinkTimers::new(),
            blink_ms: BLINK_MS,
        }
    }

    pub fn with_blink_ms(mut self, blink_ms: u32) -> Self {
        self.blink_ms = blink_ms;
        self
    }

    /// Apply an action and schedule the expiry of any blink it started.
    pub fn apply(&mut self, action: RoundAction) -> Outcome {
        let outcome = self.round.apply(action);
        debug!(
            action = action.as_str(),
            round_id = self.round.round_id(),
            changed = outcome.changed,
            "action applied"
        );
        if let Some(ticket) = outcome.blink {
            self.timers.schedule(ticket, self.blink_ms);
        }
        if outcome.completed {
            debug!(round_id = self.round.round_id(), "session observed completion");
        }
        outcome
    }

    /// Advance timers; returns how many blinks were cleared.
    ///
    /// Tickets left over from a replaced round still fire and are ignored by
    /// the round.
    pub fn tick(&mut self, elapsed_ms: u32) -> usize {
        self.timers
            .advance(elapsed_ms)
            .into_iter()
            .filter(|&ticket| self.round.expire_blink(ticket))
            .count()
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn timers(&self) -> &BlinkTimers {
        &self.timers
    }

    pub fn blink_ms(&self) -> u32 {
        self.blink_ms
    }

    pub fn snapshot_into(&self, out: &mut RoundSnapshot) {
        self.round.snapshot_into(out);
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        self.round.snapshot()
    }
}
