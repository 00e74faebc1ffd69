//! One-shot deferred callbacks for blink expiry.
//!
//! Timers count down on the caller's fixed tick instead of wall-clock time, so
//! the same input sequence always fires the same tickets.

use crate::types::BlinkTicket;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    ticket: BlinkTicket,
    remaining_ms: u32,
}

/// Pending blink expiries.
#[derive(Debug, Clone, Default)]
pub struct BlinkTimers {
    pending: Vec<Pending>,
}

impl BlinkTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `ticket` to fire after `delay_ms`.
    ///
    /// A pending ticket for the same round and word is replaced: only the
    /// latest blink of a word can still clear it.
    pub fn schedule(&mut self, ticket: BlinkTicket, delay_ms: u32) {
        let entry = Pending {
            ticket,
            remaining_ms: delay_ms,
        };
        match self.pending.iter_mut().find(|p| {
            p.ticket.round_id == ticket.round_id && p.ticket.word_index == ticket.word_index
        }) {
            Some(slot) => *slot = entry,
            None => self.pending.push(entry),
        }
    }

    /// Advance every timer by `elapsed_ms` and return the tickets that came due,
    /// in scheduling order.
    pub fn advance(&mut self, elapsed_ms: u32) -> Vec<BlinkTicket> {
        let mut fired = Vec::new();
        self.pending.retain_mut(|p| {
            p.remaining_ms = p.remaining_ms.saturating_sub(elapsed_ms);
            if p.remaining_ms == 0 {
                fired.push(p.ticket);
                false
            } else {
                true
            }
        });
        fired
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
