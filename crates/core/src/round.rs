//! Round controller - owns a round's state and drives its lifecycle.
//!
//! All mutation goes through three entry points: [`Round::apply`] (reorders and
//! new-set requests from collaborators), [`Round::start_new_round`], and
//! [`Round::expire_blink`] (deferred callbacks from the timer collaborator).

use tracing::{debug, info, trace};

use crate::puzzle::{PuzzleEntry, PuzzleGenerator};
use crate::rng::SimpleRng;
use crate::snapshot::{RoundSnapshot, WordSnapshot};
use crate::tiles::WordState;
use crate::types::{BlinkTicket, Phase, RoundAction, TileId};

/// What a single action did to the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Outcome {
    /// Any state changed.
    pub changed: bool,
    /// The touched word spells its target after the action.
    pub solved: bool,
    /// The solved counter went up.
    pub credited: bool,
    /// A blink started; hand this to the timer collaborator.
    pub blink: Option<BlinkTicket>,
    /// This action completed the round.
    pub completed: bool,
}

/// Complete round state
#[derive(Debug, Clone)]
pub struct Round {
    generator: PuzzleGenerator,
    rng: SimpleRng,
    /// Monotonic round id (increments on every new set).
    round_id: u32,
    /// RNG state the current puzzle was dealt from.
    seed: u32,
    puzzle: Vec<PuzzleEntry>,
    words: Vec<WordState>,
    solved_count: usize,
    phase: Phase,
}

impl Round {
    /// Create a round and deal its first puzzle.
    pub fn new(generator: PuzzleGenerator, seed: u32) -> Self {
        let mut round = Self {
            generator,
            rng: SimpleRng::new(seed),
            round_id: 0,
            seed: 0,
            puzzle: Vec::new(),
            words: Vec::new(),
            solved_count: 0,
            phase: Phase::Playing,
        };
        round.deal();
        round
    }

    /// Discard everything and deal a fresh puzzle.
    pub fn start_new_round(&mut self) {
        self.round_id = self.round_id.wrapping_add(1);
        self.deal();
    }

    fn deal(&mut self) {
        self.seed = self.rng.state();
        self.puzzle = self.generator.generate(&mut self.rng);
        self.words = self.puzzle.iter().map(WordState::new).collect();
        self.solved_count = 0;
        self.phase = Phase::Playing;

        info!(round_id = self.round_id, seed = self.seed, "round started");
        debug!(
            round_id = self.round_id,
            words = ?self.puzzle.iter().map(|e| e.word.as_str()).collect::<Vec<_>>(),
            "puzzle dealt"
        );
    }

    /// Apply a collaborator request.
    pub fn apply(&mut self, action: RoundAction) -> Outcome {
        match action {
            RoundAction::Reorder {
                word_index,
                source,
                target,
            } => self.reorder(word_index, source, target),
            RoundAction::NewSet => {
                self.start_new_round();
                Outcome {
                    changed: true,
                    ..Outcome::default()
                }
            }
        }
    }

    /// Move tile `source` onto the position of tile `target` in one word, then
    /// evaluate the word.
    ///
    /// Unknown words or tiles, and any request after the round completed, leave
    /// the state untouched.
    pub fn reorder(&mut self, word_index: usize, source: TileId, target: TileId) -> Outcome {
        if self.phase == Phase::Complete {
            debug!(word_index, %source, %target, "reorder ignored: round complete");
            return Outcome::default();
        }
        let Some(word) = self.words.get_mut(word_index) else {
            debug!(word_index, "reorder ignored: unknown word");
            return Outcome::default();
        };

        let was_solved = word.is_solved();
        if !word.reorder_by_id(source, target) {
            debug!(word_index, %source, %target, "reorder ignored: unresolved tiles");
            return Outcome::default();
        }

        let mut outcome = Outcome {
            changed: true,
            solved: word.is_solved(),
            ..Outcome::default()
        };
        if !outcome.solved || (was_solved && word.credited()) {
            return outcome;
        }

        let generation = word.start_blink();
        outcome.blink = Some(BlinkTicket {
            round_id: self.round_id,
            word_index,
            generation,
        });

        if word.credit() {
            self.solved_count += 1;
            outcome.credited = true;
            info!(
                round_id = self.round_id,
                word_index,
                solved = self.solved_count,
                total = self.words.len(),
                "word solved"
            );
        }

        if self.solved_count >= self.words.len() {
            self.phase = Phase::Complete;
            outcome.completed = true;
            info!(round_id = self.round_id, "round complete");
        }

        outcome
    }

    /// Timer callback: end the blink a ticket was issued for.
    ///
    /// Tickets from an earlier round, or superseded by a later blink of the same
    /// word, are ignored.
    pub fn expire_blink(&mut self, ticket: BlinkTicket) -> bool {
        if ticket.round_id != self.round_id {
            trace!(?ticket, round_id = self.round_id, "stale blink ticket");
            return false;
        }
        match self.words.get_mut(ticket.word_index) {
            Some(word) => word.expire_blink(ticket.generation),
            None => false,
        }
    }

    pub fn round_id(&self) -> u32 {
        self.round_id
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    pub fn solved_count(&self) -> usize {
        self.solved_count
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn puzzle(&self) -> &[PuzzleEntry] {
        &self.puzzle
    }

    pub fn words(&self) -> &[WordState] {
        &self.words
    }

    /// Write the render view into an existing snapshot, reusing its buffers.
    pub fn snapshot_into(&self, out: &mut RoundSnapshot) {
        out.words.truncate(self.words.len());
        while out.words.len() < self.words.len() {
            out.words.push(WordSnapshot::default());
        }
        for (dst, src) in out.words.iter_mut().zip(&self.words) {
            dst.tiles.clear();
            dst.tiles.extend_from_slice(src.tiles());
            dst.blinking = src.blinking();
            dst.solved = src.is_solved();
            dst.credited = src.credited();
        }
        out.solved_count = self.solved_count;
        out.word_count = self.words.len();
        out.is_complete = self.is_complete();
        out.phase = self.phase;
        out.round_id = self.round_id;
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        let mut s = RoundSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
