//! Integration tests for the round lifecycle through the session facade.

use word_unscramble::core::{GeneratorOptions, Outcome, PuzzleGenerator, Round, Vocabulary};
use word_unscramble::engine::Session;
use word_unscramble::types::{Phase, RoundAction, TileId, BLINK_MS, TICK_MS, WORD_COUNT};

fn strict_round(seed: u32) -> Round {
    let gen = PuzzleGenerator::new(Vocabulary::builtin(), WORD_COUNT)
        .unwrap()
        .with_options(GeneratorOptions {
            reject_identity: true,
        });
    Round::new(gen, seed)
}

fn round_for(words: &[&str], seed: u32) -> Round {
    let gen = PuzzleGenerator::new(Vocabulary::new(words.iter().copied()).unwrap(), words.len())
        .unwrap()
        .with_options(GeneratorOptions {
            reject_identity: true,
        });
    Round::new(gen, seed)
}

/// Reorder requests that bring word `index` of `session` to its target.
fn solve(session: &mut Session, index: usize) -> Outcome {
    let mut last = Outcome::default();
    let target: Vec<char> = session.round().words()[index].target().chars().collect();
    for (pos, &letter) in target.iter().enumerate() {
        let tiles = session.round().words()[index].tiles();
        if tiles[pos].letter == letter {
            continue;
        }
        let from = (pos + 1..tiles.len())
            .find(|&i| tiles[i].letter == letter)
            .unwrap();
        let action = RoundAction::Reorder {
            word_index: index,
            source: tiles[from].id,
            target: tiles[pos].id,
        };
        last = session.apply(action);
    }
    last
}

fn wait(session: &mut Session, ms: u32) -> usize {
    let mut cleared = 0;
    let mut left = ms;
    while left > 0 {
        let step = left.min(TICK_MS);
        cleared += session.tick(step);
        left -= step;
    }
    cleared
}

#[test]
fn test_round_lifecycle() {
    let mut session = Session::new(strict_round(12345));
    let snap = session.snapshot();
    assert_eq!(snap.phase, Phase::Playing);
    assert_eq!(snap.word_count, WORD_COUNT);
    assert_eq!(snap.solved_count, 0);
    assert!(snap.words.iter().all(|w| !w.solved && !w.blinking));

    for index in 0..WORD_COUNT {
        let outcome = solve(&mut session, index);
        assert!(outcome.credited, "word {index} should be credited");
        assert_eq!(outcome.completed, index == WORD_COUNT - 1);
    }

    let snap = session.snapshot();
    assert!(snap.is_complete);
    assert_eq!(snap.phase, Phase::Complete);
    assert_eq!(snap.solved_count, WORD_COUNT);

    session.apply(RoundAction::NewSet);
    let snap = session.snapshot();
    assert_eq!(snap.phase, Phase::Playing);
    assert_eq!(snap.solved_count, 0);
    assert_eq!(snap.round_id, 1);
}

#[test]
fn test_thml_single_move_spells_html() {
    // With a one-word pool of four distinct letters, any strict scramble works;
    // rebuild the THML case by moving tiles until H sits behind T.
    let mut session = Session::new(round_for(&["HTML"], 3));
    let word = &session.round().words()[0];
    let h = word.tiles().iter().find(|t| t.letter == 'H').unwrap().id;
    let t = word.tiles().iter().find(|t| t.letter == 'T').unwrap().id;
    let m = word.tiles().iter().find(|t| t.letter == 'M').unwrap().id;
    let l = word.tiles().iter().find(|t| t.letter == 'L').unwrap().id;

    // Arrange T H M L one tile at a time; each move leaves the word unsolved.
    for (pos, id) in [t, h, m, l].into_iter().enumerate() {
        let tiles = session.round().words()[0].tiles();
        if tiles[pos].id != id {
            let target = tiles[pos].id;
            let outcome = session.apply(RoundAction::Reorder {
                word_index: 0,
                source: id,
                target,
            });
            assert!(!outcome.solved);
        }
    }
    assert_eq!(session.round().words()[0].spelled(), "THML");
    assert_eq!(session.snapshot().solved_count, 0);

    let outcome = session.apply(RoundAction::Reorder {
        word_index: 0,
        source: h,
        target: t,
    });
    assert!(outcome.solved && outcome.credited && outcome.completed);

    let snap = session.snapshot();
    assert_eq!(snap.words[0].letters(), "HTML");
    assert!(snap.words[0].blinking);
    assert_eq!(snap.solved_count, 1);
    assert_eq!(snap.words[0].tiles[0].id, h);
    assert_eq!(snap.words[0].tiles[1].id, t);
}

#[test]
fn test_blink_clears_after_one_second() {
    let mut session = Session::new(strict_round(99));
    solve(&mut session, 0);
    assert!(session.snapshot().words[0].blinking);

    assert_eq!(wait(&mut session, BLINK_MS - TICK_MS), 0);
    assert!(session.snapshot().words[0].blinking);

    assert_eq!(wait(&mut session, TICK_MS), 1);
    let snap = session.snapshot();
    assert!(!snap.words[0].blinking);
    assert!(snap.words[0].solved);
}

#[test]
fn test_resolving_a_word_does_not_double_count() {
    let mut session = Session::new(round_for(&["ABC", "XYZ"], 5));
    solve(&mut session, 0);
    assert_eq!(session.snapshot().solved_count, 1);

    // Break the word, then put it back.
    let tiles = session.round().words()[0].tiles().to_vec();
    session.apply(RoundAction::Reorder {
        word_index: 0,
        source: tiles[0].id,
        target: tiles[1].id,
    });
    assert!(!session.snapshot().words[0].solved);
    let outcome = session.apply(RoundAction::Reorder {
        word_index: 0,
        source: tiles[0].id,
        target: tiles[1].id,
    });

    assert!(outcome.solved);
    assert!(!outcome.credited);
    assert!(outcome.blink.is_some());
    assert_eq!(session.snapshot().solved_count, 1);
    assert!(!session.round().is_complete());
}

#[test]
fn test_stale_blink_after_new_set_is_harmless() {
    let mut session = Session::new(strict_round(2024));
    solve(&mut session, 2);
    assert!(session.snapshot().words[2].blinking);

    // Reset before the blink fires.
    wait(&mut session, BLINK_MS / 2);
    session.apply(RoundAction::NewSet);
    let before = session.snapshot();

    assert_eq!(wait(&mut session, BLINK_MS), 0);
    assert_eq!(session.snapshot(), before);
    assert!(session.timers().is_empty());
}

#[test]
fn test_reorders_after_completion_are_ignored() {
    let mut session = Session::new(round_for(&["ABC"], 8));
    assert!(solve(&mut session, 0).completed);

    let before = session.snapshot();
    let tiles = session.round().words()[0].tiles().to_vec();
    let outcome = session.apply(RoundAction::Reorder {
        word_index: 0,
        source: tiles[2].id,
        target: tiles[0].id,
    });
    assert_eq!(outcome, Outcome::default());
    assert_eq!(session.snapshot(), before);
}

#[test]
fn test_invalid_requests_leave_state_untouched() {
    let mut session = Session::new(strict_round(77));
    let before = session.snapshot();
    let first = before.words[0].tiles[0].id;

    for action in [
        RoundAction::Reorder {
            word_index: WORD_COUNT,
            source: first,
            target: first,
        },
        RoundAction::Reorder {
            word_index: 0,
            source: TileId::new('#', 40),
            target: first,
        },
        RoundAction::Reorder {
            word_index: 0,
            source: first,
            target: first,
        },
    ] {
        assert!(!session.apply(action).changed);
    }
    assert_eq!(session.snapshot(), before);
}

#[test]
fn test_same_seed_same_session() {
    let a = Session::new(strict_round(4242)).snapshot();
    let b = Session::new(strict_round(4242)).snapshot();
    assert_eq!(a, b);
    assert_eq!(a.seed, 4242);
}
