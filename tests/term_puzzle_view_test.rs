use word_unscramble::core::{PuzzleGenerator, Round, RoundSnapshot, Vocabulary};
use word_unscramble::term::puzzle_view::{CONGRATS, NEW_SET_HINT, TITLE};
use word_unscramble::term::{AnchorY, PuzzleView, Viewport};
use word_unscramble::types::{Phase, WORD_COUNT};

fn snapshot() -> RoundSnapshot {
    Round::new(PuzzleGenerator::new(Vocabulary::builtin(), WORD_COUNT).unwrap(), 1).snapshot()
}

fn rows(fb: &word_unscramble::term::FrameBuffer) -> Vec<String> {
    (0..fb.height()).map(|y| fb.row_text(y)).collect()
}

#[test]
fn term_view_renders_title_words_and_counter() {
    let snap = snapshot();
    let view = PuzzleView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, None, Viewport::new(60, 30));
    let rows = rows(&fb);

    assert_eq!(rows[0].trim(), TITLE);
    for (i, word) in snap.words.iter().enumerate() {
        let expected: Vec<String> = word.tiles.iter().map(|t| format!("[{}]", t.letter)).collect();
        assert_eq!(rows[2 + 3 * i].trim(), expected.join(" "));
    }
    assert!(rows.iter().any(|r| r.trim() == format!("SOLVED 0/{WORD_COUNT}")));
    assert!(rows.iter().any(|r| r.trim() == NEW_SET_HINT));
    assert!(!rows.iter().any(|r| r.contains(CONGRATS)));
}

#[test]
fn term_view_shows_congrats_when_complete() {
    let mut snap = snapshot();
    snap.solved_count = WORD_COUNT;
    snap.is_complete = true;
    snap.phase = Phase::Complete;

    let fb = PuzzleView::default().render(&snap, None, Viewport::new(60, 30));
    let rows = rows(&fb);
    assert!(rows.iter().any(|r| r.trim() == format!("SOLVED {WORD_COUNT}/{WORD_COUNT}")));
    assert!(rows.iter().any(|r| r.trim() == CONGRATS));
}

#[test]
fn term_view_centers_vertically() {
    let snap = snapshot();
    let height = PuzzleView::content_height(WORD_COUNT);
    let fb = PuzzleView::default().render(&snap, None, Viewport::new(60, height + 10));
    assert_eq!(fb.row_text(5).trim(), TITLE);
}

#[test]
fn term_view_survives_tiny_viewport() {
    let snap = snapshot();
    let fb = PuzzleView::default().render(&snap, None, Viewport::new(4, 3));
    assert_eq!((fb.width(), fb.height()), (4, 3));
}

#[test]
fn term_view_does_not_tint_words_dealt_already_spelled() {
    // Seed 3 deals "CSS" unscrambled as its last word.
    let snap = Round::new(PuzzleGenerator::new(Vocabulary::builtin(), WORD_COUNT).unwrap(), 3)
        .snapshot();
    let dealt = snap.words.last().unwrap();
    assert_eq!(dealt.letters(), "CSS");
    assert!(dealt.solved && !dealt.credited);
    assert_eq!(snap.solved_count, 0);

    let fb = PuzzleView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, None, Viewport::new(60, 30));
    let tile_style = |word: usize| {
        let y = 2 + 3 * word as u16;
        (0..fb.width())
            .filter_map(|x| fb.get(x, y))
            .find(|c| c.ch == '[')
            .map(|c| c.style)
            .unwrap()
    };

    // Nothing is counted yet, so every word is drawn the same way.
    let first = tile_style(0);
    for word in 1..WORD_COUNT {
        assert_eq!(tile_style(word), first, "word {word}");
    }
    assert!(rows(&fb).iter().any(|r| r.trim() == format!("SOLVED 0/{WORD_COUNT}")));
}
