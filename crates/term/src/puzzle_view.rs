//! PuzzleView: maps a `RoundSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{RoundSnapshot, WordSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::TileId;

pub const TITLE: &str = "WORD UNSCRAMBLE";
pub const CONGRATS: &str = "Congrats! You finished this level!";
pub const NEW_SET_HINT: &str = "[n] Give Me Another Set";
pub const CONTROLS_HINT: &str = "arrows move  space grab/drop  esc cancel  q quit";

/// Columns per tile (`[X]`) and the gap after it.
const TILE_W: u16 = 3;
const TILE_GAP: u16 = 1;
/// Rows per word: tile row, cursor marker row, spacer.
const WORD_H: u16 = 3;

const BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the drag cursor is, as the view needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorView {
    pub word: usize,
    pub slot: usize,
    pub grabbed: Option<TileId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the puzzle.
#[derive(Debug, Clone)]
pub struct PuzzleView {
    anchor_y: AnchorY,
}

impl Default for PuzzleView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

impl PuzzleView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Total rows the layout needs for `word_count` words.
    pub fn content_height(word_count: usize) -> u16 {
        // title + spacer, words, counter, message, spacer, two hint rows
        2 + (word_count as u16).saturating_mul(WORD_H) + 5
    }

    /// Render into an existing framebuffer (reused across frames).
    pub fn render_into(
        &self,
        snap: &RoundSnapshot,
        cursor: Option<&CursorView>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let height = Self::content_height(snap.words.len());
        let mut y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(height) / 2,
            AnchorY::Top => 0,
        };

        fb.put_centered(y, TITLE, CellStyle::new(Rgb::new(255, 255, 255), BG).bold());
        y = y.saturating_add(2);

        for (index, word) in snap.words.iter().enumerate() {
            let cursor = cursor.filter(|c| c.word == index);
            self.draw_word(fb, y, word, cursor);
            y = y.saturating_add(WORD_H);
        }

        draw_counter(fb, y, snap.solved_count, snap.word_count);
        y = y.saturating_add(1);

        if snap.is_complete {
            fb.put_centered(y, CONGRATS, CellStyle::new(Rgb::new(120, 230, 120), BG).bold());
        }
        y = y.saturating_add(2);

        let hint = CellStyle::default().dim();
        fb.put_centered(y, NEW_SET_HINT, hint);
        fb.put_centered(y.saturating_add(1), CONTROLS_HINT, hint);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &RoundSnapshot,
        cursor: Option<&CursorView>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, viewport, &mut fb);
        fb
    }

    fn draw_word(&self, fb: &mut FrameBuffer, y: u16, word: &WordSnapshot, cursor: Option<&CursorView>) {
        let count = word.tiles.len() as u16;
        let row_w = count
            .saturating_mul(TILE_W + TILE_GAP)
            .saturating_sub(TILE_GAP);
        let start_x = fb.width().saturating_sub(row_w) / 2;

        let style = tile_style(word);
        for (slot, tile) in word.tiles.iter().enumerate() {
            let x = start_x.saturating_add(slot as u16 * (TILE_W + TILE_GAP));
            let held = cursor.and_then(|c| c.grabbed) == Some(tile.id);
            let (open, close) = if held { ('<', '>') } else { ('[', ']') };
            let style = if held { style.bold() } else { style };

            fb.put_char(x, y, open, style);
            fb.put_char(x + 1, y, tile.letter, style);
            fb.put_char(x + 2, y, close, style);

            if cursor.is_some_and(|c| c.slot == slot) {
                fb.put_char(x + 1, y.saturating_add(1), '^', CellStyle::default().bold());
            }
        }
    }
}

/// `SOLVED n/m`, centered, drawn without building a string.
fn draw_counter(fb: &mut FrameBuffer, y: u16, solved: usize, total: usize) {
    const LABEL: &str = "SOLVED ";
    let len = LABEL.len() + decimal_width(solved) + 1 + decimal_width(total);
    let x = fb.width().saturating_sub(len as u16) / 2;

    let style = CellStyle::default().bold();
    let x = fb.put_str(x, y, LABEL, style);
    let x = fb.put_uint(x, y, solved, style);
    fb.put_char(x, y, '/', style);
    fb.put_uint(x.saturating_add(1), y, total, style);
}

fn decimal_width(n: usize) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}

/// Blinking beats solved beats plain. Only counted words get the solved tint,
/// so a word dealt already spelled looks unsolved until it is moved.
fn tile_style(word: &WordSnapshot) -> CellStyle {
    if word.blinking {
        CellStyle::new(Rgb::new(0, 0, 0), Rgb::new(250, 210, 60)).bold()
    } else if word.solved && word.credited {
        CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(40, 140, 60))
    } else {
        CellStyle::new(Rgb::new(0, 0, 0), Rgb::new(235, 235, 235))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Tile;

    fn word(letters: &str, blinking: bool, solved: bool) -> WordSnapshot {
        WordSnapshot {
            tiles: letters
                .chars()
                .enumerate()
                .map(|(i, letter)| Tile {
                    letter,
                    id: TileId::new(letter, i as u8),
                })
                .collect(),
            blinking,
            solved,
            credited: solved,
        }
    }

    #[test]
    fn test_tile_style_priority() {
        let plain = tile_style(&word("AB", false, false));
        let solved = tile_style(&word("AB", false, true));
        let blinking = tile_style(&word("AB", true, true));
        assert_ne!(plain, solved);
        assert_ne!(solved, blinking);
        assert!(blinking.bold);
    }

    #[test]
    fn test_spelled_but_uncounted_word_looks_unsolved() {
        let plain = tile_style(&word("CSS", false, false));
        let dealt_spelled = WordSnapshot {
            credited: false,
            ..word("CSS", false, true)
        };
        assert_eq!(tile_style(&dealt_spelled), plain);

        let snap = RoundSnapshot {
            words: vec![dealt_spelled, word("HTML", false, true)],
            solved_count: 1,
            word_count: 2,
            ..RoundSnapshot::default()
        };
        let view = PuzzleView::default().with_anchor_y(AnchorY::Top);
        let fb = view.render(&snap, None, Viewport::new(20, 16));

        let first_tile = |y: u16| {
            (0..fb.width())
                .filter_map(|x| fb.get(x, y))
                .find(|c| c.ch == '[')
                .map(|c| c.style)
        };
        assert_eq!(fb.row_text(2).trim(), "[C] [S] [S]");
        assert_eq!(first_tile(2), Some(plain));
        assert_ne!(first_tile(5), Some(plain));
    }

    #[test]
    fn test_counter_is_centered() {
        let mut fb = FrameBuffer::new(14, 1);
        draw_counter(&mut fb, 0, 3, 12);
        assert_eq!(fb.row_text(0), " SOLVED 3/12  ");
        assert_eq!(decimal_width(0), 1);
        assert_eq!(decimal_width(10), 2);
    }

    #[test]
    fn test_content_height_fits_default_round() {
        assert_eq!(PuzzleView::content_height(5), 22);
    }

    #[test]
    fn test_held_tile_uses_angle_brackets() {
        let snap = RoundSnapshot {
            words: vec![word("HTML", false, false)],
            word_count: 1,
            ..RoundSnapshot::default()
        };
        let cursor = CursorView {
            word: 0,
            slot: 2,
            grabbed: Some(TileId::new('T', 1)),
        };
        let view = PuzzleView::default().with_anchor_y(AnchorY::Top);
        let fb = view.render(&snap, Some(&cursor), Viewport::new(20, 12));

        assert_eq!(fb.row_text(2).trim(), "[H] <T> [M] [L]");
        assert_eq!(fb.row_text(3).trim(), "^");
    }
}
