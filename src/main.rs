//! Terminal word-unscramble runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from the `term`
//! crate. A keyboard drag cursor stands in for pointer drag-and-drop.

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use word_unscramble::core::RoundSnapshot;
use word_unscramble::engine::Session;
use word_unscramble::input::{handle_key_event, should_quit, DragCursor};
use word_unscramble::term::{CursorView, FrameBuffer, PuzzleView, TerminalRenderer, Viewport};
use word_unscramble::types::TICK_MS;
use word_unscramble::GameConfig;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_logging(&config)?;

    // Build the round before touching the terminal so config errors print normally.
    let session = Session::new(config.round()?);
    info!(seed = config.seed, word_count = config.word_count, strict = config.strict, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// The terminal owns stdout, so logs only go to a file when one is configured.
fn init_logging(config: &GameConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("create log file {}", path.display()))?;
    let filter =
        EnvFilter::try_from_env("WORD_UNSCRAMBLE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, mut session: Session) -> Result<()> {
    let view = PuzzleView::default();
    let mut cursor = DragCursor::new();
    let mut snap = RoundSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        session.snapshot_into(&mut snap);
        cursor.sync(&snap);
        let cursor_view = CursorView {
            word: cursor.word(),
            slot: cursor.slot(),
            grabbed: cursor.grabbed(),
        };
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Some(&cursor_view), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(round_id = session.round().round_id(), "quit");
                        return Ok(());
                    }
                    if let Some(action) =
                        handle_key_event(key).and_then(|command| cursor.handle(command, &snap))
                    {
                        session.apply(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick by measured time; the sub-millisecond remainder carries over.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            let ms = whole_ms(elapsed);
            last_tick += Duration::from_millis(u64::from(ms));
            session.tick(ms);
        }
    }
}

fn whole_ms(elapsed: Duration) -> u32 {
    u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX)
}
