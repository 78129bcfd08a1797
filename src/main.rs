//! Terminal memory game runner (default binary).
//!
//! It uses crossterm for input and a custom framebuffer-based renderer.
//! Configuration comes from `MEMORY_*` environment variables.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use tracing::info;

use tui_memory::app::{App, Control};
use tui_memory::config::AppConfig;
use tui_memory::logging;
use tui_memory::prefs::JsonFileStore;
use tui_memory::term::{FrameBuffer, TerminalRenderer, Viewport};
use tui_memory::types::FRAME_MS;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(config.log_path.as_deref())?;

    // Reject a bad pair count before touching the terminal.
    config.game.validate().context("invalid MEMORY_PAIRS")?;
    info!(
        pairs = config.game.pairs,
        seed = config.game.seed,
        prefs = %config.prefs_path.display(),
        "starting"
    );

    let prefs = JsonFileStore::open(&config.prefs_path);
    let mut app = App::new(config.game, Box::new(prefs))?;

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, &mut app));

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("exiting");
    result
}

fn run(term: &mut TerminalRenderer, app: &mut App) -> Result<()> {
    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut fb = FrameBuffer::new(0, 0);
    let mut last = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);

        app.render_into(viewport, &mut fb);
        term.draw(&fb)?;

        if event::poll(frame.saturating_sub(last.elapsed()))? {
            match app.handle_event(&event::read()?, viewport) {
                Control::Quit => return Ok(()),
                Control::Resized => term.invalidate(),
                Control::Continue => {}
            }
        }

        let elapsed = last.elapsed();
        if elapsed >= frame {
            // Carry the sub-millisecond remainder into the next frame.
            let ms = elapsed.as_millis().min(u32::MAX as u128) as u32;
            last += Duration::from_millis(ms as u64);
            app.advance(ms);
        }
    }
}
