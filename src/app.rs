//! Application state: the game plus everything the terminal front end adds
//! on top of it (cursor, theme, preference store).
//!
//! `App` is free of terminal I/O so the dispatch logic can be tested with
//! synthetic events.

use crossterm::event::{Event, KeyEventKind};
use tracing::{info, warn};

use crate::core::{ConfigError, Game, GameConfig, GameSnapshot, TracingObserver};
use crate::input::{handle_key_event, handle_mouse_event, should_quit, Cursor, InputAction};
use crate::prefs::{load_theme, save_theme, PreferenceStore};
use crate::term::{FrameBuffer, GameView, ViewContext, Viewport};
use crate::types::Theme;

/// What the event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    /// The terminal changed size; repaint everything.
    Resized,
    Quit,
}

pub struct App {
    game: Game,
    cursor: Cursor,
    theme: Theme,
    prefs: Box<dyn PreferenceStore>,
    view: GameView,
    snapshot: GameSnapshot,
    observer: TracingObserver,
}

impl App {
    pub fn new(config: GameConfig, prefs: Box<dyn PreferenceStore>) -> Result<Self, ConfigError> {
        Ok(Self::with_game(Game::new(config)?, prefs))
    }

    /// Wrap an existing game. The theme is loaded from `prefs`.
    pub fn with_game(game: Game, prefs: Box<dyn PreferenceStore>) -> Self {
        let theme = load_theme(prefs.as_ref());
        let snapshot = game.snapshot();
        info!(theme = theme.as_str(), pairs = snapshot.pairs, "app ready");
        Self {
            cursor: Cursor::new(snapshot.cards.len()),
            game,
            theme,
            prefs,
            view: GameView::default(),
            snapshot,
            observer: TracingObserver,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn prefs(&self) -> &dyn PreferenceStore {
        self.prefs.as_ref()
    }

    /// Handle one terminal event.
    pub fn handle_event(&mut self, event: &Event, viewport: Viewport) -> Control {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(*key) {
                    return Control::Quit;
                }
                if let Some(action) = handle_key_event(*key) {
                    self.handle_action(action, viewport);
                }
                Control::Continue
            }
            Event::Mouse(mouse) => {
                if let Some(action) = handle_mouse_event(*mouse) {
                    self.handle_action(action, viewport);
                }
                Control::Continue
            }
            Event::Resize(..) => Control::Resized,
            _ => Control::Continue,
        }
    }

    pub fn handle_action(&mut self, action: InputAction, viewport: Viewport) {
        match action {
            InputAction::Move(dir) => self.cursor.step(dir),
            InputAction::Confirm => {
                if self.snapshot.won {
                    self.new_game();
                } else {
                    self.game.request_flip(self.cursor.index());
                }
            }
            InputAction::NewGame => self.new_game(),
            InputAction::ToggleTheme => self.toggle_theme(),
            InputAction::Click { column, row } => {
                if let Some(id) = self.view.hit_test(&self.snapshot, viewport, column, row) {
                    self.cursor.set(id);
                    self.game.request_flip(id);
                }
            }
        }
        self.sync();
    }

    /// Move game time forward by real elapsed milliseconds.
    pub fn advance(&mut self, elapsed_ms: u32) {
        self.game.advance(elapsed_ms);
        self.sync();
    }

    pub fn render_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        let ctx = ViewContext {
            theme: self.theme,
            cursor: (!self.snapshot.won).then(|| self.cursor.index()),
        };
        self.view.render_into(&self.snapshot, &ctx, viewport, fb);
    }

    fn new_game(&mut self) {
        self.game.reset();
        self.cursor.resize(self.game.session().board().len());
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        info!(theme = self.theme.as_str(), "theme changed");
        if let Err(err) = save_theme(self.prefs.as_mut(), self.theme) {
            warn!(error = %err, "could not save theme preference");
        }
    }

    /// Refresh the cached snapshot and flush engine events to the log.
    fn sync(&mut self) {
        self.game.snapshot_into(&mut self.snapshot);
        self.game.dispatch_events(&mut self.observer);
    }
}
