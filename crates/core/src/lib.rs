//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the memory (concentration) game: dealing,
//! flipping, pair evaluation, counters and win detection. It has **no
//! dependencies** on terminal UI or I/O, making it:
//!
//! - **Deterministic**: Same seed and same inputs produce identical games
//! - **Testable**: Time is advanced explicitly, no real clock involved
//! - **Portable**: Can run behind any front end (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`rng`]: Seeded LCG with a Fisher-Yates shuffle
//! - [`board`]: Board generation, every symbol dealt exactly twice
//! - [`session`]: Card-flip state machine for one play-through
//! - [`schedule`]: One-shot delayed events tagged with a session generation
//! - [`game`]: Controller that owns the session, its timers and the clock
//! - [`snapshot`]: Read-only state handed to presentation code
//! - [`observer`]: Event subscription seam
//! - [`config`]: Pair count, delays and seed
//!
//! # Game Rules
//!
//! - Flip one face-down card, then a second; the pair counts as one move
//! - Both cards stay visible for the flip delay (1000ms), then match or flip back
//! - Input is ignored while a pair is being evaluated
//! - After the last match, the win is announced after a short hold (500ms)
//! - The clock starts on the first flip and stops when the win is announced
//!
//! # Example
//!
//! ```
//! use tui_memory_core::{Board, Game, GameConfig};
//! use tui_memory_types::{CardState, Symbol};
//!
//! // Deal a known layout: A B A B
//! let ab = Symbol::alphabet(2);
//! let board = Board::from_symbols(&[ab[0], ab[1], ab[0], ab[1]]);
//! let mut game = Game::with_board(GameConfig::default().with_pairs(2), board).unwrap();
//!
//! game.request_flip(0);
//! game.request_flip(2);
//! game.advance(1000); // reveal delay elapses
//!
//! let session = game.session();
//! assert_eq!(session.matched_pairs(), 1);
//! assert_eq!(session.moves(), 1);
//! assert_eq!(session.board().get(0).unwrap().state, CardState::Matched);
//! ```
//!
//! # Timing
//!
//! The caller drives time with [`Game::advance`](game::Game::advance), passing
//! real elapsed milliseconds each frame. Scheduled evaluations, the win
//! announcement and the one-second clock all fire from inside `advance`.

pub mod board;
pub mod config;
pub mod game;
pub mod observer;
pub mod rng;
pub mod schedule;
pub mod session;
pub mod snapshot;

pub use tui_memory_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Card};
pub use config::{ConfigError, GameConfig};
pub use game::Game;
pub use observer::{GameObserver, TracingObserver};
pub use rng::SimpleRng;
pub use schedule::{Scheduled, ScheduledEvent, Scheduler, TimerToken};
pub use session::{FlipOutcome, GameSession, PairResult};
pub use snapshot::{CardSnapshot, GameSnapshot};
