//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, preference storage).
//!
//! # Board Layout
//!
//! A board holds `2 * pairs` cards laid out on a near-square grid:
//!
//! - **Default pairs**: 8 (16 cards, a 4x4 grid)
//! - **Maximum pairs**: 16 (one per built-in glyph)
//! - **Columns**: `ceil(sqrt(cards))`, rows fill the remainder
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Event loop frame interval (~60 FPS) |
//! | `CLOCK_TICK_MS` | 1000 | Game clock resolution |
//! | `FLIP_DELAY_MS` | 1000 | Both cards stay visible before evaluation |
//! | `WIN_DELAY_MS` | 500 | Pause between the final match and the win summary |
//!
//! # Examples
//!
//! ```
//! use tui_memory_types::{grid_dims, Clock, Symbol, Theme, DEFAULT_PAIRS};
//!
//! // The reference board is 8 pairs on a 4x4 grid.
//! assert_eq!(grid_dims(DEFAULT_PAIRS * 2), (4, 4));
//!
//! // Symbols index into a fixed glyph alphabet.
//! let alphabet = Symbol::alphabet(3);
//! assert_eq!(alphabet.len(), 3);
//! assert_eq!(alphabet[0].letter(), 'A');
//!
//! // Elapsed time renders as MM:SS.
//! assert_eq!(Clock(65).to_string(), "01:05");
//!
//! // Themes toggle between light and dark.
//! assert_eq!(Theme::Light.toggle(), Theme::Dark);
//! ```

use std::fmt;

/// Number of pairs on the reference board (16 cards, 4x4).
pub const DEFAULT_PAIRS: usize = 8;

/// Largest supported pair count (one pair per built-in glyph).
pub const MAX_PAIRS: usize = SYMBOL_GLYPHS.len();

/// Event loop frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Game clock resolution (one tick per second)
pub const CLOCK_TICK_MS: u32 = 1000;

/// How long two revealed cards stay visible before they are evaluated.
pub const FLIP_DELAY_MS: u32 = 1000;

/// Pause between completing the last pair and announcing the win.
pub const WIN_DELAY_MS: u32 = 500;

/// Glyphs for the built-in symbol alphabet.
///
/// All of these are single-column in common terminal fonts.
pub const SYMBOL_GLYPHS: [char; 16] = [
    '♠', '♥', '♦', '♣', '★', '☀', '☂', '♪', '✿', '☯', '♞', '☘', '✈', '⌘', '☎', '☾',
];

/// Stable board position of a card (`0..2 * pairs`).
pub type CardId = usize;

/// A card face.
///
/// Symbols are indices into [`SYMBOL_GLYPHS`]. Equality of symbols is what
/// decides a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u8);

impl Symbol {
    /// Create a symbol from an alphabet index.
    ///
    /// Returns `None` when the index is outside the built-in alphabet.
    pub fn new(index: usize) -> Option<Self> {
        if index < MAX_PAIRS {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// The first `pairs` symbols of the alphabet (clamped to [`MAX_PAIRS`]).
    pub fn alphabet(pairs: usize) -> Vec<Symbol> {
        (0..pairs.min(MAX_PAIRS)).map(|i| Symbol(i as u8)).collect()
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// Glyph drawn on a face-up card.
    pub fn glyph(&self) -> char {
        SYMBOL_GLYPHS[self.index()]
    }

    /// ASCII letter for this symbol ('A' for index 0).
    ///
    /// Used in logs and text dumps where glyphs would be noisy.
    pub fn letter(&self) -> char {
        (b'A' + self.0) as char
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Per-card state machine.
///
/// `FaceDown → FaceUp → {Matched | FaceDown}`. `Matched` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardState {
    #[default]
    FaceDown,
    FaceUp,
    Matched,
}

impl CardState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardState::FaceDown => "faceDown",
            CardState::FaceUp => "faceUp",
            CardState::Matched => "matched",
        }
    }
}

/// Session-level gating state.
///
/// - **Idle**: board dealt, no card flipped yet, clock stopped
/// - **Running**: first flip accepted, clock advancing
/// - **Won**: every pair found and the win announced (terminal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionPhase {
    Idle,
    Running,
    Won,
}

impl SessionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionPhase::Idle => "idle",
            SessionPhase::Running => "running",
            SessionPhase::Won => "won",
        }
    }
}

/// Actions that can be applied to the game engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Reveal the card at the given board position
    Flip(CardId),
    /// Discard the board and deal a new one (also "play again")
    Reset,
}

/// Why a flip request was ignored.
///
/// Rejections are normal UI races (double clicks, clicks during the reveal
/// delay), never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipRejection {
    /// A pair is being evaluated, or the game is finished
    InputBlocked,
    /// The id is outside the board
    NoSuchCard,
    /// The card is already face up or matched
    NotFaceDown,
}

impl FlipRejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlipRejection::InputBlocked => "inputBlocked",
            FlipRejection::NoSuchCard => "noSuchCard",
            FlipRejection::NotFaceDown => "notFaceDown",
        }
    }
}

/// Events emitted by the engine for observers (renderers, loggers, tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A card was turned face up.
    CardRevealed { id: CardId, symbol: Symbol },
    /// A flip request was ignored.
    FlipRejected { id: CardId, reason: FlipRejection },
    /// A pending pair was resolved.
    PairEvaluated {
        first: CardId,
        second: CardId,
        matched: bool,
    },
    /// The game clock advanced by one second.
    Tick { elapsed_secs: u32 },
    /// All pairs were found; final counters for the summary.
    Won { moves: u32, elapsed_secs: u32 },
    /// A new board was dealt.
    Reset { generation: u64 },
    /// A delayed event from a replaced session was discarded.
    StaleTimerDropped { generation: u64 },
}

/// Elapsed seconds formatted as `MM:SS`.
///
/// Minutes are zero-padded to two digits and keep growing past 99.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Clock(pub u32);

impl Clock {
    pub fn minutes(&self) -> u32 {
        self.0 / 60
    }

    pub fn seconds(&self) -> u32 {
        self.0 % 60
    }
}

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes(), self.seconds())
    }
}

/// Colour scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a stored theme value (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_memory_types::Theme;
    ///
    /// assert_eq!(Theme::from_str("dark"), Some(Theme::Dark));
    /// assert_eq!(Theme::from_str("Light"), Some(Theme::Light));
    /// assert_eq!(Theme::from_str("sepia"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Stored representation ("light" / "dark")
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Grid dimensions `(columns, rows)` for a board of `card_count` cards.
///
/// # Examples
///
/// ```
/// use tui_memory_types::grid_dims;
///
/// assert_eq!(grid_dims(16), (4, 4));
/// assert_eq!(grid_dims(2), (2, 1));
/// assert_eq!(grid_dims(6), (3, 2));
/// assert_eq!(grid_dims(0), (0, 0));
/// ```
pub fn grid_dims(card_count: usize) -> (usize, usize) {
    if card_count == 0 {
        return (0, 0);
    }
    let mut cols = 1;
    while cols * cols < card_count {
        cols += 1;
    }
    let rows = card_count.div_ceil(cols);
    (cols, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_timing_defaults() {
        assert_eq!(FLIP_DELAY_MS, 1000);
        assert_eq!(WIN_DELAY_MS, 500);
        assert_eq!(CLOCK_TICK_MS, 1000);
        assert_eq!(DEFAULT_PAIRS, 8);
    }

    #[test]
    fn alphabet_symbols_are_distinct() {
        let alphabet = Symbol::alphabet(MAX_PAIRS);
        assert_eq!(alphabet.len(), MAX_PAIRS);
        for (i, a) in alphabet.iter().enumerate() {
            for b in &alphabet[i + 1..] {
                assert_ne!(a, b);
                assert_ne!(a.glyph(), b.glyph());
            }
        }
    }

    #[test]
    fn alphabet_clamps_to_glyph_count() {
        assert_eq!(Symbol::alphabet(MAX_PAIRS + 5).len(), MAX_PAIRS);
        assert!(Symbol::new(MAX_PAIRS).is_none());
        assert_eq!(Symbol::new(1).map(|s| s.letter()), Some('B'));
    }

    #[test]
    fn clock_formats_minutes_and_seconds() {
        assert_eq!(Clock(0).to_string(), "00:00");
        assert_eq!(Clock(59).to_string(), "00:59");
        assert_eq!(Clock(65).to_string(), "01:05");
        assert_eq!(Clock(6000).to_string(), "100:00");
    }

    #[test]
    fn theme_round_trips_through_str() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_str(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
    }

    #[test]
    fn grid_is_near_square() {
        assert_eq!(grid_dims(4), (2, 2));
        assert_eq!(grid_dims(10), (4, 3));
        assert_eq!(grid_dims(32), (6, 6));
    }
}
