//! Terminal presentation for the memory game.
//!
//! Rendering goes through a plain framebuffer rather than a widget toolkit:
//! `GameView` paints a `GameSnapshot` into a `FrameBuffer`, and
//! `TerminalRenderer` flushes the changed cells to the terminal.
//!
//! Everything except `renderer` is pure and unit-testable.

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use tui_memory_core as core;
pub use tui_memory_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, BoardLayout, GameView, ViewContext, Viewport};
pub use palette::Palette;
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, TerminalRenderer};
