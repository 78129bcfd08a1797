//! TUI Memory (workspace facade crate).
//!
//! Re-exports the workspace crates under short names
//! (`tui_memory::{core,input,prefs,term,types}`) and holds the pieces the
//! binary needs on top of them: environment configuration, log setup and the
//! input-dispatching [`app::App`].

pub mod app;
pub mod config;
pub mod logging;

pub use tui_memory_core as core;
pub use tui_memory_input as input;
pub use tui_memory_prefs as prefs;
pub use tui_memory_term as term;
pub use tui_memory_types as types;
