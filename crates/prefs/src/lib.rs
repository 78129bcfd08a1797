//! Preference storage.
//!
//! A tiny key-value store for settings that outlive a game session. The only
//! key the game uses today is the colour theme (`"theme"` → `"light"` /
//! `"dark"`, defaulting to light).
//!
//! - [`store`]: the [`PreferenceStore`] trait and an in-memory implementation
//! - [`file`]: a JSON file-backed store for the binary
//! - [`theme`]: typed load/save of the theme preference
//!
//! ```
//! use tui_memory_prefs::{load_theme, save_theme, MemoryStore};
//! use tui_memory_types::Theme;
//!
//! let mut store = MemoryStore::new();
//! assert_eq!(load_theme(&store), Theme::Light);
//!
//! save_theme(&mut store, Theme::Dark).unwrap();
//! assert_eq!(load_theme(&store), Theme::Dark);
//! ```

pub mod file;
pub mod store;
pub mod theme;

pub use tui_memory_types as types;

pub use file::{default_path, default_path_from, JsonFileStore};
pub use store::{MemoryStore, PreferenceStore};
pub use theme::{load_theme, save_theme, THEME_KEY};
