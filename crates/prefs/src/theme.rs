use anyhow::Result;
use tracing::{debug, info};

use crate::store::PreferenceStore;
use crate::types::Theme;

/// Key under which the theme is stored.
pub const THEME_KEY: &str = "theme";

/// Stored theme, or [`Theme::Light`] when absent or unrecognised.
pub fn load_theme(store: &dyn PreferenceStore) -> Theme {
    match store.get(THEME_KEY) {
        Some(raw) => Theme::from_str(&raw).unwrap_or_else(|| {
            debug!(value = %raw, "unrecognised theme preference, using light");
            Theme::default()
        }),
        None => Theme::default(),
    }
}

pub fn save_theme(store: &mut dyn PreferenceStore, theme: Theme) -> Result<()> {
    store.set(THEME_KEY, theme.as_str())?;
    info!(theme = theme.as_str(), "theme saved");
    Ok(())
}
