//! JSON file-backed preference store.
//!
//! The file holds a single object:
//!
//! ```json
//! { "values": { "theme": "dark" } }
//! ```
//!
//! The whole document is rewritten on every `set`. A missing file is an empty
//! store. An unreadable or malformed file is logged and treated as empty.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::store::PreferenceStore;

const APP_DIR: &str = "tui-memory";
const FILE_NAME: &str = "prefs.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct PrefsDocument {
    #[serde(default)]
    values: BTreeMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    doc: PrefsDocument,
}

impl JsonFileStore {
    /// Open the store at `path`, loading whatever is there.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let doc = load_document(&path);
        Self { path, doc }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("creating preference directory {}", parent.display())
                })?;
            }
        }
        let json = serde_json::to_string_pretty(&self.doc)?;
        fs::write(&self.path, json)
            .with_context(|| format!("writing preferences to {}", self.path.display()))?;
        Ok(())
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.doc.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.doc.values.insert(key.to_string(), value.to_string());
        self.persist()
    }
}

fn load_document(path: &Path) -> PrefsDocument {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no preference file yet");
            return PrefsDocument::default();
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "unreadable preference file, using defaults");
            return PrefsDocument::default();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(doc) => doc,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "malformed preference file, using defaults");
            PrefsDocument::default()
        }
    }
}

/// Default preference file location.
///
/// Checks `MEMORY_PREFS_PATH`, then `$XDG_CONFIG_HOME/tui-memory/prefs.json`,
/// then `$HOME/.config/tui-memory/prefs.json`, falling back to
/// `./tui-memory-prefs.json`.
pub fn default_path() -> PathBuf {
    default_path_from(|key| std::env::var(key).ok())
}

/// [`default_path`] with a custom variable lookup.
pub fn default_path_from(lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(p) = non_empty("MEMORY_PREFS_PATH") {
        return PathBuf::from(p);
    }
    if let Some(dir) = non_empty("XDG_CONFIG_HOME") {
        return PathBuf::from(dir).join(APP_DIR).join(FILE_NAME);
    }
    if let Some(home) = non_empty("HOME") {
        return PathBuf::from(home).join(".config").join(APP_DIR).join(FILE_NAME);
    }
    PathBuf::from("tui-memory-prefs.json")
}
