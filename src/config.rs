//! Runtime configuration from environment variables.
//!
//! Missing or unparsable values fall back to defaults. The pair count is only
//! checked later, by [`GameConfig::validate`].

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::GameConfig;
use crate::prefs::default_path_from;

/// Default log file, relative to the working directory.
pub const DEFAULT_LOG_PATH: &str = "tui-memory.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub game: GameConfig,
    pub prefs_path: PathBuf,
    /// `None` disables logging.
    pub log_path: Option<PathBuf>,
}

impl AppConfig {
    /// Read `MEMORY_*` variables from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = GameConfig::default();
        let pairs: usize = parsed(&lookup, "MEMORY_PAIRS").unwrap_or(defaults.pairs);
        let flip_delay_ms: u32 =
            parsed(&lookup, "MEMORY_FLIP_DELAY_MS").unwrap_or(defaults.flip_delay_ms);
        let win_delay_ms: u32 =
            parsed(&lookup, "MEMORY_WIN_DELAY_MS").unwrap_or(defaults.win_delay_ms);
        let seed: u32 = parsed(&lookup, "MEMORY_SEED").unwrap_or_else(clock_seed);

        let log_path = match lookup("MEMORY_LOG_PATH").map(|s| s.trim().to_string()) {
            Some(s) if s.eq_ignore_ascii_case("off") => None,
            Some(s) if !s.is_empty() => Some(PathBuf::from(s)),
            _ => Some(PathBuf::from(DEFAULT_LOG_PATH)),
        };

        Self {
            game: defaults
                .with_pairs(pairs)
                .with_delays(flip_delay_ms, win_delay_ms)
                .with_seed(seed),
            prefs_path: default_path_from(&lookup),
            log_path,
        }
    }
}

fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}

/// Seed derived from the wall clock, so each launch deals differently.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
}
