//! Tracing setup.
//!
//! The terminal UI owns stdout, so log lines go to a file instead.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Install a global subscriber writing to `path`, filtered by `RUST_LOG`
/// (default `info`). `None` leaves logging disabled.
///
/// Returns whether a subscriber was installed by this call.
pub fn init(path: Option<&Path>) -> Result<bool> {
    let Some(path) = path else {
        return Ok(false);
    };
    let file = File::create(path)
        .with_context(|| format!("create log file {}", path.display()))?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .is_ok();
    Ok(installed)
}
