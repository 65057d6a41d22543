//! Tracing subscriber setup.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Logs to stdout, filtered by `RUST_LOG` (default `info`).
pub fn init_stdout() {
    // Don't panic if already initialized
    let _ = tracing_subscriber::fmt().with_env_filter(env_filter()).try_init();
}

/// Logs to `path` without colors so the terminal screen stays clean.
pub fn init_file(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
