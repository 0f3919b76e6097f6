use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LOG_ENV;

/// Send `tracing` events to a log file. The terminal stays clean for the TUI.
///
/// The level comes from `CASHBOOK_LOG` (e.g. `debug`, `cashbook=trace`),
/// defaulting to `info`.
pub(crate) fn init(log_path: &Path) -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    let file_log = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_log)
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(())
}
