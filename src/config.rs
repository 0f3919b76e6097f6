use anyhow::{Context, Result};
use std::path::PathBuf;

pub(crate) const DATA_DIR_ENV: &str = "CASHBOOK_DATA_DIR";
pub(crate) const CURRENCY_ENV: &str = "CASHBOOK_CURRENCY";
pub(crate) const LOG_ENV: &str = "CASHBOOK_LOG";

const DEFAULT_CURRENCY: &str = "Rp";

/// Runtime settings resolved from the environment.
#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) data_dir: PathBuf,
    pub(crate) currency: String,
}

impl Config {
    pub(crate) fn from_env() -> Result<Self> {
        let data_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => default_data_dir()?,
        };
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;

        let currency = std::env::var(CURRENCY_ENV)
            .ok()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

        Ok(Self { data_dir, currency })
    }

    pub(crate) fn db_path(&self) -> PathBuf {
        self.data_dir.join("cashbook.db")
    }

    pub(crate) fn log_path(&self) -> PathBuf {
        self.data_dir.join("cashbook.log")
    }

    /// Where exports land when no path is given: `~/cashbook-<window>.<ext>`.
    pub(crate) fn default_export_path(&self, window: &str, ext: &str) -> String {
        home_dir()
            .join(format!("cashbook-{window}.{ext}"))
            .display()
            .to_string()
    }
}

fn default_data_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "cashbook", "Cashbook")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

/// The user's home directory, or the working directory when none is known.
fn home_dir() -> PathBuf {
    directories::UserDirs::new()
        .map(|d| d.home_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Expand a leading `~/` to the home directory.
pub(crate) fn shellexpand(path: &str) -> String {
    match path.strip_prefix("~/") {
        Some(rest) => home_dir().join(rest).display().to_string(),
        None => path.to_string(),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
