//! Path resolution for the config file and the journal log.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{default_config_path, read_config};

/// Resolve the config file path, checking the DAYLOG_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("DAYLOG_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    Ok(default_config_path()?)
}

/// Resolve the journal log path from CLI args or config.
pub fn resolve_journal_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.journal.clone() {
        return Ok(PathBuf::from(path));
    }

    let config_path = resolve_config_path()?;
    if !config_path.exists() {
        return Err(anyhow::anyhow!(missing_config_message(&config_path)));
    }

    let config = read_config(&config_path)?;
    Ok(PathBuf::from(config.journal.path))
}

/// Error message when no journal has been configured yet.
pub fn missing_config_message(config_path: &Path) -> String {
    format!(
        "No journal configured at {}\n\nRun:\n  daylog init\n\nOr point at a log file directly:\n  DAYLOG_JOURNAL=/path/to/journal.log daylog today",
        config_path.display()
    )
}
