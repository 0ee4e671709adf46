//! On-disk configuration for the daylog CLI.
//!
//! The only thing worth remembering between invocations is where the
//! journal lives. Read/write failures share the core error taxonomy
//! (`ConfigRead`/`ConfigWrite`) so the frontend reports them uniformly.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use daylog_core::{DaylogError, Result};

#[derive(Debug, Serialize, Deserialize)]
pub struct DaylogConfig {
    pub journal: JournalSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JournalSection {
    pub path: String,
}

impl DaylogConfig {
    pub fn new(journal_path: PathBuf) -> Self {
        Self {
            journal: JournalSection {
                path: journal_path.to_string_lossy().to_string(),
            },
        }
    }
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_journal_path() -> Result<PathBuf> {
    Ok(xdg_data_dir()?.join("journal.log"))
}

pub fn read_config(path: &Path) -> Result<DaylogConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| DaylogError::ConfigRead(format!("{}: {}", path.display(), e)))?;
    toml::from_str(&contents)
        .map_err(|e| DaylogError::ConfigRead(format!("{}: {}", path.display(), e)))
}

pub fn write_config(path: &Path, config: &DaylogConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| DaylogError::ConfigWrite(format!("{}: {}", parent.display(), e)))?;
    }
    let contents = toml::to_string_pretty(config)
        .map_err(|e| DaylogError::ConfigWrite(e.to_string()))?;
    std::fs::write(path, contents)
        .map_err(|e| DaylogError::ConfigWrite(format!("{}: {}", path.display(), e)))?;
    Ok(())
}

pub fn xdg_config_dir() -> Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("daylog"));
        }
    }
    Ok(home_dir()?.join(".config").join("daylog"))
}

pub fn xdg_data_dir() -> Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("daylog"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("daylog"))
}

fn home_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").map_err(|_| {
        DaylogError::ConfigRead("HOME is not set; cannot resolve default paths".to_string())
    })?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_round_trip() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nested").join("config.toml");

        let config = DaylogConfig::new(PathBuf::from("/srv/journal.log"));
        write_config(&config_path, &config).unwrap();

        let read_back = read_config(&config_path).unwrap();
        assert_eq!(read_back.journal.path, "/srv/journal.log");
    }

    #[test]
    fn test_read_missing_config_is_config_read() {
        let dir = tempdir().unwrap();
        let err = read_config(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, DaylogError::ConfigRead(_)));
    }

    #[test]
    fn test_read_malformed_config_is_config_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "journal = ").unwrap();
        let err = read_config(&path).unwrap_err();
        assert!(matches!(err, DaylogError::ConfigRead(_)));
    }
}
