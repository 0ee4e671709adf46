//! Application context for the daylog CLI.
//!
//! Bundles the parsed CLI arguments with the lazily-resolved journal path
//! so handlers do not re-thread the same parameters.

use once_cell::unsync::OnceCell;
use std::path::PathBuf;

use daylog_core::store::LogStore;
use daylog_core::{EntryId, FileLog};

use crate::cli::Cli;

use super::resolver::resolve_journal_path;

/// Per-invocation context handed to every command handler.
pub struct AppContext<'a> {
    cli: &'a Cli,
    journal_path: OnceCell<PathBuf>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            journal_path: OnceCell::new(),
        }
    }

    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Today's entry ID, supplied explicitly to every core call that needs
    /// it; the store itself never consults the clock.
    pub fn today(&self) -> EntryId {
        EntryId::today()
    }

    /// The journal path, resolving flag > env > config lazily.
    pub fn journal_path(&self) -> anyhow::Result<&PathBuf> {
        self.journal_path
            .get_or_try_init(|| resolve_journal_path(self.cli))
    }

    /// Open the record store, creating the log file on first access.
    pub fn open_store(&self) -> anyhow::Result<LogStore<FileLog>> {
        let store = LogStore::open_path(self.journal_path()?);
        store.init_if_missing()?;
        Ok(store)
    }
}
