//! Application-level utilities for the daylog CLI.
//!
//! This module provides:
//! - Path resolution for the config file and the journal log
//! - The per-invocation context handed to every command handler

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
pub use resolver::{missing_config_message, resolve_config_path, resolve_journal_path};
