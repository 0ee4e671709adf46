//! Output formatting helpers for the CLI.
//!
//! This module renders the core's structured results as terminal text or
//! JSON; nothing in the core knows about either vocabulary.

mod json;
mod text;

// Re-export public API
pub use json::{draft_json, entries_json, entry_json, search_json, view_json};
pub use text::{print_draft, print_entry_list, print_search, print_view};
