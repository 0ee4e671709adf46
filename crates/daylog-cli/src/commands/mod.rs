//! Command handlers for the daylog CLI.
//!
//! Each handler is a thin translation from parsed arguments to one or two
//! core calls plus rendering.

mod edit;
mod init;
mod list;
mod search;
mod show;
mod today;

// Re-export public API
pub use edit::handle_edit;
pub use init::handle_init;
pub use list::handle_list;
pub use search::handle_search;
pub use show::handle_show;
pub use today::handle_today;
