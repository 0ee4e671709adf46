//! # Daylog Core
//!
//! Core library for daylog - a single-user journal of date-keyed entries
//! stored in one marker-framed flat file.
//!
//! This crate provides the record store and its collaborators independent
//! of any frontend. There is no index, no database engine, and no locking:
//! every read is a full forward scan of the file and every mutation rewrites
//! the whole file.
//!
//! ## Architecture
//!
//! - **id**: calendar-date entry identifiers (`DDMMYYYY`)
//! - **scanner**: forward-only line traversal primitive
//! - **store**: marker-based read/insert/update/search/navigate operations
//! - **highlight**: tag-aware search-term highlighting
//! - **rewrite**: whole-file rewrite buffering and atomic replacement
//!
//! ## Known limitation
//!
//! Cross-process writers are not coordinated. Two simultaneous saves race,
//! and the last full-file rewrite wins, silently discarding the other
//! change. The design tolerates a single active writer by convention.

pub mod error;
pub mod fs;
pub mod highlight;
pub mod id;
pub mod rewrite;
pub mod scanner;
pub mod store;

pub use error::{DaylogError, Result};
pub use id::EntryId;
pub use store::{Draft, Entry, EntryView, FileLog, LogAccess, LogStore, Saved, SearchResults};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
