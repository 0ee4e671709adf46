//! Result types for record store operations.
//!
//! Entry content never carries a trailing newline at this level; the store
//! appends the line terminator when writing.

use serde::Serialize;

use crate::id::EntryId;

/// One stored journal record: an ID plus its raw content block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub id: EntryId,
    pub content: String,
}

/// Edit-mode fetch result.
///
/// `existing` is false when the ID has no entry yet; the content is then
/// empty and a subsequent save of today's ID will create the entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Draft {
    pub id: EntryId,
    pub content: String,
    pub existing: bool,
}

/// A single-entry view with its navigation neighbors.
///
/// Neighbors follow display order: entries are stored newest-created first,
/// so the entry physically above the target is `next` and the one below is
/// `previous`. Recomputed on every view, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryView {
    pub id: EntryId,
    pub content: String,
    pub previous: Option<EntryId>,
    pub next: Option<EntryId>,
}

/// One matched content line from a search.
///
/// `offset` is 1-based within the entry. Only the first match inside an
/// entry carries the ID; later matches in the same entry leave it empty so
/// the presentation layer does not repeat the entry header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchMatch {
    pub id: Option<EntryId>,
    pub line: String,
    pub offset: usize,
}

/// All matches for one search term, with the total count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub matches: Vec<SearchMatch>,
    pub total: usize,
}

/// Outcome of a save: the entry existed and was rewritten, or the ID was
/// today's and a new entry was spliced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Saved {
    Updated,
    Created,
}
