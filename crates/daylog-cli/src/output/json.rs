//! JSON output formatting for journal results.

use daylog_core::store::{Entry, SearchResults};
use daylog_core::{Draft, EntryView};

/// Convert one entry to JSON for output.
pub fn entry_json(entry: &Entry) -> serde_json::Value {
    serde_json::json!({
        "id": entry.id,
        "label": entry.id.label().ok(),
        "content": entry.content,
    })
}

/// Convert multiple entries to a JSON array for output.
pub fn entries_json(entries: &[Entry]) -> Vec<serde_json::Value> {
    entries.iter().map(entry_json).collect()
}

pub fn draft_json(draft: &Draft) -> serde_json::Value {
    serde_json::json!({
        "id": draft.id,
        "label": draft.id.label().ok(),
        "content": draft.content,
        "existing": draft.existing,
    })
}

pub fn view_json(view: &EntryView) -> serde_json::Value {
    serde_json::json!({
        "id": view.id,
        "label": view.id.label().ok(),
        "content": view.content,
        "previous": view.previous,
        "next": view.next,
    })
}

pub fn search_json(results: &SearchResults) -> serde_json::Value {
    let matches: Vec<serde_json::Value> = results
        .matches
        .iter()
        .map(|m| {
            serde_json::json!({
                "id": m.id,
                "line": m.line,
                "offset": m.offset,
            })
        })
        .collect();
    serde_json::json!({
        "matches": matches,
        "total": results.total,
    })
}
