//! The marker-based record store.
//!
//! One shared text file holds every entry, framed by literal sentinel
//! markers. There is no index and no per-entry file: every operation is a
//! full forward scan driven by the [`LineScanner`], and every mutation
//! rebuilds the complete file image through a [`RewriteBuffer`] before
//! handing it to the accessor.
//!
//! Marker detection is "line contains token", never exact-line equality,
//! matching the stored format's indented marker lines. Duplicate IDs are
//! possible; every operation targets the first occurrence scanning forward
//! from `BEGIN ENTRIES`, so an earlier duplicate shadows later ones.

mod access;
mod iter;
mod types;

pub use access::{FileLog, LogAccess};
pub use iter::Entries;
pub use types::{Draft, Entry, EntryView, Saved, SearchMatch, SearchResults};

use std::path::PathBuf;

use crate::error::{DaylogError, Result};
use crate::id::EntryId;
use crate::rewrite::RewriteBuffer;
use crate::scanner::LineScanner;

/// Opens the sequence of entries.
pub const BEGIN_ENTRIES: &str = "<!--- BEGIN ENTRIES >";
/// Closes the sequence of entries.
pub const END_ENTRIES: &str = "<!--- END ENTRIES >";
/// Opens one entry; carries the entry's ID.
pub const ENTRY_ID: &str = "<!--- ENTRY ID = ";
/// Opens an entry's content block; carries the same ID.
pub const CONTENT_ID: &str = "<!--- CONTENT ID = ";
/// Closes an entry's content block.
pub const END_CONTENT: &str = "<!--- END CONTENT >";

/// The entry-open marker for a specific ID.
fn entry_marker(id: &EntryId) -> String {
    format!("{}{} >", ENTRY_ID, id)
}

/// The content-open marker for a specific ID.
fn content_marker(id: &EntryId) -> String {
    format!("{}{} >", CONTENT_ID, id)
}

fn join_content(lines: Vec<String>) -> String {
    lines.join("\n")
}

/// Case-insensitive substring test, as an explicit anchored scan.
///
/// For every start position whose character equals the term's first
/// character in either ASCII case, the full term is attempted; any full
/// match succeeds. Once the remaining line is shorter than the term the
/// scan ends. Deliberately explicit rather than a library primitive so the
/// matching rule stays testable on its own.
pub fn find_in_line(term: &str, line: &str) -> bool {
    let term: Vec<char> = term.chars().collect();
    if term.is_empty() {
        return false;
    }
    let chars: Vec<char> = line.chars().collect();

    for start in 0..chars.len() {
        if !chars[start].eq_ignore_ascii_case(&term[0]) {
            continue;
        }
        if chars.len() - start < term.len() {
            return false;
        }
        if chars[start..start + term.len()]
            .iter()
            .zip(&term)
            .all(|(a, b)| a.eq_ignore_ascii_case(b))
        {
            return true;
        }
    }
    false
}

/// Single-entry view scan states.
enum NavScan {
    /// Looking for the target content marker, remembering the last
    /// content-open ID seen on the way (the `next` neighbor).
    Seeking,
    /// Inside the target's content block.
    Accumulating,
    /// Past the content block, looking for the first following content-open
    /// ID (the `previous` neighbor).
    SeekingPrevious,
}

/// The record store over an injected log accessor.
pub struct LogStore<A: LogAccess> {
    access: A,
}

impl LogStore<FileLog> {
    /// A store over the log file at `path`.
    pub fn open_path(path: impl Into<PathBuf>) -> Self {
        LogStore::new(FileLog::new(path))
    }
}

impl<A: LogAccess> LogStore<A> {
    pub fn new(access: A) -> Self {
        LogStore { access }
    }

    pub fn access(&self) -> &A {
        &self.access
    }

    /// Create the log, containing only the two boundary markers, when it
    /// does not exist yet. Returns whether it was created.
    pub fn init_if_missing(&self) -> Result<bool> {
        if self.access.exists() {
            return Ok(false);
        }
        let mut image = RewriteBuffer::new();
        image.push(BEGIN_ENTRIES);
        image.push(END_ENTRIES);
        self.access.replace(image.contents())?;
        Ok(true)
    }

    /// Edit-mode fetch: the entry's raw content, or a blank draft when the
    /// ID has no entry yet.
    ///
    /// # Errors
    ///
    /// `NotFound` when the entry-open marker exists but its content-open
    /// marker is unreachable; `Structure` when the content block is never
    /// closed.
    pub fn read_or_create(&self, id: &EntryId) -> Result<Draft> {
        let mut scan = LineScanner::new(self.access.open()?);

        if scan.seek_contains(&entry_marker(id))?.is_none() {
            return Ok(Draft {
                id: id.clone(),
                content: String::new(),
                existing: false,
            });
        }

        if scan.seek_contains(&content_marker(id))?.is_none() {
            return Err(DaylogError::NotFound(id.to_string()));
        }

        let lines = scan.accumulate_until(END_CONTENT)?.ok_or_else(|| {
            DaylogError::Structure(format!("content never closed for entry {}", id))
        })?;

        Ok(Draft {
            id: id.clone(),
            content: join_content(lines),
            existing: true,
        })
    }

    /// Lazy forward-only traversal of every entry in on-disk order.
    ///
    /// The sequence ends successfully at `END ENTRIES`; a stream that ends
    /// first, or an entry missing its content markers, yields `Structure`.
    /// Restart by calling `entries()` again.
    pub fn entries(&self) -> Result<Entries<A::Reader>> {
        Ok(Entries::new(LineScanner::new(self.access.open()?)))
    }

    /// View one entry with its navigation neighbors.
    ///
    /// Entries sit newest-created first, so the last content-open ID seen
    /// before the target is the `next` neighbor in display order and the
    /// first one after it is `previous`.
    ///
    /// # Errors
    ///
    /// `NotFound` when the target's content-open marker is never reached;
    /// `Structure` when its content block is never closed.
    pub fn view(&self, id: &EntryId) -> Result<EntryView> {
        let mut scan = LineScanner::new(self.access.open()?);
        let target = content_marker(id);

        let mut state = NavScan::Seeking;
        let mut next = None;
        let mut previous = None;
        let mut content = Vec::new();

        while let Some(line) = scan.next_line()? {
            match state {
                NavScan::Seeking => {
                    if line.contains(&target) {
                        state = NavScan::Accumulating;
                    } else if line.contains(CONTENT_ID) {
                        next = EntryId::from_marker_line(&line);
                    }
                }
                NavScan::Accumulating => {
                    if line.contains(END_CONTENT) {
                        state = NavScan::SeekingPrevious;
                    } else {
                        content.push(line);
                    }
                }
                NavScan::SeekingPrevious => {
                    if line.contains(CONTENT_ID) {
                        previous = EntryId::from_marker_line(&line);
                        break;
                    }
                }
            }
        }

        match state {
            NavScan::Seeking => Err(DaylogError::NotFound(id.to_string())),
            NavScan::Accumulating => Err(DaylogError::Structure(format!(
                "content never closed for entry {}",
                id
            ))),
            NavScan::SeekingPrevious => Ok(EntryView {
                id: id.clone(),
                content: join_content(content),
                previous,
                next,
            }),
        }
    }

    /// Case-insensitive substring search over every entry's content lines.
    ///
    /// Offsets are 1-based within the entry; only the first match in an
    /// entry carries the ID. An empty term is a no-op success: zero
    /// matches, no traversal, no mutation.
    pub fn search(&self, term: &str) -> Result<SearchResults> {
        if term.is_empty() {
            return Ok(SearchResults::default());
        }

        let mut scan = LineScanner::new(self.access.open()?);
        let mut matches = Vec::new();

        'entries: loop {
            let id = loop {
                let Some(line) = scan.next_line()? else {
                    return Err(DaylogError::Structure(format!(
                        "end of log before {}",
                        END_ENTRIES
                    )));
                };
                if line.contains(END_ENTRIES) {
                    break 'entries;
                }
                if line.contains(ENTRY_ID) {
                    break EntryId::from_marker_line(&line).ok_or_else(|| {
                        DaylogError::Structure(format!("unreadable ID in marker: {}", line))
                    })?;
                }
            };

            if scan.seek_contains(&content_marker(&id))?.is_none() {
                return Err(DaylogError::Structure(format!(
                    "content marker missing for entry {}",
                    id
                )));
            }

            let mut offset = 0;
            let mut first_in_entry = true;
            loop {
                let Some(line) = scan.next_line()? else {
                    return Err(DaylogError::Structure(format!(
                        "content never closed for entry {}",
                        id
                    )));
                };
                if line.contains(END_CONTENT) {
                    break;
                }
                offset += 1;
                if find_in_line(term, &line) {
                    matches.push(SearchMatch {
                        id: first_in_entry.then(|| id.clone()),
                        line,
                        offset,
                    });
                    first_in_entry = false;
                }
            }
        }

        let total = matches.len();
        Ok(SearchResults { matches, total })
    }

    /// Replace the content block of an existing entry, preserving every
    /// other line of the file verbatim.
    ///
    /// An ID that is absent from the log and equals `today` delegates to
    /// [`create`](Self::create); an absent ID otherwise is `NotFound`.
    pub fn save(&self, id: &EntryId, content: &str, today: &EntryId) -> Result<Saved> {
        let mut scan = LineScanner::new(self.access.open()?);
        let mut image = RewriteBuffer::new();

        // Locating phase, identical to read_or_create: entry-open then
        // content-open, copying everything through both markers.
        let token = entry_marker(id);
        let mut found = false;
        while let Some(line) = scan.next_line()? {
            let hit = line.contains(&token);
            image.push(&line);
            if hit {
                found = true;
                break;
            }
        }
        if !found {
            if id == today {
                self.create(id, content)?;
                return Ok(Saved::Created);
            }
            return Err(DaylogError::NotFound(id.to_string()));
        }

        let token = content_marker(id);
        let mut found = false;
        while let Some(line) = scan.next_line()? {
            let hit = line.contains(&token);
            image.push(&line);
            if hit {
                found = true;
                break;
            }
        }
        if !found {
            return Err(DaylogError::NotFound(id.to_string()));
        }

        image.push(content);

        let Some(end_line) = scan.seek_contains(END_CONTENT)? else {
            return Err(DaylogError::Structure(format!(
                "content never closed for entry {}",
                id
            )));
        };
        image.push(&end_line);

        while let Some(line) = scan.next_line()? {
            image.push(&line);
        }

        self.access.replace(image.contents())?;
        Ok(Saved::Updated)
    }

    /// Splice a new entry immediately after `BEGIN ENTRIES` (newest-created
    /// first), leaving every original line unchanged.
    ///
    /// # Errors
    ///
    /// `Structure` when the `BEGIN ENTRIES` marker is never found.
    pub fn create(&self, id: &EntryId, content: &str) -> Result<()> {
        let mut scan = LineScanner::new(self.access.open()?);
        let mut image = RewriteBuffer::new();

        let mut found = false;
        while let Some(line) = scan.next_line()? {
            let hit = line.contains(BEGIN_ENTRIES);
            image.push(&line);
            if hit {
                found = true;
                break;
            }
        }
        if !found {
            return Err(DaylogError::Structure(format!(
                "{} marker missing",
                BEGIN_ENTRIES
            )));
        }

        image.push(&format!("  {}", entry_marker(id)));
        image.push(&format!("    {}", content_marker(id)));
        image.push(content);
        image.push(END_CONTENT);
        image.push("");

        while let Some(line) = scan.next_line()? {
            image.push(&line);
        }

        self.access.replace(image.contents())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io::Cursor;

    /// In-memory log for exercising the store without any file I/O.
    struct MemLog {
        contents: RefCell<Option<String>>,
    }

    impl MemLog {
        fn new(contents: &str) -> Self {
            MemLog {
                contents: RefCell::new(Some(contents.to_string())),
            }
        }

        fn missing() -> Self {
            MemLog {
                contents: RefCell::new(None),
            }
        }

        fn snapshot(&self) -> String {
            self.contents.borrow().clone().unwrap_or_default()
        }
    }

    impl LogAccess for MemLog {
        type Reader = Cursor<Vec<u8>>;

        fn open(&self) -> Result<Self::Reader> {
            match &*self.contents.borrow() {
                Some(text) => Ok(Cursor::new(text.clone().into_bytes())),
                None => Err(DaylogError::IoRead("no such log".to_string())),
            }
        }

        fn replace(&self, contents: &str) -> Result<()> {
            *self.contents.borrow_mut() = Some(contents.to_string());
            Ok(())
        }

        fn exists(&self) -> bool {
            self.contents.borrow().is_some()
        }
    }

    fn id(s: &str) -> EntryId {
        s.parse().expect("test id")
    }

    fn empty_store() -> LogStore<MemLog> {
        LogStore::new(MemLog::new("<!--- BEGIN ENTRIES >\n<!--- END ENTRIES >\n"))
    }

    fn two_entry_store() -> LogStore<MemLog> {
        LogStore::new(MemLog::new(concat!(
            "<!--- BEGIN ENTRIES >\n",
            "  <!--- ENTRY ID = 02092021 >\n",
            "    <!--- CONTENT ID = 02092021 >\n",
            "second day\n",
            "<!--- END CONTENT >\n",
            "\n",
            "  <!--- ENTRY ID = 01092021 >\n",
            "    <!--- CONTENT ID = 01092021 >\n",
            "first line\n",
            "Cats are great\n",
            "<!--- END CONTENT >\n",
            "\n",
            "<!--- END ENTRIES >\n",
        )))
    }

    #[test]
    fn test_find_in_line_case_insensitive() {
        assert!(find_in_line("hello", "well HELLO there"));
        assert!(find_in_line("hello", "Hello there"));
        assert!(!find_in_line("hello", "help"));
    }

    #[test]
    fn test_find_in_line_term_longer_than_remainder() {
        assert!(!find_in_line("catalog", "the cat"));
        assert!(find_in_line("cat", "concat"));
    }

    #[test]
    fn test_find_in_line_empty_term() {
        assert!(!find_in_line("", "anything"));
    }

    #[test]
    fn test_init_if_missing_writes_boundary_markers() {
        let store = LogStore::new(MemLog::missing());
        assert!(store.init_if_missing().unwrap());
        assert_eq!(
            store.access().snapshot(),
            "<!--- BEGIN ENTRIES >\n<!--- END ENTRIES >\n"
        );
        assert!(!store.init_if_missing().unwrap());
    }

    #[test]
    fn test_read_or_create_blank_draft_for_unknown_id() {
        let store = two_entry_store();
        let draft = store.read_or_create(&id("05092021")).unwrap();
        assert!(!draft.existing);
        assert_eq!(draft.content, "");
    }

    #[test]
    fn test_read_or_create_returns_raw_content() {
        let store = two_entry_store();
        let draft = store.read_or_create(&id("01092021")).unwrap();
        assert!(draft.existing);
        assert_eq!(draft.content, "first line\nCats are great");
    }

    #[test]
    fn test_read_or_create_missing_content_marker_is_not_found() {
        let store = LogStore::new(MemLog::new(concat!(
            "<!--- BEGIN ENTRIES >\n",
            "  <!--- ENTRY ID = 01092021 >\n",
            "<!--- END ENTRIES >\n",
        )));
        let err = store.read_or_create(&id("01092021")).unwrap_err();
        assert!(matches!(err, DaylogError::NotFound(_)));
    }

    #[test]
    fn test_read_or_create_unclosed_content_is_structure_fault() {
        let store = LogStore::new(MemLog::new(concat!(
            "<!--- BEGIN ENTRIES >\n",
            "  <!--- ENTRY ID = 01092021 >\n",
            "    <!--- CONTENT ID = 01092021 >\n",
            "dangling\n",
        )));
        let err = store.read_or_create(&id("01092021")).unwrap_err();
        assert!(matches!(err, DaylogError::Structure(_)));
    }

    #[test]
    fn test_entries_in_on_disk_order() {
        let store = two_entry_store();
        let all: Vec<Entry> = store
            .entries()
            .unwrap()
            .collect::<Result<Vec<_>>>()
            .unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, id("02092021"));
        assert_eq!(all[0].content, "second day");
        assert_eq!(all[1].id, id("01092021"));
    }

    #[test]
    fn test_entries_empty_store() {
        let store = empty_store();
        assert_eq!(store.entries().unwrap().count(), 0);
    }

    #[test]
    fn test_entries_unclosed_content_is_structure_fault() {
        let store = LogStore::new(MemLog::new(concat!(
            "<!--- BEGIN ENTRIES >\n",
            "  <!--- ENTRY ID = 01092021 >\n",
            "    <!--- CONTENT ID = 01092021 >\n",
            "dangling\n",
        )));
        let results: Vec<Result<Entry>> = store.entries().unwrap().collect();
        assert_eq!(results.len(), 1);
        assert!(matches!(results[0], Err(DaylogError::Structure(_))));
    }

    #[test]
    fn test_entries_missing_end_marker_is_structure_fault() {
        let store = LogStore::new(MemLog::new("<!--- BEGIN ENTRIES >\n"));
        let results: Vec<Result<Entry>> = store.entries().unwrap().collect();
        assert_eq!(results.len(), 1);
        assert!(matches!(results[0], Err(DaylogError::Structure(_))));
    }

    #[test]
    fn test_view_neighbors_follow_display_order() {
        let store = two_entry_store();

        let view = store.view(&id("01092021")).unwrap();
        assert_eq!(view.content, "first line\nCats are great");
        assert_eq!(view.next, Some(id("02092021")));
        assert_eq!(view.previous, None);

        let view = store.view(&id("02092021")).unwrap();
        assert_eq!(view.next, None);
        assert_eq!(view.previous, Some(id("01092021")));
    }

    #[test]
    fn test_view_unknown_id_is_not_found() {
        let store = two_entry_store();
        let err = store.view(&id("05092021")).unwrap_err();
        assert!(matches!(err, DaylogError::NotFound(_)));
    }

    #[test]
    fn test_search_tags_first_match_only() {
        let store = two_entry_store();
        let results = store.search("cat").unwrap();
        assert_eq!(results.total, 1);
        assert_eq!(results.matches[0].id, Some(id("01092021")));
        assert_eq!(results.matches[0].line, "Cats are great");
        assert_eq!(results.matches[0].offset, 2);
    }

    #[test]
    fn test_search_later_matches_in_entry_carry_no_id() {
        let store = LogStore::new(MemLog::new(concat!(
            "<!--- BEGIN ENTRIES >\n",
            "  <!--- ENTRY ID = 01092021 >\n",
            "    <!--- CONTENT ID = 01092021 >\n",
            "cat one\n",
            "cat two\n",
            "<!--- END CONTENT >\n",
            "\n",
            "<!--- END ENTRIES >\n",
        )));
        let results = store.search("cat").unwrap();
        assert_eq!(results.total, 2);
        assert_eq!(results.matches[0].id, Some(id("01092021")));
        assert_eq!(results.matches[0].offset, 1);
        assert_eq!(results.matches[1].id, None);
        assert_eq!(results.matches[1].offset, 2);
    }

    #[test]
    fn test_search_empty_term_is_noop() {
        let store = two_entry_store();
        let before = store.access().snapshot();
        let results = store.search("").unwrap();
        assert_eq!(results.total, 0);
        assert!(results.matches.is_empty());
        assert_eq!(store.access().snapshot(), before);
    }

    #[test]
    fn test_save_round_trip() {
        let store = two_entry_store();
        let target = id("01092021");
        let saved = store
            .save(&target, "rewritten\ncontent", &id("05092021"))
            .unwrap();
        assert_eq!(saved, Saved::Updated);

        let draft = store.read_or_create(&target).unwrap();
        assert_eq!(draft.content, "rewritten\ncontent");

        // every other entry untouched
        let other = store.read_or_create(&id("02092021")).unwrap();
        assert_eq!(other.content, "second day");
    }

    #[test]
    fn test_save_unknown_id_is_not_found() {
        let store = two_entry_store();
        let err = store
            .save(&id("05092021"), "content", &id("06092021"))
            .unwrap_err();
        assert!(matches!(err, DaylogError::NotFound(_)));
    }

    #[test]
    fn test_save_unknown_today_id_creates() {
        let store = two_entry_store();
        let today = id("05092021");
        let saved = store.save(&today, "fresh", &today).unwrap();
        assert_eq!(saved, Saved::Created);

        let all: Vec<Entry> = store
            .entries()
            .unwrap()
            .collect::<Result<Vec<_>>>()
            .unwrap();
        assert_eq!(all[0].id, today);
        assert_eq!(all[0].content, "fresh");
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_create_into_empty_store() {
        let store = empty_store();
        store.create(&id("01092021"), "hi").unwrap();
        assert_eq!(
            store.access().snapshot(),
            concat!(
                "<!--- BEGIN ENTRIES >\n",
                "  <!--- ENTRY ID = 01092021 >\n",
                "    <!--- CONTENT ID = 01092021 >\n",
                "hi\n",
                "<!--- END CONTENT >\n",
                "\n",
                "<!--- END ENTRIES >\n",
            )
        );
    }

    #[test]
    fn test_create_places_new_entry_first() {
        let store = two_entry_store();
        store.create(&id("03092021"), "third day").unwrap();
        let all: Vec<Entry> = store
            .entries()
            .unwrap()
            .collect::<Result<Vec<_>>>()
            .unwrap();
        assert_eq!(all[0].id, id("03092021"));
        assert_eq!(all[0].content, "third day");
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_create_without_begin_marker_is_structure_fault() {
        let store = LogStore::new(MemLog::new("no markers here\n"));
        let err = store.create(&id("01092021"), "hi").unwrap_err();
        assert!(matches!(err, DaylogError::Structure(_)));
    }

    #[test]
    fn test_duplicate_id_first_match_wins() {
        let store = LogStore::new(MemLog::new(concat!(
            "<!--- BEGIN ENTRIES >\n",
            "  <!--- ENTRY ID = 01092021 >\n",
            "    <!--- CONTENT ID = 01092021 >\n",
            "shadowing\n",
            "<!--- END CONTENT >\n",
            "\n",
            "  <!--- ENTRY ID = 01092021 >\n",
            "    <!--- CONTENT ID = 01092021 >\n",
            "shadowed\n",
            "<!--- END CONTENT >\n",
            "\n",
            "<!--- END ENTRIES >\n",
        )));
        let target = id("01092021");

        let draft = store.read_or_create(&target).unwrap();
        assert_eq!(draft.content, "shadowing");

        store.save(&target, "updated", &target).unwrap();
        let all: Vec<Entry> = store
            .entries()
            .unwrap()
            .collect::<Result<Vec<_>>>()
            .unwrap();
        assert_eq!(all[0].content, "updated");
        assert_eq!(all[1].content, "shadowed");
    }

    #[test]
    fn test_operations_on_missing_log_are_io_read() {
        let store = LogStore::new(MemLog::missing());
        assert!(matches!(
            store.read_or_create(&id("01092021")),
            Err(DaylogError::IoRead(_))
        ));
        assert!(matches!(store.entries(), Err(DaylogError::IoRead(_))));
        assert!(matches!(
            store.save(&id("01092021"), "x", &id("01092021")),
            Err(DaylogError::IoRead(_))
        ));
    }
}
