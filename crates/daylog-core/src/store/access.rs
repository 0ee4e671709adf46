//! Log accessor trait and the filesystem implementation.
//!
//! The record store never touches a path directly; it goes through an
//! injected [`LogAccess`], which keeps the traversal and splicing logic
//! testable against in-memory sources.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{DaylogError, Result};
use crate::fs::replace_file;

/// Access to the shared log: a fresh forward scan, a whole-file
/// replacement, and an existence probe.
///
/// Implementations must hand out a reader positioned at the start of the
/// log on every `open` call; the store owns no cursor state between
/// operations. `replace` must swap in the complete new image in one shot.
/// No locking is required or expected: cross-process writers race by
/// design, last rewrite wins.
pub trait LogAccess {
    type Reader: BufRead;

    /// Open the log for a fresh forward scan.
    ///
    /// # Errors
    ///
    /// Returns `IoRead` if the log cannot be opened, including when it does
    /// not exist yet.
    fn open(&self) -> Result<Self::Reader>;

    /// Replace the entire log with `contents`.
    ///
    /// # Errors
    ///
    /// Returns `IoWrite` on any write failure.
    fn replace(&self, contents: &str) -> Result<()>;

    /// Whether the log exists at all.
    fn exists(&self) -> bool;
}

/// The on-disk log file.
#[derive(Debug, Clone)]
pub struct FileLog {
    path: PathBuf,
}

impl FileLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileLog { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogAccess for FileLog {
    type Reader = BufReader<File>;

    fn open(&self) -> Result<Self::Reader> {
        File::open(&self.path)
            .map(BufReader::new)
            .map_err(DaylogError::io_read)
    }

    fn replace(&self, contents: &str) -> Result<()> {
        replace_file(&self.path, contents).map_err(DaylogError::io_write)
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}
