//! Filesystem helpers for whole-file replacement.

use std::fs;
use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Replace the file at `path` with `contents` in one shot.
///
/// The new image is written to a sibling temp file, synced, and renamed over
/// the target, so a crash mid-write leaves either the old image or the new
/// one on disk, never a torn file.
///
/// # Errors
///
/// Returns an error if the temp file cannot be created or written, or if the
/// rename fails even after the fallback attempt.
pub fn replace_file(path: &Path, contents: &str) -> io::Result<()> {
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| io::Error::other(format!("System time error: {}", e)))?
        .as_nanos();
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| io::Error::other("Invalid log filename"))?;
    let temp_name = format!("{}.{}.tmp", filename, nanos);
    let temp_path = match parent {
        Some(dir) => dir.join(&temp_name),
        None => temp_name.into(),
    };

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&temp_path)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()?;
    drop(file);

    rename_with_fallback(&temp_path, path)
}

/// Atomically rename a file, with fallback for platforms where rename fails
/// if the target exists.
///
/// On some platforms (notably Windows), `fs::rename` fails if the
/// destination already exists. This function handles that case by removing
/// the destination first and retrying. If the rename ultimately fails, the
/// temp file is cleaned up.
fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}
