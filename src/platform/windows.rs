//! Non-Unix implementations of platform helpers (best-effort).

use filetime::FileTime;
use std::fs::{File, Metadata, OpenOptions};
use std::io;
use std::path::Path;

/// Creation time as reported by the OS; last-modified when unavailable.
pub fn creation_time(meta: &Metadata) -> FileTime {
    FileTime::from_creation_time(meta)
        .unwrap_or_else(|| FileTime::from_last_modification_time(meta))
}

/// Open log file for appending (no symlink defense available via std here).
pub fn open_log_file_secure_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
