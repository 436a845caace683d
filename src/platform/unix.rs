//! Unix implementations of platform helpers.

use filetime::FileTime;
use std::fs::{self, File, Metadata, OpenOptions};
use std::io;
use std::os::unix::fs::{MetadataExt, OpenOptionsExt, PermissionsExt};
use std::path::Path;

/// Best available "when was this file made" timestamp.
///
/// Birth time when the filesystem reports it (statx on Linux, st_birthtime on
/// the BSDs/macOS); otherwise the inode change time, which for a photo that
/// was copied in and never touched is the moment it arrived.
pub fn creation_time(meta: &Metadata) -> FileTime {
    FileTime::from_creation_time(meta).unwrap_or_else(|| {
        FileTime::from_unix_time(meta.ctime(), meta.ctime_nsec().clamp(0, 999_999_999) as u32)
    })
}

/// Open log file for appending; set 0600 only when creating a new file.
/// Existing files keep their permissions. The final component is never
/// followed if it is a symlink. Failing to create the parent directory or to
/// tighten the mode of a new file is an error.
pub fn open_log_file_secure_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let existed = path.exists();
    let f = OpenOptions::new()
        .create(true)
        .append(true)
        .mode(0o600) // applies on create
        .custom_flags(libc::O_NOFOLLOW)
        .open(path)?;
    if !existed {
        // umask may have cleared bits from the create mode; pin it to 0600
        f.set_permissions(fs::Permissions::from_mode(0o600))?;
    }
    Ok(f)
}
