//! I/O error hints.
//!
//! Turns a raw `io::Error` into a short, actionable suffix (plus the OS code
//! when there is one) for the messages of [`crate::errors::RenameError`].

use std::io;

#[cfg(unix)]
fn hint_for_code(code: i32) -> Option<&'static str> {
    match code {
        libc::EACCES | libc::EPERM => Some("permission denied; check ownership and write permission on the directory"),
        libc::ENOENT => Some("path not found; was the file moved while renaming?"),
        libc::EBUSY => Some("resource busy; ensure no other process holds the file"),
        libc::EROFS => Some("read-only filesystem; cannot rename here"),
        libc::ENOSPC => Some("no space left on device"),
        libc::ENAMETOOLONG => Some("file name too long"),
        libc::ELOOP => Some("too many symbolic link levels; possible symlink cycle"),
        _ => None,
    }
}

#[cfg(windows)]
fn hint_for_code(code: i32) -> Option<&'static str> {
    match code {
        5 => Some("access denied; check permissions"),             // ERROR_ACCESS_DENIED
        2 | 3 => Some("path not found; was the file moved while renaming?"),
        32 => Some("sharing violation; the file is open elsewhere"), // ERROR_SHARING_VIOLATION
        19 => Some("write protected media"),                         // ERROR_WRITE_PROTECT
        183 => Some("target already exists"),                        // ERROR_ALREADY_EXISTS
        _ => None,
    }
}

#[cfg(not(any(unix, windows)))]
fn hint_for_code(_code: i32) -> Option<&'static str> {
    None
}

fn hint_for_kind(kind: io::ErrorKind) -> Option<&'static str> {
    match kind {
        io::ErrorKind::PermissionDenied => Some("permission denied; check ownership and write permission on the directory"),
        io::ErrorKind::NotFound => Some("path not found; was the file moved while renaming?"),
        io::ErrorKind::AlreadyExists => Some("target already exists"),
        _ => None,
    }
}

/// Suffix appended to an error message, e.g. ` (permission denied; ...) [os code: 13]`.
/// Empty when nothing useful can be said.
pub fn io_hint(e: &io::Error) -> String {
    match e.raw_os_error() {
        Some(code) => match hint_for_code(code) {
            Some(h) => format!(" ({h}) [os code: {code}]"),
            None => format!(" [os code: {code}]"),
        },
        None => hint_for_kind(e.kind())
            .map(|h| format!(" ({h})"))
            .unwrap_or_default(),
    }
}
