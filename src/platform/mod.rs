//! Platform-specific helpers.
//! Hides OS differences (Unix/Windows) behind a uniform API so the rest of
//! the codebase can remain platform-agnostic.

#[cfg(unix)]
mod unix;
#[cfg(not(unix))]
mod windows;

#[cfg(unix)]
pub use unix::{creation_time, open_log_file_secure_append};

#[cfg(not(unix))]
pub use windows::{creation_time, open_log_file_secure_append};
