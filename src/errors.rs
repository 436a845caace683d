//! Typed error definitions for photo_rename.
//! Provides the small set of failure modes a run can hit, for better logs and tests.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::rename::helpers::io_hint;

#[derive(Debug, Error)]
pub enum RenameError {
    #[error("Cannot list directory {}{}", .dir.display(), io_hint(.source))]
    ListDir { dir: PathBuf, source: io::Error },

    #[error("Cannot read metadata of {}{}", .path.display(), io_hint(.source))]
    Metadata { path: PathBuf, source: io::Error },

    #[error("Rename '{}' -> '{}' failed{}", .from.display(), .to.display(), io_hint(.source))]
    Rename {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },

    #[error("Operation interrupted by user")]
    Interrupted,
}

impl RenameError {
    /// Stable numeric code used in structured logs.
    pub fn code(&self) -> u32 {
        match self {
            RenameError::ListDir { .. } => 10,
            RenameError::Metadata { .. } => 11,
            RenameError::Rename { .. } => 20,
            RenameError::Interrupted => 130,
        }
    }

    /// Short machine-friendly label for the `kind` log field.
    pub fn kind(&self) -> &'static str {
        match self {
            RenameError::ListDir { .. } => "list_dir",
            RenameError::Metadata { .. } => "metadata",
            RenameError::Rename { .. } => "rename",
            RenameError::Interrupted => "interrupted",
        }
    }
}
