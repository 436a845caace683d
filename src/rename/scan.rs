//! Directory snapshot: collision set plus JPEG entries in capture order.
//!
//! Listing is non-recursive. Every entry name (files, directories, anything)
//! lands in the collision set; every entry whose name ends in `.jpg`
//! (ASCII case-insensitive) is selected for renaming, whatever its type.

use anyhow::Result;
use filetime::FileTime;
use std::collections::HashSet;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::Path;
use tracing::{debug, trace};

use crate::errors::RenameError;
use crate::platform::creation_time;

const JPEG_SUFFIX: &[u8] = b".jpg";

/// An entry selected for renaming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JpegEntry {
    pub name: OsString,
    pub created: FileTime,
}

/// Result of listing a directory once, before any rename happens.
#[derive(Debug, Default)]
pub struct DirSnapshot {
    /// Names of every entry present at listing time.
    pub existing: HashSet<OsString>,
    /// JPEGs ordered by creation time, oldest first.
    pub jpegs: Vec<JpegEntry>,
}

/// True when `name` ends with `.jpg`, ignoring ASCII case.
///
/// Works on the raw encoded bytes so non-UTF-8 names are still classified.
pub fn is_jpeg_name(name: &OsStr) -> bool {
    let bytes = name.as_encoded_bytes();
    bytes.len() >= JPEG_SUFFIX.len()
        && bytes[bytes.len() - JPEG_SUFFIX.len()..].eq_ignore_ascii_case(JPEG_SUFFIX)
}

/// List `dir` and return its collision set and the ordered JPEG entries.
///
/// Any listing or metadata failure aborts here, before a single rename.
pub fn scan_dir(dir: &Path) -> Result<DirSnapshot> {
    let list_err = |source| RenameError::ListDir {
        dir: dir.to_path_buf(),
        source,
    };

    let mut snapshot = DirSnapshot::default();
    for entry in fs::read_dir(dir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        let name = entry.file_name();

        if is_jpeg_name(&name) {
            let path = entry.path();
            // follows symlinks
            let meta = fs::metadata(&path).map_err(|source| RenameError::Metadata {
                path: path.clone(),
                source,
            })?;
            if !meta.is_file() {
                trace!(path = %path.display(), "selected non-file entry with .jpg suffix");
            }
            snapshot.jpegs.push(JpegEntry {
                name: name.clone(),
                created: creation_time(&meta),
            });
        }

        snapshot.existing.insert(name);
    }

    order_by_creation(&mut snapshot.jpegs);
    debug!(
        dir = %dir.display(),
        entries = snapshot.existing.len(),
        jpegs = snapshot.jpegs.len(),
        "directory scanned"
    );
    Ok(snapshot)
}

/// Oldest first. Equal timestamps fall back to the file name so repeated runs
/// over the same listing agree.
pub fn order_by_creation(entries: &mut [JpegEntry]) {
    entries.sort_by(|a, b| a.created.cmp(&b.created).then_with(|| a.name.cmp(&b.name)));
}
