//! The rename pass.
//!
//! One listing, then one rename per JPEG in capture order. A failed rename
//! stops the pass right there: earlier renames stay on disk, later files keep
//! their names. There is no rollback.

use anyhow::Result;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::errors::RenameError;
use crate::shutdown;

use super::naming::{MonthStamp, NameAllocator};
use super::scan::{DirSnapshot, scan_dir};

/// One applied rename, both sides relative to the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renamed {
    pub from: OsString,
    pub to: String,
}

/// What a completed pass did.
#[derive(Debug, Clone)]
pub struct RenameReport {
    pub dir: PathBuf,
    pub stamp: MonthStamp,
    pub renamed: Vec<Renamed>,
}

impl RenameReport {
    pub fn len(&self) -> usize {
        self.renamed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renamed.is_empty()
    }
}

/// Rename every JPEG directly inside `dir` to `{year}_{month}_{n}.jpg`.
pub fn rename_dir(dir: &Path, stamp: MonthStamp) -> Result<RenameReport> {
    let DirSnapshot { existing, jpegs } = scan_dir(dir)?;
    info!(dir = %dir.display(), count = jpegs.len(), stamp = %stamp, "renaming JPEGs");

    let total = jpegs.len();
    let mut names = NameAllocator::new(stamp, existing);
    let mut renamed = Vec::with_capacity(total);

    for entry in jpegs {
        if shutdown::is_requested() {
            warn!(done = renamed.len(), remaining = total - renamed.len(), "stop requested; remaining files keep their names");
            return Err(RenameError::Interrupted.into());
        }

        let target = names.next_name();
        let from = dir.join(&entry.name);
        let to = dir.join(&target);
        fs::rename(&from, &to).map_err(|source| RenameError::Rename {
            from: from.clone(),
            to: to.clone(),
            source,
        })?;
        debug!(from = %from.display(), to = %to.display(), "renamed");

        renamed.push(Renamed {
            from: entry.name,
            to: target,
        });
    }

    info!(dir = %dir.display(), renamed = renamed.len(), "rename pass complete");
    Ok(RenameReport {
        dir: dir.to_path_buf(),
        stamp,
        renamed,
    })
}

/// [`rename_dir`] on the process's working directory, stamped with today's date.
pub fn rename_current_dir() -> Result<RenameReport> {
    let dir = env::current_dir().map_err(|source| RenameError::ListDir {
        dir: PathBuf::from("."),
        source,
    })?;
    rename_dir(&dir, MonthStamp::today())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn report_lists_each_rename_once() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("only.jpg").write_str("img").unwrap();
        temp.child("readme.md").write_str("doc").unwrap();

        let report = rename_dir(temp.path(), MonthStamp::new(2024, 6)).unwrap();

        assert_eq!(report.len(), 1);
        assert_eq!(
            report.renamed[0],
            Renamed {
                from: OsString::from("only.jpg"),
                to: "2024_6_1.jpg".to_string()
            }
        );
        temp.child("2024_6_1.jpg").assert("img");
        temp.child("readme.md").assert("doc");
    }

    #[test]
    fn empty_directory_is_a_successful_no_op() {
        let temp = assert_fs::TempDir::new().unwrap();
        let report = rename_dir(temp.path(), MonthStamp::new(2024, 6)).unwrap();
        assert!(report.is_empty());
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
    }
}
