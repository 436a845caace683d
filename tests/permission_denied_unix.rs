#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tempfile::tempdir;

use photo_rename::{MonthStamp, RenameError, rename_dir};

fn running_as_root() -> bool {
    unsafe { libc::geteuid() == 0 }
}

fn set_mode(path: &Path, mode: u32) {
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).unwrap();
}

/// A directory we can list but not write: the first rename fails and nothing moves.
#[test]
fn read_only_directory_fails_on_first_rename() {
    // Root bypasses permission checks, so the scenario cannot be reproduced.
    if running_as_root() {
        eprintln!("skipping: running as root");
        return;
    }

    let td = tempdir().expect("tempdir");
    let photos = td.path().join("photos");
    fs::create_dir(&photos).unwrap();
    fs::write(photos.join("a.jpg"), b"a").unwrap();
    set_mode(&photos, 0o555);

    let err = rename_dir(&photos, MonthStamp::new(2024, 6)).expect_err("expected permission denied");
    let msg = format!("{err}");

    match err.downcast_ref::<RenameError>() {
        Some(RenameError::Rename { from, to, source }) => {
            assert_eq!(from, &photos.join("a.jpg"));
            assert_eq!(to, &photos.join("2024_6_1.jpg"));
            assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(msg.to_ascii_lowercase().contains("permission denied"), "{msg}");
    assert!(photos.join("a.jpg").exists());

    // Restore permissions so tempdir cleanup can remove the directory
    set_mode(&photos, 0o755);
}

/// A directory we cannot list: the run fails before any rename is attempted.
#[test]
fn unlistable_directory_fails_before_renaming() {
    if running_as_root() {
        eprintln!("skipping: running as root");
        return;
    }

    let td = tempdir().expect("tempdir");
    let photos = td.path().join("photos");
    fs::create_dir(&photos).unwrap();
    fs::write(photos.join("a.jpg"), b"a").unwrap();
    set_mode(&photos, 0o300);

    let err = rename_dir(&photos, MonthStamp::new(2024, 6)).expect_err("expected listing failure");
    let code = err.downcast_ref::<RenameError>().map(RenameError::code);

    set_mode(&photos, 0o755);
    assert_eq!(code, Some(10), "unexpected error: {err:#}");
    assert!(photos.join("a.jpg").exists());
    assert!(!photos.join("2024_6_1.jpg").exists());
}

// Failures below do not depend on permission bits, so they hold under root too.

/// A dangling `.jpg` symlink has no creation time: the listing fails and nothing moves.
#[test]
fn dangling_jpeg_symlink_fails_before_renaming() {
    let td = tempdir().expect("tempdir");
    let photos = td.path().join("photos");
    fs::create_dir(&photos).unwrap();
    fs::write(photos.join("a.jpg"), b"a").unwrap();
    std::os::unix::fs::symlink("missing-target", photos.join("x.jpg")).unwrap();

    let err = rename_dir(&photos, MonthStamp::new(2024, 6)).expect_err("expected metadata failure");

    match err.downcast_ref::<RenameError>() {
        Some(re @ RenameError::Metadata { path, source }) => {
            assert_eq!(path, &photos.join("x.jpg"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            assert_eq!(re.code(), 11);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(fs::read(photos.join("a.jpg")).unwrap(), b"a");
    assert!(!photos.join("2024_6_1.jpg").exists());
}

/// Pointing the pass at a regular file is a listing failure.
#[test]
fn file_instead_of_directory_is_a_list_error() {
    let td = tempdir().expect("tempdir");
    let not_dir = td.path().join("a.jpg");
    fs::write(&not_dir, b"a").unwrap();

    let err = rename_dir(&not_dir, MonthStamp::new(2024, 6)).expect_err("expected listing failure");

    match err.downcast_ref::<RenameError>() {
        Some(re @ RenameError::ListDir { dir, .. }) => {
            assert_eq!(dir, &not_dir);
            assert_eq!(re.code(), 10);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(not_dir.exists());
}
