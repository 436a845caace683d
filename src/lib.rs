//! Core library for `photo_rename`.
//!
//! Renames the JPEGs directly inside a directory to `{year}_{month}_{n}.jpg`,
//! oldest first, without ever reusing a name already present in the directory.
//! The binary runs this on the current directory; the library takes the
//! directory and the month explicitly.

pub mod cli;
pub mod config;
pub mod errors;
pub mod output;
pub mod platform;
pub mod rename;
pub mod shutdown;

pub use config::{Config, LogLevel, default_config_path, load_config, load_config_from_xml_path, path_has_symlink_ancestor};
pub use errors::RenameError;
pub use rename::{MonthStamp, RenameReport, Renamed, is_jpeg_name, rename_current_dir, rename_dir};

/// Line printed on stdout once every JPEG has been renamed.
pub const COMPLETION_MESSAGE: &str = "重命名完成";
