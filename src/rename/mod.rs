//! Renaming: directory scan, name allocation, and the rename pass.

pub mod helpers;
pub mod naming;
mod renamer;
pub mod scan;

pub use naming::{MonthStamp, NameAllocator};
pub use renamer::{RenameReport, Renamed, rename_current_dir, rename_dir};
pub use scan::{DirSnapshot, JpegEntry, is_jpeg_name, scan_dir};
