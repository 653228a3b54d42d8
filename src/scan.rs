//! Source directory enumeration.
//!
//! Lists a single directory (no recursion) and keeps the entries whose file
//! name ends with `.jpg`, in whatever order the filesystem yields them. That
//! order is platform-dependent and deliberately not sorted — thumbnail
//! indices follow it, and `--fit` is the only reordering the tool applies.
//!
//! The basename is derived by removing every literal `.jpg` substring from
//! the file name, not by stripping the suffix. A name like `a.jpg.b.jpg`
//! therefore yields `a.b` — long-standing behavior callers may rely on in
//! caption templates.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File suffix that selects source images.
pub const IMAGE_SUFFIX: &str = ".jpg";

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Cannot read directory {0}: {1}")]
    ReadDir(PathBuf, std::io::Error),
}

/// A directory entry believed to hold a source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    /// File name as enumerated (e.g. `photo1.jpg`).
    pub file_name: String,
    /// File name with every `.jpg` substring removed (e.g. `photo1`).
    pub basename: String,
    /// Full path to the file.
    pub path: PathBuf,
}

/// List the `.jpg` entries of `dir` in enumeration order.
///
/// An unreadable directory is a structural error and aborts the run; whether
/// an individual entry actually decodes is decided later, per file.
pub fn scan(dir: &Path) -> Result<Vec<SourceEntry>, ScanError> {
    let entries = fs::read_dir(dir).map_err(|e| ScanError::ReadDir(dir.to_path_buf(), e))?;

    let mut sources = Vec::new();
    for entry in entries.filter_map(|e| e.ok()) {
        let file_name = entry.file_name().to_string_lossy().to_string();
        if !file_name.ends_with(IMAGE_SUFFIX) {
            continue;
        }
        sources.push(SourceEntry {
            basename: file_name.replace(IMAGE_SUFFIX, ""),
            path: dir.join(&file_name),
            file_name,
        });
    }
    Ok(sources)
}
