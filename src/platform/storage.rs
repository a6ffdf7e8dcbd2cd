//! Filesystem capability
//!
//! The handful of path operations the rotation protocol needs, abstracted so
//! the same core runs against std::fs on desktop or a flash-filesystem shim
//! on embedded targets. Results are booleans: the core treats every failure
//! the same way (report and continue), so error detail stays in the shim.

use std::fs;
use std::path::Path;

pub trait Storage: Send + Sync {
    /// Check whether a file or directory exists
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and any missing parents
    fn create_dir_all(&self, path: &Path) -> bool;

    /// Size of a file in bytes, 0 when unreadable
    fn file_size(&self, path: &Path) -> u64;

    /// Delete a file
    fn remove(&self, path: &Path) -> bool;

    /// Rename/move a file, replacing the destination if present
    fn rename(&self, from: &Path, to: &Path) -> bool;
}

/// Default desktop storage backed by std::fs.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdStorage;

impl Storage for StdStorage {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> bool {
        fs::create_dir_all(path).is_ok()
    }

    fn file_size(&self, path: &Path) -> u64 {
        fs::metadata(path).map(|m| m.len()).unwrap_or(0)
    }

    fn remove(&self, path: &Path) -> bool {
        fs::remove_file(path).is_ok()
    }

    fn rename(&self, from: &Path, to: &Path) -> bool {
        fs::rename(from, to).is_ok()
    }
}
