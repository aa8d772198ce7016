//! Filesystem access used by the file lookup.

use std::io;
use std::path::Path;

/// Read-only filesystem primitives needed by [`FileLookup`](super::FileLookup)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Whether anything exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Read the whole file at `path` as UTF-8 text
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// The host filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}
