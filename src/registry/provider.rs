//! Filesystem access used by the registry.
//!
//! The registry never touches `std::fs` directly; it asks a
//! [`DirectoryProvider`] whether paths exist and for the lines of catalog
//! files. [`FileSystem`] is the real implementation.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use walkdir::WalkDir;

pub trait DirectoryProvider {
    /// True if `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// True if `path` exists and is a regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Names of the immediate subdirectories of `path`, in no particular order.
    fn list_dirs(&self, path: &Path) -> io::Result<Vec<String>>;

    /// Open a file for line-by-line reading. Dropping the reader closes it.
    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead>>;
}

/// [`DirectoryProvider`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystem;

impl DirectoryProvider for FileSystem {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn list_dirs(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();

        for entry in WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
        {
            let entry = entry?;
            if entry.file_type().is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }

        Ok(names)
    }

    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead>> {
        let file = File::open(path)?;
        Ok(Box::new(BufReader::new(file)))
    }
}
