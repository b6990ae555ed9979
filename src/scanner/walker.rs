//! Directory walker implementation using walkdir.
//!
//! # Overview
//!
//! This module provides the [`Walker`] struct for traversing a directory
//! tree and yielding every regular file it contains, exactly once.
//!
//! Traversal is single-threaded. Children of each directory are visited in
//! file-name order so that bucket order in the size index is reproducible.
//! Symbolic links are neither followed nor reported.
//!
//! # Example
//!
//! ```no_run
//! use sizedupe::scanner::Walker;
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("/home/user/Downloads"));
//! let files = walker.collect_files().expect("scan failed");
//! println!("Found {} files", files.len());
//! ```

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{FileEntry, ScanError};

/// Directory walker for regular-file discovery.
#[derive(Debug, Clone)]
pub struct Walker {
    /// Root path to walk
    root: PathBuf,
}

impl Walker {
    /// Create a new walker for the given path.
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            root: path.to_path_buf(),
        }
    }

    /// Root directory of this walker.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Check that the root exists and is a directory.
    ///
    /// # Errors
    ///
    /// `NotFound`, `NotADirectory`, or the classified I/O error.
    pub fn validate_root(&self) -> Result<(), ScanError> {
        let metadata = std::fs::metadata(&self.root)
            .map_err(|e| ScanError::from_io(self.root.clone(), e))?;
        if !metadata.is_dir() {
            return Err(ScanError::NotADirectory(self.root.clone()));
        }
        Ok(())
    }

    /// Walk the directory tree, yielding regular files.
    ///
    /// Errors are yielded in place; callers that need all-or-nothing
    /// semantics should use [`Walker::collect_files`].
    pub fn walk(&self) -> impl Iterator<Item = Result<FileEntry, ScanError>> + '_ {
        WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry_result| match entry_result {
                Ok(entry) => {
                    let file_type = entry.file_type();
                    if file_type.is_dir() {
                        return None;
                    }
                    if !file_type.is_file() {
                        log::trace!("Skipping non-regular file: {}", entry.path().display());
                        return None;
                    }

                    match entry.metadata() {
                        Ok(metadata) => Some(Ok(FileEntry::new(
                            entry.into_path(),
                            metadata.len(),
                        ))),
                        Err(e) => Some(Err(self.convert_error(e))),
                    }
                }
                Err(e) => Some(Err(self.convert_error(e))),
            })
    }

    /// Validate the root and collect every regular file under it.
    ///
    /// # Errors
    ///
    /// Returns the first [`ScanError`] encountered; nothing is returned
    /// for a partially read tree.
    pub fn collect_files(&self) -> Result<Vec<FileEntry>, ScanError> {
        self.validate_root()?;
        let files = self.walk().collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "Walked {}: {} regular files",
            self.root.display(),
            files.len()
        );
        Ok(files)
    }

    fn convert_error(&self, error: walkdir::Error) -> ScanError {
        let path = error
            .path()
            .map_or_else(|| self.root.clone(), Path::to_path_buf);
        log::warn!("Walker error for {}: {}", path.display(), error);
        match error.into_io_error() {
            Some(io) => ScanError::from_io(path, io),
            None => ScanError::Io {
                path,
                source: std::io::Error::other("filesystem loop detected"),
            },
        }
    }
}
