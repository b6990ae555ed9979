//! Size index construction.
//!
//! The size index maps an exact byte count to every path of that size, in
//! traversal order. It is the first stage of duplicate detection: files of
//! different sizes can never be duplicates.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::scanner::{FileEntry, ScanError, Walker};

/// File paths bucketed by exact size in bytes.
pub type SizeIndex = BTreeMap<u64, Vec<PathBuf>>;

/// Walk `root` and bucket every regular file by size.
///
/// # Errors
///
/// Any traversal failure aborts the build; no partial index is returned.
pub fn build_size_index(root: &Path) -> Result<SizeIndex, ScanError> {
    let files = Walker::new(root).collect_files()?;
    let index = index_files(files);
    log::info!(
        "Indexed {} under {}: {} distinct sizes",
        index_path_count(&index),
        root.display(),
        index.len()
    );
    Ok(index)
}

/// Bucket already-discovered files by size, preserving input order within
/// each bucket.
#[must_use]
pub fn index_files(files: impl IntoIterator<Item = FileEntry>) -> SizeIndex {
    let mut index = SizeIndex::new();
    for file in files {
        index.entry(file.size).or_default().push(file.path);
    }
    index
}

/// Total number of paths across all buckets.
#[must_use]
pub fn index_path_count(index: &SizeIndex) -> usize {
    index.values().map(Vec::len).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn entry(path: &str, size: u64) -> FileEntry {
        FileEntry::new(PathBuf::from(path), size)
    }

    #[test]
    fn test_index_files_buckets_by_size() {
        let index = index_files(vec![
            entry("/a", 10),
            entry("/b", 20),
            entry("/c", 10),
        ]);

        assert_eq!(index.len(), 2);
        assert_eq!(index[&10], vec![PathBuf::from("/a"), PathBuf::from("/c")]);
        assert_eq!(index[&20], vec![PathBuf::from("/b")]);
    }

    #[test]
    fn test_index_files_keeps_singletons() {
        let index = index_files(vec![entry("/only", 5)]);
        assert_eq!(index[&5].len(), 1);
    }

    #[test]
    fn test_build_size_index_recursive() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("one.txt"), b"1234").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("two.txt"), b"5678").unwrap();
        fs::write(dir.path().join("three.txt"), b"12").unwrap();

        let index = build_size_index(dir.path()).unwrap();

        assert_eq!(index_path_count(&index), 3);
        assert_eq!(index[&4].len(), 2);
        assert_eq!(index[&2].len(), 1);
    }

    #[test]
    fn test_build_size_index_empty_directory() {
        let dir = TempDir::new().unwrap();
        let index = build_size_index(dir.path()).unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn test_build_size_index_missing_root() {
        let result = build_size_index(Path::new("/nonexistent/sizedupe/root"));
        assert!(matches!(result, Err(ScanError::NotFound(_))));
    }
}
