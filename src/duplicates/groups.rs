//! Hash groups and the duplicate index.
//!
//! # Overview
//!
//! Within one size bucket, files are grouped by content digest. A
//! [`HashGroup`] with two or more paths is a set of true duplicates. The
//! [`DuplicateIndex`] maps each size to the duplicate groups of that size,
//! and only contains sizes that have at least one such group.

use std::collections::BTreeMap;
use std::path::PathBuf;

use super::filter::Bucket;
use crate::scanner::{hash_to_hex, Hash};

/// Paths sharing one content digest within a size bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashGroup {
    /// BLAKE3 digest of the shared content
    pub hash: Hash,
    /// Paths in the order they appeared in the size bucket
    pub paths: Vec<PathBuf>,
}

impl HashGroup {
    /// Create a group from a digest and its paths.
    #[must_use]
    pub fn new(hash: Hash, paths: Vec<PathBuf>) -> Self {
        Self { hash, paths }
    }

    /// Digest as lowercase hex.
    #[must_use]
    pub fn hash_hex(&self) -> String {
        hash_to_hex(&self.hash)
    }

    /// Number of files in this group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Check if this group is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl Bucket for HashGroup {
    fn member_count(&self) -> usize {
        self.paths.len()
    }
}

/// Duplicate groups keyed by file size.
///
/// Groups for a size are ordered by the bucket position of their first
/// member.
pub type DuplicateIndex = BTreeMap<u64, Vec<HashGroup>>;

/// A file left out of duplicate detection because it could not be hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    /// Path that failed to hash
    pub path: PathBuf,
    /// Rendered error
    pub reason: String,
}

/// Statistics from a detection pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectionStats {
    /// Size buckets examined
    pub buckets: usize,
    /// Files successfully hashed
    pub hashed_files: usize,
    /// Confirmed duplicate groups
    pub duplicate_groups: usize,
    /// Files belonging to duplicate groups
    pub duplicate_files: usize,
    /// Bytes freed by keeping one copy per group
    pub reclaimable_bytes: u64,
}

impl DetectionStats {
    /// Compute group statistics for `duplicates`.
    ///
    /// `buckets` and `hashed_files` are left at zero for the caller to fill.
    #[must_use]
    pub fn for_index(duplicates: &DuplicateIndex) -> Self {
        let mut stats = Self::default();
        for (size, groups) in duplicates {
            for group in groups {
                stats.duplicate_groups += 1;
                stats.duplicate_files += group.len();
                stats.reclaimable_bytes += size * (group.len() as u64).saturating_sub(1);
            }
        }
        stats
    }
}

/// Result of a detection pass.
#[derive(Debug, Clone, Default)]
pub struct Detection {
    /// Confirmed duplicates by size
    pub duplicates: DuplicateIndex,
    /// Files skipped under the skip policy
    pub skipped: Vec<SkippedFile>,
    /// Pass statistics
    pub stats: DetectionStats,
}

impl Detection {
    /// Whether any duplicates were found.
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        !self.duplicates.is_empty()
    }
}
