//! Content-hash grouping of size buckets.
//!
//! # Overview
//!
//! [`DuplicateFinder`] takes a filtered [`SizeIndex`], hashes every file of
//! every bucket and keeps the hash groups with two or more members. Files
//! are hashed sequentially by default; with `hash_threads > 1` each bucket
//! is hashed on a bounded rayon pool. Either way results are gathered in
//! bucket order before grouping, so groups never depend on completion order.
//!
//! # Example
//!
//! ```no_run
//! use sizedupe::duplicates::{build_size_index, select_multiple, DuplicateFinder};
//! use std::path::Path;
//!
//! let index = select_multiple(build_size_index(Path::new(".")).unwrap());
//! let detection = DuplicateFinder::with_defaults().find_duplicates(&index).unwrap();
//! println!("{} duplicate groups", detection.stats.duplicate_groups);
//! ```

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use rayon::prelude::*;
use rayon::ThreadPool;

use super::{
    index_path_count, select_multiple, Detection, DetectionStats, DuplicateIndex, HashGroup,
    SizeIndex, SkippedFile,
};
use crate::progress::ProgressCallback;
use crate::scanner::{Hash, HashError, Hasher};

/// What to do when a file cannot be hashed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashFailurePolicy {
    /// Abort the whole detection pass with the error.
    #[default]
    Abort,
    /// Leave the file out, record it, and continue.
    Skip,
}

/// Configuration for the hashing pass.
#[derive(Clone)]
pub struct FinderConfig {
    /// Worker threads for hashing; 1 hashes on the calling thread.
    pub hash_threads: usize,
    /// Behaviour on unreadable files.
    pub failure_policy: HashFailurePolicy,
    /// Optional progress callback.
    pub progress_callback: Option<Arc<dyn ProgressCallback>>,
}

impl std::fmt::Debug for FinderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinderConfig")
            .field("hash_threads", &self.hash_threads)
            .field("failure_policy", &self.failure_policy)
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<callback>"),
            )
            .finish()
    }
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            hash_threads: 1,
            failure_policy: HashFailurePolicy::Abort,
            progress_callback: None,
        }
    }
}

impl FinderConfig {
    /// Set the number of hashing threads (minimum 1).
    #[must_use]
    pub fn with_hash_threads(mut self, threads: usize) -> Self {
        self.hash_threads = threads.max(1);
        self
    }

    /// Set the failure policy.
    #[must_use]
    pub fn with_failure_policy(mut self, policy: HashFailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Set the progress callback.
    #[must_use]
    pub fn with_progress_callback(mut self, callback: Arc<dyn ProgressCallback>) -> Self {
        self.progress_callback = Some(callback);
        self
    }
}

/// Groups equal-sized files by content digest.
#[derive(Debug)]
pub struct DuplicateFinder {
    config: FinderConfig,
    hasher: Hasher,
}

impl DuplicateFinder {
    /// Create a new duplicate finder with the given configuration.
    #[must_use]
    pub fn new(config: FinderConfig) -> Self {
        Self {
            config,
            hasher: Hasher::new(),
        }
    }

    /// Create a new duplicate finder with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(FinderConfig::default())
    }

    /// Hash every bucket of `index` and keep the multi-member hash groups.
    ///
    /// # Errors
    ///
    /// Under [`HashFailurePolicy::Abort`], the first unreadable file (in
    /// index order) aborts the pass and no partial result is returned.
    pub fn find_duplicates(&self, index: &SizeIndex) -> Result<Detection, HashError> {
        let pool = self.build_pool()?;
        let total = index_path_count(index);

        if let Some(cb) = &self.config.progress_callback {
            cb.on_phase_start("hashing", total);
        }

        let result = self.group_index(index, pool.as_ref());

        if let Some(cb) = &self.config.progress_callback {
            cb.on_phase_end("hashing");
        }

        let detection = result?;
        log::info!(
            "Found {} duplicate groups ({} files) in {} size buckets",
            detection.stats.duplicate_groups,
            detection.stats.duplicate_files,
            detection.stats.buckets
        );
        if !detection.skipped.is_empty() {
            log::warn!("Skipped {} unreadable file(s)", detection.skipped.len());
        }
        Ok(detection)
    }

    fn build_pool(&self) -> Result<Option<ThreadPool>, HashError> {
        if self.config.hash_threads <= 1 {
            return Ok(None);
        }
        rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.hash_threads)
            .thread_name(|i| format!("sizedupe-hash-{}", i))
            .build()
            .map(Some)
            .map_err(|e| HashError::Pool(e.to_string()))
    }

    fn group_index(
        &self,
        index: &SizeIndex,
        pool: Option<&ThreadPool>,
    ) -> Result<Detection, HashError> {
        let mut duplicates = DuplicateIndex::new();
        let mut skipped = Vec::new();
        let mut hashed_files = 0;

        for (&size, paths) in index {
            let results = self.hash_paths(paths, pool);
            let (groups, hashed) = self.group_bucket(paths, results, &mut skipped)?;
            hashed_files += hashed;

            let groups = select_multiple(groups);
            if groups.is_empty() {
                log::debug!("Size {}: no duplicates among {} files", size, paths.len());
            } else {
                log::debug!("Size {}: {} duplicate group(s)", size, groups.len());
                duplicates.insert(size, groups);
            }
        }

        let mut stats = DetectionStats::for_index(&duplicates);
        stats.buckets = index.len();
        stats.hashed_files = hashed_files;

        Ok(Detection {
            duplicates,
            skipped,
            stats,
        })
    }

    /// Hash `paths`, returning results in input order.
    ///
    /// Sequential hashing under the abort policy stops at the first failure,
    /// so the returned vector may be shorter than `paths`.
    fn hash_paths(
        &self,
        paths: &[PathBuf],
        pool: Option<&ThreadPool>,
    ) -> Vec<Result<Hash, HashError>> {
        let hash_one = |path: &PathBuf| {
            let result = self.hasher.full_hash(path);
            if let Some(cb) = &self.config.progress_callback {
                cb.on_progress(path);
            }
            result
        };

        match pool {
            Some(pool) => pool.install(|| paths.par_iter().map(hash_one).collect()),
            None => {
                let mut results = Vec::with_capacity(paths.len());
                for path in paths {
                    let result = hash_one(path);
                    let failed = result.is_err();
                    results.push(result);
                    if failed && self.config.failure_policy == HashFailurePolicy::Abort {
                        break;
                    }
                }
                results
            }
        }
    }

    /// Group one bucket by digest in first-seen order.
    ///
    /// Returns every group (including singletons) and the count of files hashed.
    fn group_bucket(
        &self,
        paths: &[PathBuf],
        results: Vec<Result<Hash, HashError>>,
        skipped: &mut Vec<SkippedFile>,
    ) -> Result<(Vec<HashGroup>, usize), HashError> {
        let mut groups: Vec<HashGroup> = Vec::new();
        let mut positions: HashMap<Hash, usize> = HashMap::new();
        let mut hashed = 0;

        for (path, result) in paths.iter().zip(results) {
            let hash = match result {
                Ok(hash) => hash,
                Err(e) => match self.config.failure_policy {
                    HashFailurePolicy::Abort => {
                        log::error!("Hashing failed: {}", e);
                        return Err(e);
                    }
                    HashFailurePolicy::Skip => {
                        log::warn!("Skipping unreadable file: {}", e);
                        skipped.push(SkippedFile {
                            path: path.clone(),
                            reason: e.to_string(),
                        });
                        continue;
                    }
                },
            };
            hashed += 1;

            match positions.entry(hash) {
                Entry::Occupied(slot) => groups[*slot.get()].paths.push(path.clone()),
                Entry::Vacant(slot) => {
                    slot.insert(groups.len());
                    groups.push(HashGroup::new(hash, vec![path.clone()]));
                }
            }
        }

        Ok((groups, hashed))
    }
}
