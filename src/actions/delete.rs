//! Deletion of selected duplicates.
//!
//! # Overview
//!
//! [`delete_selected`] resolves sequence numbers against an
//! [`EnumeratedDuplicates`], stats each file for its current size, removes
//! it, and totals the bytes freed. Files are unlinked by default; with
//! [`DeleteConfig::trash`] they are moved to the system trash instead.
//!
//! Numbers that were never assigned are ignored. Under
//! [`DeleteFailurePolicy::Abort`] the first failure stops the batch; the
//! freed total covers only the files removed before it.
//!
//! # Example
//!
//! ```no_run
//! use sizedupe::actions::delete::{delete_selected, DeleteConfig};
//! use sizedupe::duplicates::EnumeratedDuplicates;
//!
//! # let numbered = EnumeratedDuplicates::default();
//! let result = delete_selected(&numbered, &[1, 3], &DeleteConfig::default());
//! println!("{}", result.summary());
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::duplicates::EnumeratedDuplicates;

/// Error type for deletion operations.
#[derive(Debug, Error)]
pub enum DeleteError {
    /// File was not found (may have been deleted or moved).
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// Permission denied when attempting to delete.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Trash operation failed.
    #[error("trash operation failed for {path}: {message}")]
    TrashFailed { path: PathBuf, message: String },

    /// Removing the file failed.
    #[error("delete failed for {path}: {source}")]
    RemoveFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// General I/O error while reading metadata.
    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DeleteError {
    /// Get the path associated with this error.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound(p)
            | Self::PermissionDenied(p)
            | Self::TrashFailed { path: p, .. }
            | Self::RemoveFailed { path: p, .. }
            | Self::Io { path: p, .. } => p,
        }
    }

    fn from_io(path: &Path, error: io::Error) -> Self {
        Self::classify(path, error, |path, source| Self::Io { path, source })
    }

    /// Map not-found and permission errors to their variants, anything else
    /// to `fallback`.
    fn classify(
        path: &Path,
        error: io::Error,
        fallback: impl FnOnce(PathBuf, io::Error) -> Self,
    ) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => fallback(path.to_path_buf(), error),
        }
    }
}

/// What to do when a selected file cannot be removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteFailurePolicy {
    /// Stop the batch at the first failure.
    #[default]
    Abort,
    /// Attempt every selection and collect failures.
    Continue,
}

/// Configuration for deletion operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteConfig {
    /// Move to the system trash instead of unlinking.
    pub use_trash: bool,
    /// Behaviour on failure.
    pub failure_policy: DeleteFailurePolicy,
}

impl DeleteConfig {
    /// Config for trash deletion.
    #[must_use]
    pub fn trash() -> Self {
        Self {
            use_trash: true,
            ..Self::default()
        }
    }

    /// Set the failure policy.
    #[must_use]
    pub fn with_failure_policy(mut self, policy: DeleteFailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }
}

/// A successfully removed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteResult {
    /// Sequence number the user selected
    pub number: usize,
    /// Path that was removed
    pub path: PathBuf,
    /// Size at removal time
    pub size: u64,
}

/// A selection that could not be removed.
#[derive(Debug)]
pub struct DeleteFailure {
    /// Sequence number the user selected
    pub number: usize,
    /// Why it failed
    pub error: DeleteError,
}

/// Results of a batch deletion.
#[derive(Debug, Default)]
pub struct BatchDeleteResult {
    /// Successfully removed files, in selection order.
    pub successes: Vec<DeleteResult>,
    /// Failed selections, in selection order.
    pub failures: Vec<DeleteFailure>,
    /// Total bytes freed.
    pub bytes_freed: u64,
    /// Whether the batch stopped before attempting every selection.
    pub aborted: bool,
}

impl BatchDeleteResult {
    /// Number of successful deletions.
    #[must_use]
    pub fn success_count(&self) -> usize {
        self.successes.len()
    }

    /// Number of failed deletions.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Check if all deletions succeeded.
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }

    /// Human-readable summary of the operation.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.all_succeeded() {
            format!(
                "Deleted {} file(s), freed {} bytes",
                self.success_count(),
                self.bytes_freed
            )
        } else {
            format!(
                "Deleted {} file(s), {} failed, freed {} bytes",
                self.success_count(),
                self.failure_count(),
                self.bytes_freed
            )
        }
    }
}

/// Current size of `path` in bytes.
///
/// # Errors
///
/// `NotFound`, `PermissionDenied`, or `Io`.
pub fn file_size(path: &Path) -> Result<u64, DeleteError> {
    fs::metadata(path)
        .map(|m| m.len())
        .map_err(|e| DeleteError::from_io(path, e))
}

/// Permanently remove a file, returning its size at removal time.
///
/// # Errors
///
/// Metadata errors from [`file_size`], or `RemoveFailed`/`NotFound`/
/// `PermissionDenied` from the removal itself.
pub fn permanent_delete(path: &Path) -> Result<u64, DeleteError> {
    let size = file_size(path)?;

    fs::remove_file(path).map_err(|e| {
        log::error!("Delete failed for {}: {}", path.display(), e);
        DeleteError::classify(path, e, |path, source| DeleteError::RemoveFailed {
            path,
            source,
        })
    })?;

    log::info!("Deleted: {} ({} bytes)", path.display(), size);
    Ok(size)
}

/// Move a file to the system trash, returning its size at removal time.
///
/// # Errors
///
/// Metadata errors from [`file_size`], or `TrashFailed`.
pub fn delete_to_trash(path: &Path) -> Result<u64, DeleteError> {
    let size = file_size(path)?;

    trash::delete(path).map_err(|e| {
        log::error!("Trash operation failed for {}: {}", path.display(), e);
        DeleteError::TrashFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    })?;

    log::info!("Moved to trash: {} ({} bytes)", path.display(), size);
    Ok(size)
}

/// Delete the files behind `numbers` and total the bytes freed.
///
/// Numbers not present in `numbered` are ignored, as are repeats of a
/// number already processed.
pub fn delete_selected(
    numbered: &EnumeratedDuplicates,
    numbers: &[usize],
    config: &DeleteConfig,
) -> BatchDeleteResult {
    let mut result = BatchDeleteResult::default();
    let mut seen = Vec::with_capacity(numbers.len());

    for &number in numbers {
        if seen.contains(&number) {
            continue;
        }
        seen.push(number);

        let Some(path) = numbered.get(number) else {
            log::debug!("Ignoring unknown file number {}", number);
            continue;
        };

        let outcome = if config.use_trash {
            delete_to_trash(path)
        } else {
            permanent_delete(path)
        };

        match outcome {
            Ok(size) => {
                result.bytes_freed += size;
                result.successes.push(DeleteResult {
                    number,
                    path: path.to_path_buf(),
                    size,
                });
            }
            Err(error) => {
                log::warn!("Failed to delete #{}: {}", number, error);
                result.failures.push(DeleteFailure { number, error });

                if config.failure_policy == DeleteFailurePolicy::Abort {
                    result.aborted = true;
                    log::info!("Stopping batch deletion after first failure");
                    break;
                }
            }
        }
    }

    log::info!("{}", result.summary());
    result
}
