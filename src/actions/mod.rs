//! File actions module.
//!
//! Deletion of user-selected duplicates, addressed by sequence number:
//! - Permanent deletion (default)
//! - Move to system trash via the trash crate
//! - Abort-on-first-failure or continue-and-report batches
//!
//! ```no_run
//! use sizedupe::actions::{delete_selected, DeleteConfig};
//! use sizedupe::duplicates::EnumeratedDuplicates;
//!
//! # let numbered = EnumeratedDuplicates::default();
//! let result = delete_selected(&numbered, &[2], &DeleteConfig::trash());
//! println!("Freed {} bytes", result.bytes_freed);
//! ```

pub mod delete;

pub use delete::{
    delete_selected, delete_to_trash, file_size, permanent_delete, BatchDeleteResult,
    DeleteConfig, DeleteError, DeleteFailure, DeleteFailurePolicy, DeleteResult,
};
