//! Duplicate detection module.
//!
//! This module provides functionality for:
//! - Size indexing of a directory tree ([`index`])
//! - Extension and multiplicity filters ([`filter`])
//! - Size display ordering ([`order`])
//! - Content-hash grouping ([`finder`], [`groups`])
//! - Stable numbering of duplicates for selection ([`enumerate`])

pub mod enumerate;
pub mod filter;
pub mod finder;
pub mod groups;
pub mod index;
pub mod order;

pub use enumerate::{EnumeratedDuplicates, ListedGroup, NumberedPath, SelectionError, SizeSection};
pub use filter::{has_extension, select_extension, select_multiple, Bucket};
pub use finder::{DuplicateFinder, FinderConfig, HashFailurePolicy};
pub use groups::{Detection, DetectionStats, DuplicateIndex, HashGroup, SkippedFile};
pub use index::{build_size_index, index_files, index_path_count, SizeIndex};
pub use order::{sort_sizes, SortOrder};
