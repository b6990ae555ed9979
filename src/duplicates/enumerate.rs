//! Stable numbering of duplicate files.
//!
//! [`EnumeratedDuplicates`] assigns every duplicate path a 1-based number,
//! walking sizes in display order, then hash groups, then paths. The numbers
//! are the only handle a user has on a file when choosing what to delete, so
//! the same duplicate index and size order always produce the same numbers.
//!
//! A value is built for one detection run and owned by the caller; it is
//! rebuilt whenever the duplicate set changes.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::DuplicateIndex;
use crate::scanner::Hash;

/// A duplicate path with its sequence number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedPath {
    /// 1-based sequence number
    pub number: usize,
    /// Path of the duplicate file
    pub path: PathBuf,
}

/// One hash group in the numbered listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedGroup {
    /// Content digest shared by the group
    pub hash: Hash,
    /// Numbered members in group order
    pub files: Vec<NumberedPath>,
}

/// All hash groups of one size in the numbered listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeSection {
    /// File size in bytes
    pub size: u64,
    /// Groups in duplicate-index order
    pub groups: Vec<ListedGroup>,
}

/// Rejected selection input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// The line contained no numbers.
    #[error("no file numbers given")]
    Empty,

    /// A token did not parse as an integer.
    #[error("not a number: {0:?}")]
    NotANumber(String),

    /// A number does not refer to a listed duplicate.
    #[error("no duplicate file is numbered {0}")]
    Unknown(usize),
}

/// Sequence number to path mapping, with the listing it was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumeratedDuplicates {
    entries: BTreeMap<usize, PathBuf>,
    sections: Vec<SizeSection>,
}

impl EnumeratedDuplicates {
    /// Number the duplicates of `duplicates` following `size_order`.
    ///
    /// Sizes in `size_order` that are absent from `duplicates` are skipped
    /// without consuming numbers. Sizes absent from `size_order` are not
    /// listed.
    #[must_use]
    pub fn enumerate(duplicates: &DuplicateIndex, size_order: &[u64]) -> Self {
        let mut entries = BTreeMap::new();
        let mut sections = Vec::new();
        let mut next = 1;

        for size in size_order {
            let Some(groups) = duplicates.get(size) else {
                continue;
            };

            let mut listed = Vec::with_capacity(groups.len());
            for group in groups {
                let mut files = Vec::with_capacity(group.paths.len());
                for path in &group.paths {
                    entries.insert(next, path.clone());
                    files.push(NumberedPath {
                        number: next,
                        path: path.clone(),
                    });
                    next += 1;
                }
                listed.push(ListedGroup {
                    hash: group.hash,
                    files,
                });
            }

            sections.push(SizeSection {
                size: *size,
                groups: listed,
            });
        }

        log::debug!("Enumerated {} duplicate files", entries.len());
        Self { entries, sections }
    }

    /// Number of enumerated files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no files were enumerated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Path for `number`, if it was assigned.
    #[must_use]
    pub fn get(&self, number: usize) -> Option<&Path> {
        self.entries.get(&number).map(PathBuf::as_path)
    }

    /// Whether `number` was assigned.
    #[must_use]
    pub fn contains(&self, number: usize) -> bool {
        self.entries.contains_key(&number)
    }

    /// Iterate `(number, path)` in ascending number order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Path)> {
        self.entries.iter().map(|(n, p)| (*n, p.as_path()))
    }

    /// Listing grouped by size, then hash.
    #[must_use]
    pub fn sections(&self) -> &[SizeSection] {
        &self.sections
    }

    /// Validate a whitespace-separated list of sequence numbers.
    ///
    /// Every token must parse as an integer that was assigned by this
    /// enumeration. Repeated numbers are kept once, in first-seen order.
    ///
    /// # Errors
    ///
    /// The first offending token, or [`SelectionError::Empty`] for a blank line.
    pub fn parse_selection(&self, line: &str) -> Result<Vec<usize>, SelectionError> {
        let mut numbers = Vec::new();

        for token in line.split_whitespace() {
            let number: usize = token
                .parse()
                .map_err(|_| SelectionError::NotANumber(token.to_string()))?;
            if !self.contains(number) {
                return Err(SelectionError::Unknown(number));
            }
            if !numbers.contains(&number) {
                numbers.push(number);
            }
        }

        if numbers.is_empty() {
            return Err(SelectionError::Empty);
        }
        Ok(numbers)
    }
}
