//! JSON report of the numbered duplicate listing.
//!
//! Provides machine-readable output for scripting. The numbers are the same
//! ones an interactive session would show for the same directory and options.
//!
//! # Output Schema
//!
//! ```json
//! {
//!   "sizes": [
//!     {
//!       "size": 4,
//!       "groups": [
//!         {
//!           "hash": "abc123...",
//!           "files": [ { "number": 1, "path": "dir/a.txt" } ]
//!         }
//!       ]
//!     }
//!   ],
//!   "skipped": [],
//!   "summary": {
//!     "buckets": 1,
//!     "hashed_files": 3,
//!     "duplicate_groups": 1,
//!     "duplicate_files": 2,
//!     "reclaimable_bytes": 4,
//!     "exit_code": 0,
//!     "exit_code_name": "SD000"
//!   }
//! }
//! ```

use std::io::Write;

use serde::Serialize;

use crate::duplicates::{Detection, EnumeratedDuplicates, SizeSection, SkippedFile};
use crate::error::ExitCode;
use crate::scanner::hash_to_hex;

/// A numbered duplicate path.
#[derive(Debug, Clone, Serialize)]
pub struct JsonFile {
    /// Sequence number used for selection
    pub number: usize,
    /// Path as it was found during traversal
    pub path: String,
}

/// One hash group.
#[derive(Debug, Clone, Serialize)]
pub struct JsonGroup {
    /// BLAKE3 hash as hexadecimal string (64 characters)
    pub hash: String,
    /// Numbered members
    pub files: Vec<JsonFile>,
}

/// All groups sharing one file size.
#[derive(Debug, Clone, Serialize)]
pub struct JsonSize {
    /// File size in bytes
    pub size: u64,
    /// Hash groups of this size
    pub groups: Vec<JsonGroup>,
}

impl JsonSize {
    fn from_section(section: &SizeSection) -> Self {
        Self {
            size: section.size,
            groups: section
                .groups
                .iter()
                .map(|group| JsonGroup {
                    hash: hash_to_hex(&group.hash),
                    files: group
                        .files
                        .iter()
                        .map(|f| JsonFile {
                            number: f.number,
                            path: f.path.to_string_lossy().into_owned(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// A file that could not be hashed.
#[derive(Debug, Clone, Serialize)]
pub struct JsonSkipped {
    /// Path that failed
    pub path: String,
    /// Why it failed
    pub reason: String,
}

impl From<&SkippedFile> for JsonSkipped {
    fn from(file: &SkippedFile) -> Self {
        Self {
            path: file.path.to_string_lossy().into_owned(),
            reason: file.reason.clone(),
        }
    }
}

/// Summary statistics in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonSummary {
    /// Size buckets examined by the hash pass
    pub buckets: usize,
    /// Files successfully hashed
    pub hashed_files: usize,
    /// Confirmed duplicate groups
    pub duplicate_groups: usize,
    /// Files in duplicate groups
    pub duplicate_files: usize,
    /// Bytes freed by keeping one copy per group
    pub reclaimable_bytes: u64,
    /// The exit code number
    pub exit_code: i32,
    /// The machine-readable exit code name (e.g., "SD000")
    pub exit_code_name: String,
}

/// Complete JSON report.
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput {
    /// Numbered listing in display order
    pub sizes: Vec<JsonSize>,
    /// Files left out of detection
    pub skipped: Vec<JsonSkipped>,
    /// Pass statistics
    pub summary: JsonSummary,
}

impl JsonOutput {
    /// Build a report from a numbered listing and the detection it came from.
    #[must_use]
    pub fn new(
        numbered: &EnumeratedDuplicates,
        detection: &Detection,
        exit_code: ExitCode,
    ) -> Self {
        let stats = &detection.stats;
        Self {
            sizes: numbered
                .sections()
                .iter()
                .map(JsonSize::from_section)
                .collect(),
            skipped: detection.skipped.iter().map(JsonSkipped::from).collect(),
            summary: JsonSummary {
                buckets: stats.buckets,
                hashed_files: stats.hashed_files,
                duplicate_groups: stats.duplicate_groups,
                duplicate_files: stats.duplicate_files,
                reclaimable_bytes: stats.reclaimable_bytes,
                exit_code: exit_code.as_i32(),
                exit_code_name: exit_code.code_prefix().to_string(),
            },
        }
    }

    /// Serialize to pretty-printed JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails (unlikely for valid data).
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write pretty JSON followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), JsonOutputError> {
        let json = self.to_json_pretty()?;
        writer.write_all(json.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

/// Errors that can occur during JSON output.
#[derive(thiserror::Error, Debug)]
pub enum JsonOutputError {
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error during writing
    #[error("I/O error during JSON generation: {0}")]
    Io(#[from] std::io::Error),
}
