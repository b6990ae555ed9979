//! Output formatters for session results.
//!
//! This module provides two renderings of the same data:
//! - plain text listings for the interactive session ([`text`])
//! - a JSON report for automation and scripting ([`json`])
//!
//! # Example
//!
//! ```no_run
//! use sizedupe::duplicates::{build_size_index, sort_sizes, DuplicateFinder, EnumeratedDuplicates, SortOrder};
//! use sizedupe::error::ExitCode;
//! use sizedupe::output::JsonOutput;
//! use std::path::Path;
//!
//! let index = build_size_index(Path::new(".")).unwrap();
//! let detection = DuplicateFinder::with_defaults().find_duplicates(&index).unwrap();
//! let order = sort_sizes(&detection.duplicates, SortOrder::Descending);
//! let numbered = EnumeratedDuplicates::enumerate(&detection.duplicates, &order);
//!
//! let output = JsonOutput::new(&numbered, &detection, ExitCode::Success);
//! println!("{}", output.to_json_pretty().unwrap());
//! ```

pub mod json;
pub mod text;

pub use json::{JsonOutput, JsonOutputError};
pub use text::{
    write_delete_failures, write_duplicate_listing, write_freed_space, write_size_listing,
    write_skipped,
};
