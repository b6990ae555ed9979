//! Command-line interface definitions for sizedupe.
//!
//! This module defines the CLI arguments using the clap derive API. Most
//! answers the interactive session asks for can be preset with a flag or
//! environment variable, which makes the session scriptable.
//!
//! # Example
//!
//! ```bash
//! # Interactive session over ~/Downloads
//! sizedupe ~/Downloads
//!
//! # Only .jpg files, smallest first
//! sizedupe ~/Pictures --extension jpg --sort asc
//!
//! # Numbered duplicate report for scripting
//! sizedupe ~/Downloads --json
//! ```

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::duplicates::SortOrder;

/// Interactive duplicate file finder.
///
/// Indexes a directory by file size, confirms duplicates by BLAKE3 content
/// hash, and deletes the files you pick by number.
#[derive(Debug, Parser)]
#[command(name = "sizedupe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to scan
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress logging except errors and hide progress bars
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,

    /// File extension to keep, without the dot (skips the prompt)
    #[arg(short, long, value_name = "EXT", env = "SIZEDUPE_EXTENSION")]
    pub extension: Option<String>,

    /// Size display order (skips the prompt)
    #[arg(short, long, value_enum, env = "SIZEDUPE_SORT")]
    pub sort: Option<SortArg>,

    /// Number of threads for content hashing
    #[arg(
        long,
        value_name = "N",
        default_value_t = 1,
        env = "SIZEDUPE_HASH_THREADS",
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub hash_threads: u16,

    /// Skip files that cannot be read while hashing instead of aborting
    #[arg(long)]
    pub skip_unreadable: bool,

    /// Keep deleting remaining selections after a failure
    #[arg(long)]
    pub keep_going: bool,

    /// Move deleted files to the system trash
    #[arg(long)]
    pub trash: bool,

    /// Print the numbered duplicate report as JSON and exit without prompting
    #[arg(long)]
    pub json: bool,

    /// Report fatal errors as JSON on stderr
    #[arg(long)]
    pub json_errors: bool,
}

/// Size display order on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    /// Largest sizes first
    #[value(alias = "descending")]
    Desc,
    /// Smallest sizes first
    #[value(alias = "ascending")]
    Asc,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Desc => SortOrder::Descending,
            SortArg::Asc => SortOrder::Ascending,
        }
    }
}
