//! sizedupe - interactive duplicate file finder
//!
//! Indexes a directory tree by file size, narrows the index by extension and
//! by size groups with more than one file, confirms duplicates by BLAKE3
//! content hash, and deletes the duplicates a user picks by number.
//!
//! # Pipeline
//!
//! ```text
//! directory -> SizeIndex -> extension filter -> multiplicity filter
//!           -> size order (display) + hash grouping -> numbering -> deletion
//! ```
//!
//! The engine lives in [`duplicates`] and [`actions`]; [`session`] wires it
//! to line-based prompts and [`output`] renders listings and reports.

pub mod actions;
pub mod cli;
pub mod config;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod output;
pub mod progress;
pub mod scanner;
pub mod session;

use std::io;
use std::sync::Arc;

use anyhow::Context;

use crate::cli::Cli;
use crate::config::SessionConfig;
use crate::error::ExitCode;
use crate::output::JsonOutput;
use crate::progress::{Progress, ProgressCallback};
use crate::session::{Prompter, Session};

/// Printed when no directory argument was given.
pub const DIRECTORY_NOT_SPECIFIED: &str = "Directory is not specified";

/// Run one session for the parsed command line.
///
/// # Errors
///
/// Any fatal scan, hash, prompt or deletion error, with context for the
/// phase it happened in.
pub fn run_app(cli: Cli) -> anyhow::Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);

    let Some(config) = SessionConfig::from_cli(&cli) else {
        println!("{}", DIRECTORY_NOT_SPECIFIED);
        return Ok(ExitCode::Success);
    };
    log::debug!("Session config: {:?}", config);

    let progress: Arc<dyn ProgressCallback> = Arc::new(Progress::new(config.quiet));
    let root = config.root.clone();
    let mut session = Session::new(config).with_progress(progress);

    if cli.json {
        let detection = session
            .detect()
            .with_context(|| format!("failed to scan {}", root.display()))?;
        let exit_code = if detection.skipped.is_empty() {
            ExitCode::Success
        } else {
            ExitCode::PartialSuccess
        };

        let output = JsonOutput::new(session.numbered(), &detection, exit_code);
        output
            .write_to(&mut io::stdout().lock())
            .context("failed to write JSON report")?;
        return Ok(exit_code);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    let outcome = session
        .run(&mut prompter)
        .with_context(|| format!("session over {} failed", root.display()))?;

    log::info!(
        "Session finished: {} bytes freed, {} skipped, {} failed deletions",
        outcome.bytes_freed,
        outcome.skipped.len(),
        outcome.delete_failures.len()
    );
    Ok(outcome.exit_code())
}
