//! Interactive session over one directory snapshot.
//!
//! A [`Session`] drives the whole flow:
//!
//! 1. build the size index of the directory
//! 2. ask for an extension filter and a sort order (unless preset)
//! 3. list same-size files
//! 4. on request, hash them and list the numbered duplicates
//! 5. on request, delete the chosen numbers and print the freed total
//!
//! # Architecture
//!
//! * [`prompt`]: line-based questions and answer validation loops.
//!
//! Listings are written through the prompter's writer, so a session can be
//! driven entirely from in-memory buffers.

pub mod prompt;

pub use prompt::{PromptError, Prompter, WRONG_FORMAT, WRONG_OPTION};

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use thiserror::Error;

use crate::actions::{delete_selected, DeleteError, DeleteFailure};
use crate::config::SessionConfig;
use crate::duplicates::{
    build_size_index, select_extension, select_multiple, sort_sizes, Detection,
    DuplicateFinder, EnumeratedDuplicates, SkippedFile, SortOrder,
};
use crate::error::ExitCode;
use crate::output;
use crate::progress::ProgressCallback;
use crate::scanner::{HashError, ScanError};

/// Printed when the check finds no duplicates.
pub const NO_DUPLICATES: &str = "No duplicate files found";

/// Error type for a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The directory could not be indexed.
    #[error("scan failed: {0}")]
    Scan(#[from] ScanError),

    /// Duplicate detection aborted on an unreadable file.
    #[error("duplicate check failed: {0}")]
    Hash(#[from] HashError),

    /// Asking a question failed.
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// Writing a listing failed.
    #[error("output error: {0}")]
    Output(#[from] io::Error),

    /// A selected file could not be removed; later selections were skipped.
    #[error("deletion of file #{number} failed after freeing {bytes_freed} bytes: {source}")]
    DeletionAborted {
        number: usize,
        bytes_freed: u64,
        #[source]
        source: DeleteError,
    },
}

/// What a completed session did.
#[derive(Debug, Default)]
pub struct SessionOutcome {
    /// Whether the duplicate check ran.
    pub checked: bool,
    /// Files left out of the check under the skip policy.
    pub skipped: Vec<SkippedFile>,
    /// Bytes freed by deletion.
    pub bytes_freed: u64,
    /// Selections that failed under the continue policy.
    pub delete_failures: Vec<DeleteFailure>,
}

impl SessionOutcome {
    /// Process exit code for this outcome.
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        if self.skipped.is_empty() && self.delete_failures.is_empty() {
            ExitCode::Success
        } else {
            ExitCode::PartialSuccess
        }
    }
}

/// One scan-and-delete session.
pub struct Session {
    config: SessionConfig,
    progress: Option<Arc<dyn ProgressCallback>>,
    numbered: EnumeratedDuplicates,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .field("progress", &self.progress.is_some())
            .field("numbered", &self.numbered.len())
            .finish()
    }
}

impl Session {
    /// Create a session for `config`.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            progress: None,
            numbered: EnumeratedDuplicates::default(),
        }
    }

    /// Report hashing progress to `callback`.
    #[must_use]
    pub fn with_progress(mut self, callback: Arc<dyn ProgressCallback>) -> Self {
        self.progress = Some(callback);
        self
    }

    /// Session settings.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Numbering from the latest duplicate check.
    #[must_use]
    pub fn numbered(&self) -> &EnumeratedDuplicates {
        &self.numbered
    }

    /// Run the interactive flow.
    ///
    /// # Errors
    ///
    /// Traversal and hashing failures, prompt I/O failures, and a deletion
    /// failure under the abort policy. In the last case the freed total has
    /// already been printed.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<SessionOutcome, SessionError> {
        let mut outcome = SessionOutcome::default();
        let color = self.config.color;

        let index = build_size_index(&self.config.root)?;

        let extension = match &self.config.extension {
            Some(preset) => preset.clone(),
            None => prompter.read_input("Enter file format:")?,
        };
        let extension = normalize_extension(&extension);
        let candidates = select_multiple(select_extension(index, extension));
        log::info!(
            "{} size bucket(s) with more than one file after filtering",
            candidates.len()
        );

        let sort = match self.config.sort {
            Some(preset) => preset,
            None => prompter.read_sort_order()?,
        };
        let order = sort_sizes(&candidates, sort);
        output::write_size_listing(prompter.output(), &candidates, &order, color)?;

        if !prompter.read_yes_no("Check for duplicates?")? {
            return Ok(outcome);
        }
        outcome.checked = true;

        let detection = self.finder().find_duplicates(&candidates)?;
        self.numbered = EnumeratedDuplicates::enumerate(&detection.duplicates, &order);

        output::write_skipped(prompter.output(), &detection.skipped)?;
        outcome.skipped = detection.skipped;

        if self.numbered.is_empty() {
            writeln!(prompter.output(), "{}", NO_DUPLICATES)?;
            return Ok(outcome);
        }
        output::write_duplicate_listing(prompter.output(), &self.numbered, color)?;

        if !prompter.read_yes_no("Delete files?")? {
            return Ok(outcome);
        }

        let numbers = prompter.read_file_numbers(&self.numbered)?;
        let result = delete_selected(&self.numbered, &numbers, &self.config.delete);

        output::write_freed_space(prompter.output(), result.bytes_freed)?;
        outcome.bytes_freed = result.bytes_freed;

        if result.aborted {
            if let Some(failure) = result.failures.into_iter().next() {
                return Err(SessionError::DeletionAborted {
                    number: failure.number,
                    bytes_freed: result.bytes_freed,
                    source: failure.error,
                });
            }
            return Ok(outcome);
        }

        output::write_delete_failures(prompter.output(), &result.failures)?;
        outcome.delete_failures = result.failures;
        Ok(outcome)
    }

    /// Run detection without prompting, using the preset extension (none by
    /// default) and sort order (descending by default).
    ///
    /// The numbering is available from [`Session::numbered`] afterwards.
    ///
    /// # Errors
    ///
    /// Traversal and hashing failures.
    pub fn detect(&mut self) -> Result<Detection, SessionError> {
        let index = build_size_index(&self.config.root)?;
        let extension = normalize_extension(self.config.extension.as_deref().unwrap_or(""));
        let candidates = select_multiple(select_extension(index, extension));
        let order = sort_sizes(&candidates, self.config.sort.unwrap_or(SortOrder::Descending));

        let detection = self.finder().find_duplicates(&candidates)?;
        self.numbered = EnumeratedDuplicates::enumerate(&detection.duplicates, &order);
        Ok(detection)
    }

    fn finder(&self) -> DuplicateFinder {
        let mut config = self.config.finder_config();
        if let Some(cb) = &self.progress {
            config = config.with_progress_callback(Arc::clone(cb));
        }
        DuplicateFinder::new(config)
    }
}

/// Trim surrounding whitespace and one leading dot, so `.txt` means `txt`.
fn normalize_extension(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed.strip_prefix('.').unwrap_or(trimmed)
}
