//! Runtime configuration for one session.
//!
//! [`SessionConfig`] is resolved once from the parsed command line (flags and
//! their environment-variable fallbacks). It carries plain data only, so the
//! session and the detection engine never depend on clap types. No
//! configuration file is read.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use crate::actions::{DeleteConfig, DeleteFailurePolicy};
use crate::cli::Cli;
use crate::duplicates::{FinderConfig, HashFailurePolicy, SortOrder};

/// Settings for a single scan-and-delete session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Directory to scan.
    pub root: PathBuf,
    /// Preset answer for the extension prompt.
    pub extension: Option<String>,
    /// Preset answer for the sort prompt.
    pub sort: Option<SortOrder>,
    /// Hashing worker threads.
    pub hash_threads: usize,
    /// Unreadable-file behaviour during hashing.
    pub hash_failure_policy: HashFailurePolicy,
    /// Deletion behaviour.
    pub delete: DeleteConfig,
    /// Colorize listings.
    pub color: bool,
    /// Hide progress bars.
    pub quiet: bool,
}

impl SessionConfig {
    /// Defaults for scanning `root`: everything prompted, sequential
    /// hashing, abort on any failure, permanent deletion.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            extension: None,
            sort: None,
            hash_threads: 1,
            hash_failure_policy: HashFailurePolicy::Abort,
            delete: DeleteConfig::default(),
            color: false,
            quiet: true,
        }
    }

    /// Resolve from the command line. Returns `None` when no directory was
    /// given.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Option<Self> {
        let root = cli.path.clone()?;

        let hash_failure_policy = if cli.skip_unreadable {
            HashFailurePolicy::Skip
        } else {
            HashFailurePolicy::Abort
        };
        let delete_failure_policy = if cli.keep_going {
            DeleteFailurePolicy::Continue
        } else {
            DeleteFailurePolicy::Abort
        };

        Some(Self {
            root,
            extension: cli.extension.clone(),
            sort: cli.sort.map(SortOrder::from),
            hash_threads: usize::from(cli.hash_threads),
            hash_failure_policy,
            delete: DeleteConfig {
                use_trash: cli.trash,
                failure_policy: delete_failure_policy,
            },
            color: resolve_color(cli.no_color, io::stdout().is_terminal()),
            quiet: cli.quiet,
        })
    }

    /// Finder configuration derived from these settings.
    #[must_use]
    pub fn finder_config(&self) -> FinderConfig {
        FinderConfig::default()
            .with_hash_threads(self.hash_threads)
            .with_failure_policy(self.hash_failure_policy)
    }

    /// Preset the extension answer.
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    /// Preset the sort answer.
    #[must_use]
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Set the hashing failure policy.
    #[must_use]
    pub fn with_hash_failure_policy(mut self, policy: HashFailurePolicy) -> Self {
        self.hash_failure_policy = policy;
        self
    }

    /// Set the deletion behaviour.
    #[must_use]
    pub fn with_delete_config(mut self, delete: DeleteConfig) -> Self {
        self.delete = delete;
        self
    }
}

/// Listings are colored only on a terminal, and never with `--no-color`.
fn resolve_color(no_color: bool, stdout_is_terminal: bool) -> bool {
    !no_color && stdout_is_terminal
}
