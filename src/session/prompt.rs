//! Line-based prompts over any reader/writer pair.
//!
//! [`Prompter`] writes a question, reads one line, and re-asks until the
//! answer is acceptable. Reaching end of input while waiting for an answer
//! is an error; there is no default answer to fall back on.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::duplicates::{EnumeratedDuplicates, SortOrder};

/// Printed when a fixed-choice answer is not one of the choices.
pub const WRONG_OPTION: &str = "Wrong option";

/// Printed when a file-number list does not validate.
pub const WRONG_FORMAT: &str = "Wrong format";

/// Error type for prompt I/O.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Reading or writing the terminal failed.
    #[error("prompt I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input closed before an answer was given.
    #[error("input ended while waiting for: {0}")]
    EndOfInput(String),
}

/// Asks questions on `output` and reads answers from `input`.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer used for questions; listings are printed through it too.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consume the prompter, returning its reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Print `prompt` on its own line and read one answer line without its
    /// line terminator.
    ///
    /// # Errors
    ///
    /// [`PromptError::EndOfInput`] if the input is closed.
    pub fn read_input(&mut self, prompt: &str) -> Result<String, PromptError> {
        writeln!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::EndOfInput(prompt.to_string()));
        }
        let answer = line.trim_end_matches(['\n', '\r']).to_string();
        log::trace!("Answer to {:?}: {:?}", prompt, answer);
        Ok(answer)
    }

    /// Ask until the trimmed answer is one of `options`.
    ///
    /// # Errors
    ///
    /// See [`Prompter::read_input`].
    pub fn read_option(&mut self, prompt: &str, options: &[&str]) -> Result<String, PromptError> {
        loop {
            let answer = self.read_input(prompt)?;
            let answer = answer.trim();
            if options.contains(&answer) {
                return Ok(answer.to_string());
            }
            writeln!(self.output, "{}", WRONG_OPTION)?;
        }
    }

    /// Ask a `yes`/`no` question.
    ///
    /// # Errors
    ///
    /// See [`Prompter::read_input`].
    pub fn read_yes_no(&mut self, prompt: &str) -> Result<bool, PromptError> {
        Ok(self.read_option(prompt, &["yes", "no"])? == "yes")
    }

    /// Show the sort menu and ask for `1` (descending) or `2` (ascending).
    ///
    /// # Errors
    ///
    /// See [`Prompter::read_input`].
    pub fn read_sort_order(&mut self) -> Result<SortOrder, PromptError> {
        writeln!(self.output, "Size sorting options:")?;
        writeln!(self.output, "1. Descending")?;
        writeln!(self.output, "2. Ascending")?;

        let token = self.read_option("Enter a sorting option:", &["1", "2"])?;
        Ok(SortOrder::from_menu_token(&token).unwrap_or_default())
    }

    /// Ask until every number in the answer belongs to `numbered`.
    ///
    /// # Errors
    ///
    /// See [`Prompter::read_input`].
    pub fn read_file_numbers(
        &mut self,
        numbered: &EnumeratedDuplicates,
    ) -> Result<Vec<usize>, PromptError> {
        loop {
            let answer = self.read_input("Enter file numbers to delete:")?;
            match numbered.parse_selection(&answer) {
                Ok(numbers) => return Ok(numbers),
                Err(e) => {
                    log::debug!("Rejected selection {:?}: {}", answer, e);
                    writeln!(self.output, "{}", WRONG_FORMAT)?;
                }
            }
        }
    }
}
