//! Interactive input.
//!
//! The resolver never touches the terminal directly; it asks a [`Prompt`].
//! Tests substitute a scripted implementation.

use std::io::{self, BufRead, IsTerminal};

use dialoguer::Password;
use tracing::trace;
use zeroize::Zeroizing;

use crate::error::{AuthError, Result};

/// Source of hidden user input.
pub trait Prompt {
    /// Ask for a value without echoing what is typed.
    ///
    /// Blocks until the user submits. An empty answer is returned as-is;
    /// callers decide whether it is valid.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Prompt` if input cannot be read (closed terminal,
    /// interrupt).
    fn prompt_hidden(&self, message: &str) -> Result<String>;
}

impl<P: Prompt + ?Sized> Prompt for &P {
    fn prompt_hidden(&self, message: &str) -> Result<String> {
        (**self).prompt_hidden(message)
    }
}

impl<P: Prompt + ?Sized> Prompt for Box<P> {
    fn prompt_hidden(&self, message: &str) -> Result<String> {
        (**self).prompt_hidden(message)
    }
}

/// Prompt on the controlling terminal.
///
/// The prompt and the newline after submission go to stderr, so stdout
/// output is never interleaved with it. When stdin is not a terminal, one
/// line is read from it instead.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompt {
    confirm: bool,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask twice and require both answers to match (interactive only).
    pub fn with_confirmation(mut self) -> Self {
        self.confirm = true;
        self
    }
}

impl Prompt for TerminalPrompt {
    fn prompt_hidden(&self, message: &str) -> Result<String> {
        if !io::stdin().is_terminal() {
            trace!("reading hidden input from stdin");
            return read_piped_line(&mut io::stdin().lock());
        }

        let mut password = Password::new()
            .with_prompt(message)
            .allow_empty_password(true);
        if self.confirm {
            password = password.with_confirmation("Confirm", "values do not match");
        }

        password
            .interact()
            .map_err(|e| AuthError::Prompt(e.to_string()).into())
    }
}

/// Read one line from piped input without its line ending.
fn read_piped_line(reader: &mut impl BufRead) -> Result<String> {
    let mut line = Zeroizing::new(String::new());
    reader
        .read_line(&mut *line)
        .map_err(|e| AuthError::Prompt(e.to_string()))?;

    let len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(len);
    Ok(std::mem::take(&mut *line))
}
