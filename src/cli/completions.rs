//! Completions command.

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::error::Result;

/// Write the completion script for `shell` to stdout.
pub fn execute(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();

    generate(shell, &mut command, name, &mut io::stdout().lock());
    Ok(())
}
