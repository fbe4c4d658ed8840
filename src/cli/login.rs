//! Login command.
//!
//! Reads an API key (and optionally a passkey) with hidden input and stores
//! it as a profile.

use zeroize::Zeroizing;

use crate::cli::output;
use crate::core::account;
use crate::core::constants;
use crate::core::profile::Profile;
use crate::core::prompt::{Prompt, TerminalPrompt};
use crate::core::store::FileStore;
use crate::error::Result;

/// Store a profile named `alias`.
pub fn execute(alias: &str, encrypt: bool) -> Result<()> {
    let store = FileStore::discover()?;

    let api_key = Zeroizing::new(TerminalPrompt::new().prompt_hidden(constants::API_KEY_PROMPT)?);
    let passkey = if encrypt {
        Some(Zeroizing::new(
            TerminalPrompt::new()
                .with_confirmation()
                .prompt_hidden(constants::PASSKEY_PROMPT)?,
        ))
    } else {
        None
    };

    let profile = Profile::seal(alias, api_key.trim(), passkey.as_deref().map(String::as_str))?;
    let saved = profile.alias.clone();
    let encrypted = profile.encrypted;
    let replaced = account::save_profile(&store, profile)?;

    let verb = if replaced { "replaced" } else { "saved" };
    let mode = if encrypted { "encrypted" } else { "encoded" };
    output::success(&format!("{} profile {} ({})", verb, saved, mode));
    Ok(())
}
