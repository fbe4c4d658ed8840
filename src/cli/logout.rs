//! Logout command.

use crate::cli::output;
use crate::core::account;
use crate::core::store::FileStore;
use crate::error::Result;

/// Remove the profile named `alias`.
pub fn execute(alias: &str) -> Result<()> {
    account::remove_profile(&FileStore::discover()?, alias)?;
    output::success("Logout successful.");
    Ok(())
}
