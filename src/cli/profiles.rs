//! Profiles command.
//!
//! Lists stored aliases. Secrets are never printed.

use serde_json::json;

use crate::cli::output;
use crate::core::account;
use crate::core::store::FileStore;
use crate::error::Result;

/// List stored profiles.
pub fn execute(json: bool) -> Result<()> {
    let profiles = account::list_profiles(&FileStore::discover()?)?;

    if json {
        let entries: Vec<_> = profiles
            .iter()
            .map(|p| json!({ "alias": p.alias, "encrypted": p.encrypted }))
            .collect();
        return output::json(&json!({ "profiles": entries, "count": profiles.len() }));
    }

    if profiles.is_empty() {
        output::dimmed("no profiles stored");
        output::hint(&format!("run: {}", output::cmd("courier login")));
        return Ok(());
    }

    output::header(&format!("{} profiles", output::count(profiles.len())));
    output::rule();
    for profile in &profiles {
        let mode = if profile.encrypted { "encrypted" } else { "encoded" };
        output::kv(&profile.alias, mode);
    }
    Ok(())
}
