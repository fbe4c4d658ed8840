//! Profile management operations.
//!
//! Writes go through [`ProfileStore::load_writable`] so profiles from a
//! project overlay are never copied into the home file.

use tracing::info;

use crate::core::profile::{self, Profile};
use crate::core::store::ProfileStore;
use crate::error::Result;

/// Insert `profile`, replacing any profile with the same alias.
///
/// Returns `true` if an existing profile was replaced.
///
/// # Errors
///
/// Returns `StoreError` if the store cannot be read or written.
pub fn save_profile(store: &impl ProfileStore, profile: Profile) -> Result<bool> {
    let mut file = store.load_writable()?;
    let alias = profile.alias.clone();
    let replaced = profile::upsert(&mut file.login.profiles, profile);
    store.store(&file)?;

    info!(%alias, replaced, "saved profile");
    Ok(replaced)
}

/// Delete the profile named `alias`.
///
/// # Errors
///
/// Returns `AuthError::AliasNotFound` if the writable store has no such
/// profile, or `StoreError` on I/O failure.
pub fn remove_profile(store: &impl ProfileStore, alias: &str) -> Result<()> {
    let mut file = store.load_writable()?;
    profile::remove(&mut file.login.profiles, alias)?;
    store.store(&file)?;

    info!(%alias, "removed profile");
    Ok(())
}

/// Effective profiles, in resolution order.
pub fn list_profiles(store: &impl ProfileStore) -> Result<Vec<Profile>> {
    Ok(store.load()?.into_profiles())
}
