//! Stored credential profiles.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::codec;
use crate::core::types::Alias;
use crate::error::{AuthError, Result};

/// A named, stored API key.
///
/// `secret` is Base-122 encoded when `encrypted` is false, and hex
/// ciphertext under a user passkey when it is true.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub alias: Alias,
    #[serde(rename = "api_key")]
    pub secret: String,
    #[serde(default)]
    pub encrypted: bool,
}

impl Profile {
    /// Build a profile for `api_key`, encrypting it when a passkey is given.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidInput` if the alias, key or passkey is empty.
    pub fn seal(alias: &str, api_key: &str, passkey: Option<&str>) -> Result<Self> {
        if alias.trim().is_empty() || api_key.is_empty() {
            return Err(AuthError::InvalidInput.into());
        }

        let profile = match passkey {
            Some("") => return Err(AuthError::InvalidInput.into()),
            Some(passkey) => Self {
                alias: alias.trim().to_string(),
                secret: codec::encrypt(api_key, passkey)?,
                encrypted: true,
            },
            None => Self {
                alias: alias.trim().to_string(),
                secret: codec::encode(api_key),
                encrypted: false,
            },
        };

        debug!(alias = %profile.alias, encrypted = profile.encrypted, "sealed profile");
        Ok(profile)
    }
}

impl fmt::Debug for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Profile")
            .field("alias", &self.alias)
            .field("secret", &"<redacted>")
            .field("encrypted", &self.encrypted)
            .finish()
    }
}

/// First profile with `alias`.
pub fn find<'a>(profiles: &'a [Profile], alias: &str) -> Option<&'a Profile> {
    profiles.iter().find(|p| p.alias == alias)
}

/// Insert `profile`, replacing one with the same alias in place.
///
/// Returns `true` if an existing profile was replaced.
pub fn upsert(profiles: &mut Vec<Profile>, profile: Profile) -> bool {
    match profiles.iter_mut().find(|p| p.alias == profile.alias) {
        Some(existing) => {
            *existing = profile;
            true
        }
        None => {
            profiles.push(profile);
            false
        }
    }
}

/// Remove every profile with `alias`.
///
/// # Errors
///
/// Returns `AuthError::AliasNotFound` if no profile has that alias.
pub fn remove(profiles: &mut Vec<Profile>, alias: &str) -> Result<()> {
    let before = profiles.len();
    profiles.retain(|p| p.alias != alias);

    if profiles.len() == before {
        return Err(AuthError::AliasNotFound(alias.to_string()).into());
    }
    Ok(())
}
