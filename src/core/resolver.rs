//! API key resolution.
//!
//! Turns a [`ResolutionContext`] into a usable API key:
//!
//! 1. An explicit key wins outright; profiles are not consulted.
//! 2. A key already resolved in this context is reused.
//! 3. Otherwise the profile named by the alias is looked up. Encoded
//!    profiles are decoded; encrypted ones ask the [`Prompt`] for a passkey
//!    and are decrypted.
//!
//! A successful profile resolution is cached on the context so one session
//! prompts at most once. Failures leave the cache untouched.

use std::fmt;

use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::core::codec;
use crate::core::constants;
use crate::core::profile::{self, Profile};
use crate::core::prompt::Prompt;
use crate::error::{AuthError, Result};

/// Per-session resolution state, owned by the caller.
pub struct ResolutionContext {
    explicit: Option<Zeroizing<String>>,
    alias: String,
    profiles: Vec<Profile>,
    cached: Option<Zeroizing<String>>,
}

impl Default for ResolutionContext {
    fn default() -> Self {
        Self {
            explicit: None,
            alias: constants::DEFAULT_ALIAS.to_string(),
            profiles: Vec::new(),
            cached: None,
        }
    }
}

impl ResolutionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `secret` as-is for every request. Empty values are ignored.
    pub fn with_api_key(mut self, secret: Option<String>) -> Self {
        self.explicit = secret.filter(|s| !s.is_empty()).map(Zeroizing::new);
        self
    }

    /// Select a profile by alias; `None` keeps the default alias.
    pub fn with_alias(mut self, alias: Option<String>) -> Self {
        if let Some(alias) = alias {
            self.alias = alias;
        }
        self
    }

    pub fn with_profiles(mut self, profiles: Vec<Profile>) -> Self {
        self.profiles = profiles;
        self
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn has_explicit_key(&self) -> bool {
        self.explicit.is_some()
    }

    /// Key resolved earlier in this session, if any.
    pub fn cached(&self) -> Option<&str> {
        self.cached.as_ref().map(|s| s.as_str())
    }

    /// Drop the cached key (end of session).
    pub fn clear(&mut self) {
        self.cached = None;
    }
}

impl fmt::Debug for ResolutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolutionContext")
            .field("explicit", &self.explicit.as_ref().map(|_| "<redacted>"))
            .field("alias", &self.alias)
            .field("profiles", &self.profiles)
            .field("cached", &self.cached.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Resolves API keys, prompting through `P` for passkeys.
pub struct CredentialResolver<P> {
    prompt: P,
}

impl<P: Prompt> CredentialResolver<P> {
    pub fn new(prompt: P) -> Self {
        Self { prompt }
    }

    /// Resolve the API key for `ctx`.
    ///
    /// # Errors
    ///
    /// - `AuthError::NoAuthorizationData` if there is no explicit key and no
    ///   profile matches the alias
    /// - `AuthError::InvalidInput` if the passkey prompt is answered empty
    /// - `AuthError::Decryption` if the passkey does not decrypt the profile
    /// - `AuthError::Prompt` if the passkey cannot be read
    pub fn resolve(&self, ctx: &mut ResolutionContext) -> Result<Zeroizing<String>> {
        if let Some(secret) = &ctx.explicit {
            debug!("using explicit API key");
            return Ok(secret.clone());
        }

        if let Some(secret) = &ctx.cached {
            debug!(alias = %ctx.alias, "using cached API key");
            return Ok(secret.clone());
        }

        if ctx.profiles.is_empty() || ctx.alias.is_empty() {
            return Err(AuthError::NoAuthorizationData.into());
        }

        let profile =
            profile::find(&ctx.profiles, &ctx.alias).ok_or(AuthError::NoAuthorizationData)?;

        info!(alias = %profile.alias, "using profile");

        let secret = if profile.encrypted {
            self.unlock(profile)?
        } else {
            Zeroizing::new(codec::decode(&profile.secret)?)
        };

        ctx.cached = Some(secret.clone());
        Ok(secret)
    }

    fn unlock(&self, profile: &Profile) -> Result<Zeroizing<String>> {
        let passkey = Zeroizing::new(self.prompt.prompt_hidden(constants::PASSKEY_PROMPT)?);
        if passkey.is_empty() {
            return Err(AuthError::InvalidInput.into());
        }

        codec::decrypt(&profile.secret, &passkey)
            .map(Zeroizing::new)
            .map_err(|e| {
                debug!(alias = %profile.alias, error = %e, "profile decryption failed");
                AuthError::Decryption.into()
            })
    }
}
