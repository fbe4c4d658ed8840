//! Shared setup for commands that call the API.

use tracing::debug;

use crate::cli::{CredentialArgs, GlobalArgs};
use crate::core::account;
use crate::core::fetcher::ResourceFetcher;
use crate::core::prompt::TerminalPrompt;
use crate::core::resolver::ResolutionContext;
use crate::core::store::FileStore;
use crate::error::Result;

/// A fetcher plus the resolution state for one command invocation.
pub struct Session {
    pub fetcher: ResourceFetcher<TerminalPrompt>,
    pub ctx: ResolutionContext,
}

impl Session {
    /// Build a session from the command line.
    ///
    /// Profiles are only read when no explicit API key was given.
    pub fn open(global: &GlobalArgs, credentials: &CredentialArgs) -> Result<Self> {
        let fetcher = ResourceFetcher::new(global.api_config()?, TerminalPrompt::new())?;

        let mut ctx = ResolutionContext::new()
            .with_api_key(credentials.api_key.clone())
            .with_alias(credentials.alias.clone());

        if !ctx.has_explicit_key() {
            let profiles = account::list_profiles(&FileStore::discover()?)?;
            debug!(count = profiles.len(), alias = ctx.alias(), "loaded profiles");
            ctx = ctx.with_profiles(profiles);
        }

        Ok(Self { fetcher, ctx })
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.ctx.clear();
    }
}
