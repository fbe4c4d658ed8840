//! Command-line interface.

pub mod completions;
pub mod fetch;
pub mod list;
pub mod login;
pub mod logout;
pub mod output;
pub mod profiles;
pub mod push;
pub mod session;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::core::config::{ApiConfig, Transport};
use crate::core::constants;
use crate::core::resource::ResourceKind;
use crate::error::Result;

/// Courier - fetch and sync Postman collections and environments.
#[derive(Parser, Debug)]
#[command(
    name = "courier",
    about = "Fetch and sync Postman collections and environments",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Base URL of the Postman API
    #[arg(long, global = true, env = "COURIER_API_URL", default_value = constants::API_URL)]
    pub api_url: String,

    /// How the API key is sent: header or query
    #[arg(long, global = true, env = "COURIER_AUTH", default_value_t = Transport::Header)]
    pub auth: Transport,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "COURIER_TIMEOUT", default_value_t = constants::DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl GlobalArgs {
    /// API settings from the global flags.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::NotFound` if `--api-url` is not an http(s) URL.
    pub fn api_config(&self) -> Result<ApiConfig> {
        Ok(ApiConfig::new(&self.api_url)?
            .with_transport(self.auth)
            .with_timeout(Duration::from_secs(self.timeout)))
    }
}

/// Credential selection for commands that talk to the API.
#[derive(Args, Debug, Clone, Default)]
pub struct CredentialArgs {
    /// API key to use instead of a stored profile
    #[arg(long, env = "COURIER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Stored profile to use
    #[arg(long, env = "COURIER_ALIAS")]
    pub alias: Option<String>,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load a collection and/or environment and print them as JSON
    Fetch {
        /// Collection ID/UID, URL or local file
        #[arg(long, required_unless_present = "environment")]
        collection: Option<String>,

        /// Environment ID/UID, URL or local file
        #[arg(long)]
        environment: Option<String>,

        #[command(flatten)]
        credentials: CredentialArgs,
    },

    /// List the collections or environments visible to the API key
    List {
        /// collection or environment
        kind: ResourceKind,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        credentials: CredentialArgs,
    },

    /// Replace a remote collection or environment with a local file
    Push {
        /// collection or environment
        kind: ResourceKind,

        /// Local JSON export to upload
        file: PathBuf,

        /// Remote ID/UID or URL to update
        location: String,

        #[command(flatten)]
        credentials: CredentialArgs,
    },

    /// Store a Postman API key as a profile
    Login {
        /// Profile name
        #[arg(long, default_value = constants::DEFAULT_ALIAS)]
        alias: String,

        /// Encrypt the key with a passkey
        #[arg(long)]
        encrypt: bool,
    },

    /// Remove a stored profile
    Logout {
        /// Profile name
        #[arg(default_value = constants::DEFAULT_ALIAS)]
        alias: String,
    },

    /// List stored profiles
    Profiles {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Execute a command.
pub fn execute(cli: Cli) -> Result<()> {
    let Cli { global, command } = cli;

    match command {
        Command::Fetch {
            collection,
            environment,
            credentials,
        } => fetch::execute(
            &global,
            &credentials,
            collection.as_deref(),
            environment.as_deref(),
        ),
        Command::List {
            kind,
            json,
            credentials,
        } => list::execute(&global, &credentials, kind, json),
        Command::Push {
            kind,
            file,
            location,
            credentials,
        } => push::execute(&global, &credentials, kind, &file, &location),
        Command::Login { alias, encrypt } => login::execute(&alias, encrypt),
        Command::Logout { alias } => logout::execute(&alias),
        Command::Profiles { json } => profiles::execute(json),
        Command::Completions { shell } => completions::execute(shell),
    }
}
