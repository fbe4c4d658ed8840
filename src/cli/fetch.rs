//! Fetch command.
//!
//! Loads a collection and/or environment and prints them as one JSON object.

use serde_json::{Map, Value};

use crate::cli::session::Session;
use crate::cli::{output, CredentialArgs, GlobalArgs};
use crate::core::loader;
use crate::core::resource::ResourceKind;
use crate::error::Result;

/// Load the requested resources with a single resolution context.
pub fn execute(
    global: &GlobalArgs,
    credentials: &CredentialArgs,
    collection: Option<&str>,
    environment: Option<&str>,
) -> Result<()> {
    let mut session = Session::open(global, credentials)?;
    let mut result = Map::new();

    let requested = [
        (ResourceKind::Collection, collection),
        (ResourceKind::Environment, environment),
    ];
    for (kind, location) in requested {
        let Some(location) = location else {
            continue;
        };
        let value = loader::load(&session.fetcher, kind, location, &mut session.ctx)?;
        result.insert(kind.envelope_key().to_string(), value);
    }

    output::json(&Value::Object(result))
}
