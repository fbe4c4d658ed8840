//! List command.
//!
//! Lists the collections or environments the API key can see.

use serde_json::Value;

use crate::cli::session::Session;
use crate::cli::{output, CredentialArgs, GlobalArgs};
use crate::core::resource::ResourceKind;
use crate::error::Result;

/// List every resource of `kind`.
pub fn execute(
    global: &GlobalArgs,
    credentials: &CredentialArgs,
    kind: ResourceKind,
    json: bool,
) -> Result<()> {
    let mut session = Session::open(global, credentials)?;
    let items = session.fetcher.get_all(kind, &mut session.ctx)?;

    if json {
        return output::json(&items);
    }

    if items.is_empty() {
        output::dimmed(&format!("no {} found", kind.path_segment()));
        return Ok(());
    }

    output::header(&format!("{} {}", output::count(items.len()), kind.path_segment()));
    output::rule();
    for item in &items {
        let name = item.get("name").and_then(Value::as_str).unwrap_or("(unnamed)");
        let uid = item
            .get("uid")
            .or_else(|| item.get("id"))
            .and_then(Value::as_str)
            .unwrap_or("-");
        output::kv(name, uid);
    }

    Ok(())
}
