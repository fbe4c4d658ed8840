//! Push command.
//!
//! Uploads a local export over a remote collection or environment.

use std::path::Path;

use tracing::info;

use crate::cli::session::Session;
use crate::cli::{output, CredentialArgs, GlobalArgs};
use crate::core::{loader, location};
use crate::core::resource::ResourceKind;
use crate::error::Result;

/// Replace the resource at `target` with the contents of `file`.
pub fn execute(
    global: &GlobalArgs,
    credentials: &CredentialArgs,
    kind: ResourceKind,
    file: &Path,
    target: &str,
) -> Result<()> {
    let data = loader::read_file(kind, file)?;

    let mut session = Session::open(global, credentials)?;
    session.fetcher.update(kind, &data, target, &mut session.ctx)?;

    let shown = location::display(target);
    info!(%kind, location = %shown, "pushed");
    output::success(&format!("updated {} {}", kind, shown));
    Ok(())
}
