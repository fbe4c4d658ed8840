//! Resource loading from disk or the network.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::core::fetcher::ResourceFetcher;
use crate::core::location;
use crate::core::prompt::Prompt;
use crate::core::resolver::ResolutionContext;
use crate::core::resource::ResourceKind;
use crate::error::{LoadError, Result};

/// Load a collection or environment from `location`.
///
/// Identifiers and http(s) URLs are fetched; anything else is read as a
/// local JSON file. A payload wrapped in the kind envelope is unwrapped.
///
/// # Errors
///
/// Returns `LoadError::Read` or `LoadError::Parse` for local files, and any
/// [`ResourceFetcher::get`] error for remote ones.
pub fn load<P: Prompt>(
    fetcher: &ResourceFetcher<P>,
    kind: ResourceKind,
    location: &str,
    ctx: &mut ResolutionContext,
) -> Result<Value> {
    if location::is_remote(location) {
        return fetcher.get(kind, location, ctx);
    }

    read_file(kind, Path::new(location))
}

/// Read a local JSON export.
///
/// # Errors
///
/// Returns `LoadError::Read` if the file cannot be read and
/// `LoadError::Parse` if it is not JSON.
pub fn read_file(kind: ResourceKind, path: &Path) -> Result<Value> {
    debug!(%kind, path = %path.display(), "reading local file");

    let contents = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut value: Value = serde_json::from_str(contents.trim_start_matches('\u{feff}'))
        .map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    match value
        .as_object_mut()
        .and_then(|object| object.remove(kind.envelope_key()))
    {
        Some(inner) => Ok(inner),
        None => Ok(value),
    }
}
