//! Remote resource kinds.

use std::fmt;
use std::str::FromStr;

/// A kind of resource the Postman API serves.
///
/// Each kind maps to a fixed path segment (`/collections`) and to the key
/// its payload is wrapped under (`{"collection": {...}}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Collection,
    Environment,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 2] = [ResourceKind::Collection, ResourceKind::Environment];

    /// API path segment, also the key of listing responses.
    pub fn path_segment(self) -> &'static str {
        match self {
            ResourceKind::Collection => "collections",
            ResourceKind::Environment => "environments",
        }
    }

    /// Key the single-resource payload is nested under.
    pub fn envelope_key(self) -> &'static str {
        match self {
            ResourceKind::Collection => "collection",
            ResourceKind::Environment => "environment",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.envelope_key())
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.envelope_key() == s || kind.path_segment() == s)
            .ok_or_else(|| format!("unknown resource kind: {}", s))
    }
}
