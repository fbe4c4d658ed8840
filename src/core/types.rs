//! Type aliases for domain concepts.

/// A profile name (e.g., default, work).
///
/// Unique within a profile list; lookups take the first match.
pub type Alias = String;
