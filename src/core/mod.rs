//! Core library components.
//!
//! Credential resolution, location classification, the HTTP fetcher and
//! profile storage. Nothing here prints; the CLI owns all output.

pub mod account;
pub mod codec;
pub mod config;
pub mod constants;
pub mod fetcher;
pub mod loader;
pub mod location;
pub mod profile;
pub mod prompt;
pub mod resolver;
pub mod resource;
pub mod store;
pub mod types;
