//! Courier - fetch and sync Postman collections and environments.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── fetch         # Load resources and print JSON
//! │   ├── list          # List remote resources
//! │   ├── push          # Upload a local export
//! │   ├── login         # Store an API key profile
//! │   ├── logout        # Remove a profile
//! │   ├── profiles      # List profiles
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── codec/        # Key obfuscation and encryption
//!     │   ├── base122   # Reversible text encoding
//!     │   └── aes       # Passkey encryption
//!     ├── config        # API host, transport, timeout
//!     ├── location      # ID/UID/URL classification
//!     ├── resolver      # API key resolution
//!     ├── fetcher       # HTTP get/update/list
//!     ├── loader        # Local file or remote load
//!     ├── store/        # Profile storage
//!     │   ├── fs        # TOML files on disk
//!     │   └── memory    # In-memory store
//!     └── account       # Profile management
//! ```
//!
//! # Credentials
//!
//! An explicit API key always wins. Otherwise the profile named by the alias
//! is used: encoded profiles decode silently, encrypted ones prompt once per
//! session for a passkey. Keys travel in the `X-Api-Key` header unless the
//! query transport is selected.

pub mod cli;
pub mod core;
pub mod error;
