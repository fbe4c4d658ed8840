//! Profile storage.
//!
//! Profiles live in TOML files under a `[login]` table:
//!
//! ```toml
//! [[login.profiles]]
//! alias = "default"
//! api_key = "..."
//! encrypted = false
//! ```
//!
//! [`ProfileStore`] abstracts where that file comes from so commands can be
//! exercised against [`MemoryStore`] in tests and [`FileStore`] otherwise.

use serde::{Deserialize, Serialize};

use crate::core::profile::Profile;
use crate::error::Result;

mod fs;
mod memory;

pub use fs::FileStore;
pub use memory::MemoryStore;

/// Contents of a profile file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileFile {
    #[serde(default)]
    pub login: Login,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Login {
    #[serde(default)]
    pub profiles: Vec<Profile>,
}

impl ProfileFile {
    pub fn profiles(&self) -> &[Profile] {
        &self.login.profiles
    }

    pub fn into_profiles(self) -> Vec<Profile> {
        self.login.profiles
    }
}

/// Profile persistence.
pub trait ProfileStore {
    /// Load the effective profiles used for credential resolution.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if a file exists but cannot be read or parsed.
    fn load(&self) -> Result<ProfileFile>;

    /// Load only what [`ProfileStore::store`] writes back.
    ///
    /// Stores that merge several sources return the writable one here so a
    /// save never copies overlay profiles into it.
    fn load_writable(&self) -> Result<ProfileFile> {
        self.load()
    }

    /// Persist `file`, replacing the previous contents.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the file cannot be serialized or written.
    fn store(&self, file: &ProfileFile) -> Result<()>;
}

impl<S: ProfileStore + ?Sized> ProfileStore for &S {
    fn load(&self) -> Result<ProfileFile> {
        (**self).load()
    }

    fn load_writable(&self) -> Result<ProfileFile> {
        (**self).load_writable()
    }

    fn store(&self, file: &ProfileFile) -> Result<()> {
        (**self).store(file)
    }
}
