//! In-memory profile storage.

use std::cell::RefCell;

use super::{ProfileFile, ProfileStore};
use crate::error::Result;

/// Profiles held in memory; nothing touches disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    file: RefCell<ProfileFile>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(file: ProfileFile) -> Self {
        Self {
            file: RefCell::new(file),
        }
    }

    /// Snapshot of the current contents.
    pub fn snapshot(&self) -> ProfileFile {
        self.file.borrow().clone()
    }
}

impl ProfileStore for MemoryStore {
    fn load(&self) -> Result<ProfileFile> {
        Ok(self.snapshot())
    }

    fn store(&self, file: &ProfileFile) -> Result<()> {
        *self.file.borrow_mut() = file.clone();
        Ok(())
    }
}
