//! Filesystem-based profile storage.
//!
//! Reads `~/.courier/config.toml` and, when present, a project overlay
//! `./.courier.toml`. Only the home file is ever written.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{ProfileFile, ProfileStore};
use crate::core::constants;
use crate::core::profile;
use crate::error::{Result, StoreError};

/// Validate file permissions (Unix only).
#[cfg(unix)]
fn check_permissions(path: &Path, expected_mode: u32) {
    use std::os::unix::fs::PermissionsExt;

    let Ok(metadata) = fs::metadata(path) else {
        return;
    };
    let actual_mode = metadata.permissions().mode() & 0o777;

    if actual_mode != expected_mode {
        warn!(
            path = %path.display(),
            mode = %format!("{:o}", actual_mode),
            "profile file has loose permissions; run: chmod {:o} {}",
            expected_mode,
            path.display()
        );
    }
}

#[cfg(not(unix))]
fn check_permissions(_path: &Path, _expected_mode: u32) {}

fn read(path: &Path) -> Result<Option<ProfileFile>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| StoreError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let file = toml::from_str(&contents).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "loaded profile file");
    Ok(Some(file))
}

/// Profile files on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    home: PathBuf,
    project: Option<PathBuf>,
}

impl FileStore {
    /// Store writing to `home`, with an optional read-only overlay.
    pub fn new(home: impl Into<PathBuf>, project: Option<PathBuf>) -> Self {
        Self {
            home: home.into(),
            project,
        }
    }

    /// Default locations: the home config and `.courier.toml` in the
    /// current directory.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoHomeDir` if the home directory is unknown.
    pub fn discover() -> Result<Self> {
        let home = dirs::home_dir().ok_or(StoreError::NoHomeDir)?;
        let project = std::env::current_dir()
            .ok()
            .map(|dir| dir.join(constants::PROJECT_CONFIG_FILE));

        Ok(Self::new(
            home.join(constants::HOME_CONFIG_DIR)
                .join(constants::HOME_CONFIG_FILE),
            project,
        ))
    }

    /// Path of the writable home file.
    pub fn path(&self) -> &Path {
        &self.home
    }
}

impl ProfileStore for FileStore {
    fn load(&self) -> Result<ProfileFile> {
        let mut merged = self.load_writable()?;

        let Some(project) = &self.project else {
            return Ok(merged);
        };
        if let Some(overlay) = read(project)? {
            for entry in overlay.into_profiles() {
                profile::upsert(&mut merged.login.profiles, entry);
            }
        }

        Ok(merged)
    }

    fn load_writable(&self) -> Result<ProfileFile> {
        check_permissions(&self.home, 0o600);
        Ok(read(&self.home)?.unwrap_or_default())
    }

    fn store(&self, file: &ProfileFile) -> Result<()> {
        if let Some(dir) = self.home.parent() {
            fs::create_dir_all(dir).map_err(|source| StoreError::CreateDir {
                path: dir.to_path_buf(),
                source,
            })?;

            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                fs::set_permissions(dir, fs::Permissions::from_mode(0o700)).map_err(
                    |source| StoreError::CreateDir {
                        path: dir.to_path_buf(),
                        source,
                    },
                )?;
            }
        }

        let contents = toml::to_string_pretty(file).map_err(StoreError::Serialize)?;
        let write_error = |source| StoreError::WriteFile {
            path: self.home.clone(),
            source,
        };
        fs::write(&self.home, contents).map_err(write_error)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.home, fs::Permissions::from_mode(0o600))
                .map_err(write_error)?;
        }

        debug!(path = %self.home.display(), profiles = file.profiles().len(), "saved profiles");
        Ok(())
    }
}
