//! Demo configuration loaded via OrthoConfig.

use std::ffi::OsString;
use std::path::PathBuf;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs::Dir};
use ortho_config::OrthoConfig;
use serde::Deserialize;
use user_list::DEFAULT_USER_COUNT;

use crate::error::{PhotoPoolError, SettingsError};
use crate::fake_source::FakeUserData;
use crate::photo_pool::PhotoPool;

/// Configuration values controlling how the demo store is seeded.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_LIST")]
pub struct DemoSettings {
    /// RNG seed for fake data; a random seed is drawn when absent.
    pub seed: Option<u64>,
    /// Number of users to generate.
    pub user_count: Option<usize>,
    /// JSON file holding the avatar URL pool.
    pub photo_pool_path: Option<PathBuf>,
    /// Emit logs as JSON instead of human-readable lines.
    #[ortho_config(default = false)]
    pub json_logs: bool,
}

impl DemoSettings {
    /// Loads settings from the environment and configuration files.
    ///
    /// Command-line arguments are left for the demo script, so only the
    /// program name is handed to the loader.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Load`] if a source holds invalid values.
    pub fn load_for(program: &str) -> Result<Self, SettingsError> {
        Self::load_from_iter([OsString::from(program)]).map_err(|e| SettingsError::Load {
            message: e.to_string(),
        })
    }

    /// Return the configured user count, falling back to the default.
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.user_count.unwrap_or(DEFAULT_USER_COUNT)
    }

    /// Builds the fake-data source for the configured seed.
    #[must_use]
    pub fn source(&self) -> FakeUserData {
        self.seed
            .map_or_else(FakeUserData::from_random_seed, FakeUserData::from_seed)
    }

    /// Loads the configured photo pool, or the built-in pool when unset.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] if the path is not UTF-8 or the pool cannot
    /// be read and validated.
    pub fn photo_pool(&self) -> Result<PhotoPool, SettingsError> {
        let Some(path) = self.photo_pool_path.as_ref() else {
            return Ok(PhotoPool::default());
        };
        let utf8 = Utf8PathBuf::from_path_buf(path.clone()).map_err(|raw| {
            SettingsError::NonUtf8Path {
                path: raw.to_string_lossy().into_owned(),
            }
        })?;
        Ok(load_pool(&utf8)?)
    }
}

fn load_pool(path: &Utf8Path) -> Result<PhotoPool, PhotoPoolError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| PhotoPoolError::Io {
        path: path.to_path_buf(),
        message: "photo pool path must be a file".to_owned(),
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|e| {
        PhotoPoolError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    })?;
    PhotoPool::from_file(&dir, Utf8Path::new(file_name))
}
