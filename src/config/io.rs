//! Configuration file I/O operations

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use super::{Configurations, StoreError, StoredConfigurations};

/// Handle on the persisted configurations file.
///
/// There is no in-memory caching across invocations; every process loads
/// the file once and writes it back after each mutation. Two concurrent
/// invocations still race at the read-modify-write level (last save wins);
/// the lock below only keeps individual writes from interleaving.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Get the config directory path (~/.config/docketter/)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config/docketter")
    }

    /// Get the config file path (~/.config/docketter/configurations.json)
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("configurations.json")
    }

    /// Open the store at the default location, creating the config
    /// directory if it does not exist yet.
    pub fn open() -> Result<Self, StoreError> {
        let dir = Self::config_dir();
        std::fs::create_dir_all(&dir).map_err(|source| StoreError::Write {
            path: dir.clone(),
            source,
        })?;

        Ok(Self {
            path: Self::config_path(),
        })
    }

    /// Open the store at an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the configurations from disk.
    ///
    /// A missing file is not an error: it yields the default empty
    /// configuration. A file that exists but fails to parse is corrupt
    /// and propagates to the caller.
    pub fn load(&self) -> Result<Configurations, StoreError> {
        if !self.path.exists() {
            return Ok(Configurations::default());
        }

        let content =
            std::fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
                path: self.path.clone(),
                source,
            })?;

        let stored: StoredConfigurations =
            serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
                path: self.path.clone(),
                source,
            })?;

        Ok(stored.heal())
    }

    /// Save the configurations to disk with atomic write and file locking.
    ///
    /// Write goes to a temp file first, then renames over the target, so a
    /// crash mid-write never leaves a half-written configurations file.
    pub fn save(&self, configurations: &Configurations) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = serde_json::to_string_pretty(configurations)
            .map_err(|source| StoreError::Serialize {
                path: self.path.clone(),
                source,
            })?;

        let write_err = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        // Lock file is separate from the config to avoid issues with rename
        let lock_path = self.path.with_extension("json.lock");
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .map_err(write_err)?;

        lock_file.lock_exclusive().map_err(write_err)?;

        let temp_path = self.path.with_extension("json.tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(write_err)?;

        temp_file.write_all(content.as_bytes()).map_err(write_err)?;
        temp_file.sync_all().map_err(write_err)?;

        std::fs::rename(&temp_path, &self.path).map_err(write_err)?;

        // Lock is released when lock_file is dropped
        Ok(())
    }
}
