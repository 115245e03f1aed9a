//! Durable key-value slot backends.
//!
//! The store consumes this interface rather than owning it: hosts put
//! whatever backing they have (an app-data directory, a settings database,
//! an in-memory map in tests) behind [`Storage`].

use crate::error::{Result, StoreError};
use fs2::FileExt;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// A durable string-keyed slot store.
///
/// `read` distinguishes "absent" (`Ok(None)`) from a failed read; the
/// persistence bridge treats both the same at initialization but surfaces
/// write failures to the caller.
pub trait Storage: Send {
    /// Read the value stored under `key`, or `None` when the key is absent.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, overwriting any previous value.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// Volatile in-memory backend.
#[derive(Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.lock().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.slots.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-per-key backend rooted at a directory.
///
/// The directory is guarded by an exclusive lock file so the slot has a
/// single writer across processes.
pub struct FileStorage {
    dir: PathBuf,

    /// Lock file for exclusive access.
    _lock_file: File,
}

impl FileStorage {
    /// Open the backend at `dir`, creating the directory if needed.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;

        let lock_file = Self::acquire_lock(&dir)?;

        Ok(Self {
            dir,
            _lock_file: lock_file,
        })
    }

    /// The backing directory.
    pub fn path(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn acquire_lock(dir: &Path) -> Result<File> {
        let lock_path = dir.join("LOCK");
        let lock_file = File::create(lock_path)?;

        lock_file
            .try_lock_exclusive()
            .map_err(|_| StoreError::Locked)?;

        Ok(lock_file)
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        fs::write(self.slot_path(key), value)?;
        Ok(())
    }
}
