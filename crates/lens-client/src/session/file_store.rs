//! File-backed store: one JSON file per key inside a profile directory.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use lens_core::errors::StorageError;
use lens_core::KeyValueStore;

/// Durable store rooted at a profile directory.
///
/// Each key maps to `<dir>/<key>.json`. Writes land in a uniquely named temp
/// file first and are moved into place with `rename`, so readers never see a
/// partially written value.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (and create if needed) the profile directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| StorageError::Unavailable {
            reason: format!("cannot create profile dir {}: {e}", dir.display()),
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
            && !key.starts_with('.');
        if !valid {
            return Err(StorageError::Io {
                key: key.to_string(),
                reason: "key contains characters not allowed in a file name".to_string(),
            });
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

fn io_err(key: &str, e: std::io::Error) -> StorageError {
    StorageError::Io {
        key: key.to_string(),
        reason: e.to_string(),
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match std::fs::read(&path) {
            // Non-UTF-8 content is corruption, which the session layer treats as absent.
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_err(key, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let tmp = self
            .dir
            .join(format!(".{key}.{}.tmp", uuid::Uuid::new_v4().simple()));

        std::fs::write(&tmp, value).map_err(|e| io_err(key, e))?;
        if let Err(e) = std::fs::rename(&tmp, &path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(io_err(key, e));
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_err(key, e)),
        }
    }
}
