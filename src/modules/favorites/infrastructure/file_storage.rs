use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::modules::favorites::domain::FavoritesStorage;
use crate::shared::errors::{AppError, AppResult};

/// One JSON file per key inside a data directory
///
/// Writes go to a sibling temporary file first and are renamed into place, so
/// a crash mid-write leaves the previous blob intact.
#[derive(Debug, Clone)]
pub struct FileFavoritesStorage {
    dir: PathBuf,
}

impl FileFavoritesStorage {
    pub fn new(dir: impl Into<PathBuf>) -> AppResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| {
            AppError::StorageError(format!("Cannot create data directory {:?}: {}", dir, e))
        })?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl FavoritesStorage for FileFavoritesStorage {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, payload: &str) -> AppResult<()> {
        let target = self.path_for(key);
        let tmp = self.dir.join(format!("{}.json.tmp", key));
        fs::write(&tmp, payload)?;
        fs::rename(&tmp, &target)?;
        Ok(())
    }
}
