use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::store::{PreferenceStore, StoreError};

/// All preferences in one JSON object on disk. Writes go to a sibling
/// temp file first and are renamed into place.
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Map<String, Value>, StoreError> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let contents = std::fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(Map::new());
        }
        let root: Value = serde_json::from_str(&contents)?;
        match root {
            Value::Object(map) => Ok(map),
            _ => Err(StoreError::Corrupt(format!(
                "{} does not hold a JSON object",
                self.path.display()
            ))),
        }
    }

    fn write_all(&self, map: &Map<String, Value>) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, serde_json::to_vec_pretty(map)?)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn update<F>(&self, f: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut Map<String, Value>),
    {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| StoreError::Unavailable("write lock poisoned".into()))?;
        let mut map = recover_for_write(self.read_all(), &self.path)?;
        f(&mut map);
        self.write_all(&map)
    }
}

/// Only unparseable content is replaced. A failed read keeps the file as is,
/// otherwise the keys not being written would be lost.
fn recover_for_write(
    read: Result<Map<String, Value>, StoreError>,
    path: &Path,
) -> Result<Map<String, Value>, StoreError> {
    match read {
        Ok(map) => Ok(map),
        Err(e @ (StoreError::Json(_) | StoreError::Corrupt(_))) => {
            tracing::warn!(path = %path.display(), error = %e, "discarding corrupt preferences file");
            Ok(Map::new())
        }
        Err(e) => Err(e),
    }
}

impl PreferenceStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let mut map = self.read_all()?;
        Ok(map.remove(key))
    }

    fn save(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.update(|map| {
            map.insert(key.to_string(), value);
        })
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.update(|map| {
            map.remove(key);
        })
    }
}
