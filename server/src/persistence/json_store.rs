use super::PersistenceError;
use serde::{de::DeserializeOwned, Serialize};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Generic whole-collection JSON persistence: one file holding a JSON array.
///
/// Every call goes to disk; nothing is cached between calls.
pub struct JsonStore<T> {
    path: PathBuf,
    _phantom: PhantomData<T>,
}

impl<T: Serialize + DeserializeOwned> JsonStore<T> {
    pub fn new(dir: &Path, collection: &str) -> Self {
        Self {
            path: dir.join(format!("{}.json", collection)),
            _phantom: PhantomData,
        }
    }

    #[cfg(test)]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every record. A missing or empty file is an empty collection.
    pub fn load_all(&self) -> Result<Vec<T>, PersistenceError> {
        if !self.path.exists() {
            return Ok(vec![]);
        }
        let contents = std::fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(vec![]);
        }
        let items = serde_json::from_str(&contents)?;
        Ok(items)
    }

    /// Replace the whole collection.
    ///
    /// The array is written to a sibling temp file and renamed over the
    /// target, so a concurrent reader sees either the old or the new file.
    pub fn save_all(&self, items: &[T]) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let tmp = self
            .path
            .with_extension(format!("json.{}.tmp", Uuid::new_v4().simple()));
        let json = serde_json::to_string_pretty(items)?;
        std::fs::write(&tmp, json)?;
        if let Err(e) = std::fs::rename(&tmp, &self.path) {
            tracing::warn!("Failed to replace {:?}: {}", self.path, e);
            let _ = std::fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}
