use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};

use super::KeyValueStore;
use crate::errors::store_context;

/// One `<key>.json` file per key inside a directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create store directory {}", dir.display()))?;

        info!("Using file store in {}", dir.display());
        Ok(Self { dir })
    }

    fn build_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    fn build_temp_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json.tmp", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let file_path = self.build_path(key);
        if !file_path.exists() {
            return Ok(None);
        }

        let value = fs::read_to_string(&file_path).with_context(|| store_context("read", key))?;
        Ok(Some(value))
    }

    /// Writes next to the target and renames over it, so readers see either
    /// the old or the new value.
    fn set(&self, key: &str, value: &str) -> Result<()> {
        let temp_path = self.build_temp_path(key);
        let file_path = self.build_path(key);

        fs::write(&temp_path, value).with_context(|| store_context("write", key))?;
        fs::rename(&temp_path, &file_path).with_context(|| store_context("replace", key))?;

        debug!("Saved {} bytes to {}", value.len(), file_path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let file_path = self.build_path(key);
        if file_path.exists() {
            fs::remove_file(&file_path).with_context(|| store_context("remove", key))?;
        }
        Ok(())
    }
}
