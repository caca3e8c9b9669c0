// src/store/file.rs
use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};

use super::StorageBackend;

/// On-disk backend: one RON file per slot under the data directory.
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{}.ron", slot))
    }
}

impl StorageBackend for FileStorage {
    fn read(&self, slot: &str) -> Result<Option<String>> {
        let path = self.slot_path(slot);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Some(content))
    }

    fn write(&mut self, slot: &str, content: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;
        let path = self.slot_path(slot);
        fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))
    }

    fn remove(&mut self, slot: &str) -> Result<()> {
        let path = self.slot_path(slot);
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_slot_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        assert!(storage.read("pending").unwrap().is_none());
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path());

        storage.write("history", "(some: \"content\")").unwrap();
        assert_eq!(
            storage.read("history").unwrap().as_deref(),
            Some("(some: \"content\")")
        );
    }

    #[test]
    fn remove_is_a_no_op_on_missing_slot() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path());

        storage.remove("pending").unwrap();

        storage.write("pending", "x").unwrap();
        storage.remove("pending").unwrap();
        assert!(storage.read("pending").unwrap().is_none());
    }
}
