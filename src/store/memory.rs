// src/store/memory.rs
use std::collections::HashMap;
use anyhow::Result;

use super::StorageBackend;

/// In-memory backend, used by tests as a stand-in for the on-disk storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, slot: &str) -> Result<Option<String>> {
        Ok(self.slots.get(slot).cloned())
    }

    fn write(&mut self, slot: &str, content: &str) -> Result<()> {
        self.slots.insert(slot.to_string(), content.to_string());
        Ok(())
    }

    fn remove(&mut self, slot: &str) -> Result<()> {
        self.slots.remove(slot);
        Ok(())
    }
}
