use crate::{
    domain::Task,
    error::Result,
    storage::{decode_tasks, encode_tasks, Storage, DEFAULT_STORAGE_KEY},
};
use std::collections::HashMap;
use tracing::debug;

/// In-memory key/value storage holding serialized collections as strings
#[derive(Debug, Clone)]
pub struct MemoryStorage {
    key: String,
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            entries: HashMap::new(),
        }
    }

    /// Seeds a raw value, bypassing encoding
    pub fn with_raw(mut self, key: impl Into<String>, raw: impl Into<String>) -> Self {
        self.entries.insert(key.into(), raw.into());
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The raw value stored under `key`
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new(DEFAULT_STORAGE_KEY)
    }
}

impl Storage for MemoryStorage {
    fn read(&self) -> Result<Option<Vec<Task>>> {
        match self.entries.get(&self.key) {
            Some(raw) => decode_tasks(raw).map(Some),
            None => Ok(None),
        }
    }

    fn write(&mut self, tasks: &[Task]) -> Result<()> {
        let raw = encode_tasks(tasks)?;
        debug!("Stored {} tasks under {}", tasks.len(), self.key);
        self.entries.insert(self.key.clone(), raw);
        Ok(())
    }
}
