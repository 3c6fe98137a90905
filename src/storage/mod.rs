use crate::{domain::Task, error::Result};

#[cfg(feature = "file-storage")]
pub mod file_storage;
pub mod memory_storage;

#[cfg(feature = "sqlite-storage")]
pub mod sqlite_storage;

#[cfg(feature = "file-storage")]
pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;

#[cfg(feature = "sqlite-storage")]
pub use sqlite_storage::SqliteStorage;

/// Storage key used when no configuration says otherwise
pub const DEFAULT_STORAGE_KEY: &str = "kanbanTasks";

/// Durable home for the whole task collection.
///
/// Backends always store and return the complete collection; there are no
/// partial writes.
pub trait Storage {
    /// Reads the stored collection, or `None` if nothing has been written yet.
    ///
    /// Returns a serialization error when the stored value cannot be decoded.
    fn read(&self) -> Result<Option<Vec<Task>>>;

    /// Replaces the stored collection
    fn write(&mut self, tasks: &[Task]) -> Result<()>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn read(&self) -> Result<Option<Vec<Task>>> {
        (**self).read()
    }

    fn write(&mut self, tasks: &[Task]) -> Result<()> {
        (**self).write(tasks)
    }
}

/// Encodes the collection as a JSON array
pub fn encode_tasks(tasks: &[Task]) -> Result<String> {
    Ok(serde_json::to_string(tasks)?)
}

/// Decodes a JSON array of task records
pub fn decode_tasks(raw: &str) -> Result<Vec<Task>> {
    Ok(serde_json::from_str(raw)?)
}
