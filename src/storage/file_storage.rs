use crate::{
    config::BoardConfig,
    domain::Task,
    error::Result,
    storage::{decode_tasks, encode_tasks, Storage},
};
use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};
use tracing::debug;

/// File-based storage keeping the collection in `<root>/<key>.json`
pub struct FileStorage {
    root_path: PathBuf,
    key: String,
}

impl FileStorage {
    /// Creates a FileStorage rooted at `root`, storing under `key`
    pub fn new(root: impl AsRef<Path>, key: impl Into<String>) -> Self {
        Self {
            root_path: root.as_ref().to_path_buf(),
            key: key.into(),
        }
    }

    /// Creates a FileStorage using the storage key from `config`
    pub fn from_config(root: impl AsRef<Path>, config: &BoardConfig) -> Self {
        Self::new(root, config.storage_key.clone())
    }

    pub fn tasks_file(&self) -> PathBuf {
        self.root_path.join(format!("{}.json", self.key))
    }

    fn ensure_directory_exists(&self) -> Result<()> {
        if !self.root_path.exists() {
            fs::create_dir_all(&self.root_path)?;
        }
        Ok(())
    }
}

impl Storage for FileStorage {
    fn read(&self) -> Result<Option<Vec<Task>>> {
        let contents = match fs::read_to_string(self.tasks_file()) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        decode_tasks(&contents).map(Some)
    }

    fn write(&mut self, tasks: &[Task]) -> Result<()> {
        self.ensure_directory_exists()?;

        let json = encode_tasks(tasks)?;
        let file_path = self.tasks_file();

        // Write to a sibling temp file, then rename over the target
        let temp_path = file_path.with_extension("json.tmp");
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        drop(file);
        fs::rename(&temp_path, &file_path)?;

        debug!("Saved {} tasks to {}", tasks.len(), file_path.display());
        Ok(())
    }
}
