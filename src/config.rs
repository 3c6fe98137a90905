//! Board configuration.
//!
//! Read from a JSON file; any field left out falls back to its default, and a
//! missing file yields the default configuration.

use crate::{
    error::{KanbanError, Result},
    storage::DEFAULT_STORAGE_KEY,
};
use serde::{Deserialize, Serialize};
use std::{fs, io::ErrorKind, path::Path};

/// Conventional file name for the board configuration
pub const CONFIG_FILE: &str = "board.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Title shown above the board
    #[serde(default = "default_name")]
    pub name: String,

    /// Key the task collection is persisted under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_name() -> String {
    "Kanban Board".to_string()
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            storage_key: default_storage_key(),
        }
    }
}

impl BoardConfig {
    pub fn validate(&self) -> Result<()> {
        if self.storage_key.trim().is_empty() {
            return Err(KanbanError::ConfigError(
                "storage_key must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Loads configuration from `path`, falling back to defaults
pub fn load_config(path: &Path) -> Result<BoardConfig> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BoardConfig::default()),
        Err(e) => return Err(e.into()),
    };

    let config: BoardConfig = serde_json::from_str(&contents).map_err(|e| {
        KanbanError::ConfigError(format!("Invalid config in {}: {}", path.display(), e))
    })?;
    config.validate()?;
    Ok(config)
}

/// Writes configuration to `path` as pretty JSON
pub fn save_config(path: &Path, config: &BoardConfig) -> Result<()> {
    config.validate()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(config)?)?;
    Ok(())
}
