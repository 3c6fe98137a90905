use crate::domain::{policy::DenialReason, task::RequiredField};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, KanbanError>;

#[derive(Debug, Error)]
pub enum KanbanError {
    #[error("Validation error: {0} is required")]
    Validation(RequiredField),

    #[error("Transition denied: {0}")]
    TransitionDenied(DenialReason),

    #[error("Invalid task ID format: {0}")]
    InvalidTaskId(String),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[cfg(feature = "sqlite-storage")]
    #[error("SQLite error: {0}")]
    SqliteError(#[from] rusqlite::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
