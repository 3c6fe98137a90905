//! # Kanban Core
//!
//! Task store, transition policy and search filtering for a four-column
//! kanban board ("To Do", "In Progress", "Testing", "Done").
//!
//! The crate has no UI. A view layer drives a [`KanbanBoard`], which owns a
//! [`TaskStore`] that writes the whole collection through to a [`Storage`]
//! backend after every change, and asks a [`Prompt`] for confirmations and
//! notices.

pub mod board;
pub mod config;
pub mod domain;
pub mod error;
pub mod prompt;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use board::KanbanBoard;
pub use config::BoardConfig;
pub use domain::{
    can_transition, filter_tasks, BoardSummary, Column, DenialReason, NewTask, Task, TaskId,
    Transition,
};
pub use error::{KanbanError, Result};
pub use prompt::{Prompt, RecordingPrompt};
pub use storage::Storage;
pub use store::TaskStore;
