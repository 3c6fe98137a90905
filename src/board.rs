//! Board controller: the operations a view calls in response to user actions.
//!
//! It couples the task store with the search term, the transition policy and
//! the user prompts. Refusals (blank fields, denied moves, declined
//! confirmations) are reported through the prompt and leave state unchanged;
//! only storage failures come back as errors.

use crate::{
    config::BoardConfig,
    domain::{
        can_transition, filter_tasks, tasks_in_column, BoardSummary, Column, NewTask, Task,
        TaskId, Transition,
    },
    error::{KanbanError, Result},
    prompt::Prompt,
    storage::Storage,
    store::TaskStore,
};
use tracing::info;

pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this task?";
pub const CONFIRM_CLEAR: &str =
    "Are you sure you want to clear all tasks? This action cannot be undone.";
pub const REQUIRED_FIELDS_NOTICE: &str = "Title and Description are required!";

pub struct KanbanBoard<S: Storage, P: Prompt> {
    config: BoardConfig,
    store: TaskStore<S>,
    prompt: P,
    search_term: String,
}

impl<S: Storage, P: Prompt> KanbanBoard<S, P> {
    pub fn new(config: BoardConfig, store: TaskStore<S>, prompt: P) -> Self {
        Self {
            config,
            store,
            prompt,
            search_term: String::new(),
        }
    }

    /// Opens the store on `storage` and wraps it in a board
    pub fn open(config: BoardConfig, storage: S, prompt: P) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config, TaskStore::open(storage)?, prompt))
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn store(&self) -> &TaskStore<S> {
        &self.store
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn prompt_mut(&mut self) -> &mut P {
        &mut self.prompt
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn clear_search(&mut self) {
        self.search_term.clear();
    }

    /// Tasks to render in `column`: matching the search term, in insertion order
    pub fn visible_tasks(&self, column: Column) -> Vec<&Task> {
        tasks_in_column(filter_tasks(self.store.list(), &self.search_term), column)
    }

    /// Column counts for the stats bar, ignoring the search term
    pub fn summary(&self) -> BoardSummary {
        self.store.summary()
    }

    /// Adds a task. Returns `None` when the form was incomplete.
    pub fn create_task(&mut self, draft: NewTask) -> Result<Option<Task>> {
        match self.store.add(draft) {
            Ok(task) => Ok(Some(task)),
            Err(e) => self.reject(e).map(|()| None),
        }
    }

    /// Saves an edited task. Returns `false` when the form was incomplete.
    pub fn edit_task(&mut self, task: Task) -> Result<bool> {
        match self.store.update(task) {
            Ok(()) => Ok(true),
            Err(e) => self.reject(e).map(|()| false),
        }
    }

    /// Handles a card released over `target`.
    ///
    /// Returns `true` if the task moved. Unknown ids and denied moves return
    /// `false`; a denial is shown to the user.
    pub fn drop_task(&mut self, id: &TaskId, target: Column) -> Result<bool> {
        let Some(task) = self.store.get(id) else {
            return Ok(false);
        };

        match can_transition(task, target) {
            Transition::Allowed => {
                self.store.move_task(id, target)?;
                Ok(true)
            }
            Transition::Denied(reason) => {
                info!("Refused moving task {} to {}: {:?}", id, target, reason);
                self.prompt.notify(&reason.to_string());
                Ok(false)
            }
        }
    }

    /// Deletes a task after confirmation. Returns `false` if declined.
    pub fn delete_task(&mut self, id: &TaskId) -> Result<bool> {
        if !self.prompt.confirm(CONFIRM_DELETE) {
            info!("Delete of task {} cancelled", id);
            return Ok(false);
        }
        self.store.remove(id)?;
        Ok(true)
    }

    /// Deletes every task after confirmation. Returns `false` if declined.
    pub fn clear_all(&mut self) -> Result<bool> {
        if !self.prompt.confirm(CONFIRM_CLEAR) {
            info!("Clearing the board cancelled");
            return Ok(false);
        }
        self.store.clear()?;
        Ok(true)
    }

    pub fn into_store(self) -> TaskStore<S> {
        self.store
    }

    fn reject(&mut self, error: KanbanError) -> Result<()> {
        match error {
            KanbanError::Validation(field) => {
                info!("Rejected task with blank {}", field);
                self.prompt.notify(REQUIRED_FIELDS_NOTICE);
                Ok(())
            }
            other => Err(other),
        }
    }
}
