//! The task store owns the in-memory collection and mirrors it to storage
//! after every change.

use crate::{
    domain::{filter_tasks, BoardSummary, Column, NewTask, Task, TaskId},
    error::{KanbanError, Result},
    storage::Storage,
};
use tracing::{debug, warn};

/// Ordered task collection with write-through persistence
pub struct TaskStore<S: Storage> {
    tasks: Vec<Task>,
    storage: S,
}

impl<S: Storage> TaskStore<S> {
    /// Opens the store, loading whatever `storage` holds.
    ///
    /// Absent or undecodable state starts an empty board. I/O failures are
    /// returned.
    pub fn open(storage: S) -> Result<Self> {
        let tasks = match storage.read() {
            Ok(Some(tasks)) => tasks,
            Ok(None) => Vec::new(),
            Err(KanbanError::SerializationError(e)) => {
                warn!("Discarding malformed task state: {}", e);
                Vec::new()
            }
            Err(e) => return Err(e),
        };
        debug!("Loaded {} tasks", tasks.len());

        Ok(Self { tasks, storage })
    }

    /// Creates a task from `draft` and appends it to the board
    pub fn add(&mut self, draft: NewTask) -> Result<Task> {
        let task = Task::create(draft)?;
        debug!("Adding task {} to {}", task.id, task.status);
        self.tasks.push(task.clone());
        self.persist()?;
        Ok(task)
    }

    /// Replaces the stored task with the same id.
    ///
    /// The stored creation time is kept. Unknown ids are ignored.
    pub fn update(&mut self, task: Task) -> Result<()> {
        task.validate()?;

        let Some(existing) = self.tasks.iter_mut().find(|t| t.id == task.id) else {
            debug!("Ignoring update for unknown task {}", task.id);
            return Ok(());
        };

        let created_at = existing.created_at;
        *existing = Task { created_at, ..task };
        debug!("Updated task {}", existing.id);
        self.persist()
    }

    /// Deletes the task with `id`, if present
    pub fn remove(&mut self, id: &TaskId) -> Result<()> {
        let before = self.tasks.len();
        self.tasks.retain(|t| &t.id != id);
        if self.tasks.len() == before {
            debug!("Ignoring remove for unknown task {}", id);
        } else {
            debug!("Removed task {}", id);
        }
        self.persist()
    }

    /// Deletes every task
    pub fn clear(&mut self) -> Result<()> {
        debug!("Clearing {} tasks", self.tasks.len());
        self.tasks.clear();
        self.persist()
    }

    /// Sets the status of the task with `id`.
    ///
    /// Does not consult the transition policy; callers check first.
    pub fn move_task(&mut self, id: &TaskId, status: Column) -> Result<()> {
        match self.tasks.iter_mut().find(|t| &t.id == id) {
            Some(task) => {
                debug!("Moving task {} from {} to {}", id, task.status, status);
                task.status = status;
            }
            None => debug!("Ignoring move for unknown task {}", id),
        }
        self.persist()
    }

    /// All tasks in insertion order
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Tasks matching `query`, see [`filter_tasks`]
    pub fn search(&self, query: &str) -> Vec<&Task> {
        filter_tasks(&self.tasks, query)
    }

    /// Per-column counts over the whole collection
    pub fn summary(&self) -> BoardSummary {
        BoardSummary::from_tasks(&self.tasks)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self) -> Result<()> {
        self.storage.write(&self.tasks)
    }
}
