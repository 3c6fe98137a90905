use crate::domain::task::Task;

/// Returns the tasks whose title or description contains `query`,
/// ignoring case and keeping the input order.
///
/// A blank query (empty after trimming) returns every task.
///
/// # Examples
/// ```
/// use kanban_core::domain::filter::filter_tasks;
/// use kanban_core::domain::task::{NewTask, Task};
///
/// let tasks = vec![
///     Task::create(NewTask::new("Fix bug", "Crash on start")).unwrap(),
///     Task::create(NewTask::new("Write report", "Quarterly numbers")).unwrap(),
/// ];
///
/// let found = filter_tasks(&tasks, "fix");
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].title, "Fix bug");
/// ```
pub fn filter_tasks<'a, I>(tasks: I, query: &str) -> Vec<&'a Task>
where
    I: IntoIterator<Item = &'a Task>,
{
    if query.trim().is_empty() {
        return tasks.into_iter().collect();
    }

    tasks.into_iter().filter(|task| task.matches(query)).collect()
}
