use crate::domain::{column::Column, task::Task};
use serde::Serialize;

/// Number of tasks in each column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BoardSummary {
    counts: [usize; Column::ALL.len()],
}

impl BoardSummary {
    /// Counts tasks per column
    pub fn from_tasks<'a, I>(tasks: I) -> Self
    where
        I: IntoIterator<Item = &'a Task>,
    {
        let mut counts = [0; Column::ALL.len()];
        for task in tasks {
            counts[task.status.ordinal()] += 1;
        }
        Self { counts }
    }

    pub fn count(&self, column: Column) -> usize {
        self.counts[column.ordinal()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Columns paired with their counts, in board order
    pub fn iter(&self) -> impl Iterator<Item = (Column, usize)> + '_ {
        Column::ALL.into_iter().map(|col| (col, self.count(col)))
    }
}

/// Tasks sitting in `column`, in insertion order
pub fn tasks_in_column<'a, I>(tasks: I, column: Column) -> Vec<&'a Task>
where
    I: IntoIterator<Item = &'a Task>,
{
    tasks
        .into_iter()
        .filter(|task| task.status == column)
        .collect()
}
