//! Rules deciding whether a task may be dropped into a column.
//!
//! Rules are checked in order and the first denial wins:
//! 1. A task with `restrict_backflow` may not move to an earlier column.
//! 2. A task may not leave "To Do" for "In Progress" without a due date.
//!
//! Everything else is allowed, including dropping a task onto its own column.

use crate::domain::{column::Column, task::Task};
use std::fmt;

/// Why a move was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    BackflowRestricted,
    DueDateRequired,
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BackflowRestricted => write!(f, "Backflow is restricted for this task."),
            Self::DueDateRequired => {
                write!(f, "Due date is required before moving to In Progress.")
            }
        }
    }
}

/// Outcome of asking whether a move is legal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Allowed,
    Denied(DenialReason),
}

impl Transition {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    pub fn denial(&self) -> Option<DenialReason> {
        match self {
            Self::Allowed => None,
            Self::Denied(reason) => Some(*reason),
        }
    }

    /// Converts a denial into a `TransitionDenied` error
    pub fn into_result(self) -> Result<(), crate::error::KanbanError> {
        match self {
            Self::Allowed => Ok(()),
            Self::Denied(reason) => Err(crate::error::KanbanError::TransitionDenied(reason)),
        }
    }
}

/// Decides whether `task` may move to `target`. Has no side effects.
pub fn can_transition(task: &Task, target: Column) -> Transition {
    if task.restrict_backflow && target.ordinal() < task.status.ordinal() {
        return Transition::Denied(DenialReason::BackflowRestricted);
    }

    if task.status == Column::ToDo && target == Column::InProgress && task.due_date.is_none() {
        return Transition::Denied(DenialReason::DueDateRequired);
    }

    Transition::Allowed
}
