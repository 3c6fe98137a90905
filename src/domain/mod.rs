pub mod board;
pub mod column;
pub mod filter;
pub mod policy;
pub mod task;


pub use board::{tasks_in_column, BoardSummary};
pub use column::Column;
pub use filter::filter_tasks;
pub use policy::{can_transition, DenialReason, Transition};
pub use task::{NewTask, RequiredField, Task, TaskId};
