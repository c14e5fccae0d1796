//! In-memory to-do list: tasks with a checked flag, owned by a single
//! [`TaskList`] that provides every mutation on them.
mod manager;
pub mod task;

pub use manager::TaskList;
pub use task::{ParseTaskIdError, Task, TaskId};
