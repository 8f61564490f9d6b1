//! Core entities for the task tracker.

mod task;

pub use task::{CreateTask, Task, TaskStatus, UpdateTask};
