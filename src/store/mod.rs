// src/store/mod.rs

use std::fmt::Debug;

use crate::errors::Result;
use crate::model::{Milestone, ProjectId, Task, TaskId};

pub mod memory;

pub use memory::InMemoryStore;

/// Data-access interface to the persistence layer.
///
/// The scheduling code never queries storage on its own; callers load a
/// project's tasks through this trait, run graph operations on a
/// [`crate::dag::TaskGraph`], and save the result back.
pub trait TaskStore: Send + Sync + Debug {
    /// Fails with [`crate::errors::ScheduleError::TaskNotFound`] for unknown ids.
    fn load_task(&self, id: TaskId) -> Result<Task>;
    fn save_task(&self, task: Task) -> Result<Task>;
    fn load_tasks_by_project(&self, project: ProjectId) -> Result<Vec<Task>>;
    fn load_milestones_by_project(&self, project: ProjectId) -> Result<Vec<Milestone>>;
}
