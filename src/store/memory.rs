// src/store/memory.rs

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::anyhow;

use super::TaskStore;
use crate::errors::{Result, ScheduleError};
use crate::model::{Milestone, MilestoneId, ProjectId, Task, TaskId};

#[derive(Debug, Default)]
struct Tables {
    tasks: BTreeMap<TaskId, Task>,
    milestones: BTreeMap<MilestoneId, Milestone>,
}

/// `TaskStore` backed by in-process maps. Clones share the same tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store from already-built entities.
    pub fn with_entities(
        tasks: impl IntoIterator<Item = Task>,
        milestones: impl IntoIterator<Item = Milestone>,
    ) -> Self {
        let tables = Tables {
            tasks: tasks.into_iter().map(|t| (t.id, t)).collect(),
            milestones: milestones.into_iter().map(|m| (m.id, m)).collect(),
        };
        Self {
            tables: Arc::new(Mutex::new(tables)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| ScheduleError::Other(anyhow!("in-memory store lock poisoned")))
    }
}

impl TaskStore for InMemoryStore {
    fn load_task(&self, id: TaskId) -> Result<Task> {
        let tables = self.lock()?;
        tables
            .tasks
            .get(&id)
            .cloned()
            .ok_or(ScheduleError::TaskNotFound(id))
    }

    fn save_task(&self, task: Task) -> Result<Task> {
        let mut tables = self.lock()?;
        tables.tasks.insert(task.id, task.clone());
        Ok(task)
    }

    fn load_tasks_by_project(&self, project: ProjectId) -> Result<Vec<Task>> {
        let tables = self.lock()?;
        Ok(tables
            .tasks
            .values()
            .filter(|t| t.project_id == project)
            .cloned()
            .collect())
    }

    fn load_milestones_by_project(&self, project: ProjectId) -> Result<Vec<Milestone>> {
        let tables = self.lock()?;
        Ok(tables
            .milestones
            .values()
            .filter(|m| m.project_id == project)
            .cloned()
            .collect())
    }
}
