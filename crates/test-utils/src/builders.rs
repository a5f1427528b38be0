#![allow(dead_code)]

use chrono::NaiveDate;
use frc_schedule::dag::TaskGraph;
use frc_schedule::model::{Milestone, Task, TaskId};
use frc_schedule::types::Priority;

use crate::date;

pub const PROJECT_ID: u64 = 1;

/// Builder for `TaskGraph` to simplify test setup.
///
/// Tasks are inserted in order, so `after` may only name tasks added
/// earlier.
pub struct TaskGraphBuilder {
    tasks: Vec<Task>,
}

impl TaskGraphBuilder {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    pub fn build(self) -> TaskGraph {
        let mut graph = TaskGraph::new();
        for task in self.tasks {
            graph
                .insert(task)
                .expect("Failed to build valid graph from builder");
        }
        graph
    }
}

impl Default for TaskGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `Task`.
pub struct TaskBuilder {
    task: Task,
}

impl TaskBuilder {
    /// Task starting 2026-01-10 with no end date, medium priority.
    pub fn new(id: TaskId) -> Self {
        Self {
            task: Task::new(id, format!("Task {id}"), PROJECT_ID, date(2026, 1, 10)),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.task.title = title.to_string();
        self
    }

    pub fn after(mut self, dep: TaskId) -> Self {
        self.task.pre_dependencies.insert(dep);
        self
    }

    pub fn dates(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.task.start_date = start;
        self.task.end_date = Some(end);
        self
    }

    pub fn end(mut self, end: NaiveDate) -> Self {
        self.task.end_date = Some(end);
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.task.priority = priority;
        self
    }

    pub fn subsystem(mut self, name: &str) -> Self {
        self.task.subsystem = Some(frc_schedule::model::Subsystem {
            id: 1,
            name: name.to_string(),
        });
        self
    }

    pub fn project(mut self, project: u64) -> Self {
        self.task.project_id = project;
        self
    }

    /// Sets progress through the real state transition.
    pub fn progress(mut self, progress: i32) -> Self {
        frc_schedule::progress::update_progress(&mut self.task, progress, false)
            .expect("valid test progress");
        self
    }

    pub fn completed(mut self) -> Self {
        frc_schedule::progress::update_progress(&mut self.task, 100, true)
            .expect("valid test progress");
        self
    }

    pub fn build(self) -> Task {
        self.task
    }
}

pub fn milestone(id: u64, name: &str, on: NaiveDate) -> Milestone {
    Milestone::new(id, name, PROJECT_ID, on)
}
