// src/model/task.rs

use std::collections::BTreeSet;
use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{ComponentId, MemberId, ProjectId, TaskId};
use crate::types::Priority;

/// Robot subsystem a task belongs to (e.g. "Drivetrain", "Intake").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subsystem {
    pub id: u64,
    pub name: String,
}

/// A unit of work within a project.
///
/// `progress` and `completed` are only changed through
/// [`crate::progress::update_progress`], and the dependency sets only
/// through [`crate::dag::TaskGraph`]; both are kept public for read access
/// by persistence and presentation code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: Option<String>,
    pub project_id: ProjectId,
    pub subsystem: Option<Subsystem>,
    pub priority: Priority,
    pub start_date: NaiveDate,
    /// Planned end date. `None` while the task is still being scoped.
    pub end_date: Option<NaiveDate>,
    pub estimated_duration: Duration,
    pub actual_duration: Option<Duration>,
    /// Always within `0..=100`.
    pub progress: u8,
    pub completed: bool,
    pub assigned_members: BTreeSet<MemberId>,
    pub required_components: BTreeSet<ComponentId>,
    /// Tasks that must complete before this one can start.
    pub pre_dependencies: BTreeSet<TaskId>,
    /// Tasks that list this one as a pre-dependency.
    pub post_dependencies: BTreeSet<TaskId>,
}

impl Task {
    /// Creates a task with zero progress and no relationships.
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        project_id: ProjectId,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            project_id,
            subsystem: None,
            priority: Priority::default(),
            start_date,
            end_date: None,
            estimated_duration: Duration::ZERO,
            actual_duration: None,
            progress: 0,
            completed: false,
            assigned_members: BTreeSet::new(),
            required_components: BTreeSet::new(),
            pre_dependencies: BTreeSet::new(),
            post_dependencies: BTreeSet::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_subsystem(mut self, id: u64, name: impl Into<String>) -> Self {
        self.subsystem = Some(Subsystem {
            id,
            name: name.into(),
        });
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn with_estimated_duration(mut self, duration: Duration) -> Self {
        self.estimated_duration = duration;
        self
    }

    pub fn with_member(mut self, member: MemberId) -> Self {
        self.assigned_members.insert(member);
        self
    }

    pub fn with_component(mut self, component: ComponentId) -> Self {
        self.required_components.insert(component);
        self
    }

    /// Subsystem name, or an empty string when the task has none.
    pub fn subsystem_name(&self) -> &str {
        self.subsystem.as_ref().map(|s| s.name.as_str()).unwrap_or("")
    }

    /// End date used for scheduling views; falls back to the start date.
    pub fn effective_end_date(&self) -> NaiveDate {
        self.end_date.unwrap_or(self.start_date)
    }
}
