// src/config/model.rs

use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::errors::{Result, ScheduleError};
use crate::model::{Milestone, MilestoneId, ProjectId, Subsystem, Task, TaskId};
use crate::progress::update_progress;
use crate::types::Priority;

/// Project file as read from TOML, before validation.
///
/// ```toml
/// [project]
/// id = 1
/// name = "2026 Robot"
///
/// [task.1]
/// title = "Design drivetrain"
/// subsystem = "Drivetrain"
/// priority = "high"
/// start = "2026-01-10"
/// end = "2026-01-20"
///
/// [task.2]
/// title = "Machine gearbox plates"
/// start = "2026-01-21"
/// after = [1]
///
/// [milestone.1]
/// name = "Stop build"
/// date = "2026-02-18"
/// ```
///
/// Task and milestone table keys are their numeric ids.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProjectFile {
    pub project: ProjectSection,

    #[serde(default)]
    pub task: BTreeMap<String, TaskConfig>,

    #[serde(default)]
    pub milestone: BTreeMap<String, MilestoneConfig>,
}

/// Validated project file. Built through `TryFrom<RawProjectFile>`.
#[derive(Debug, Clone)]
pub struct ProjectFile {
    pub project: ProjectSection,
    pub task: BTreeMap<TaskId, TaskConfig>,
    pub milestone: BTreeMap<MilestoneId, MilestoneConfig>,
}

/// `[project]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSection {
    pub id: ProjectId,
    pub name: String,
}

/// `[task.<id>]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskConfig {
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Subsystem name. Ids are assigned per distinct name at load time.
    #[serde(default)]
    pub subsystem: Option<String>,

    #[serde(default)]
    pub priority: Priority,

    pub start: NaiveDate,

    #[serde(default)]
    pub end: Option<NaiveDate>,

    #[serde(default)]
    pub estimated_hours: f64,

    #[serde(default)]
    pub actual_hours: Option<f64>,

    /// Percent complete, `0..=100`.
    #[serde(default)]
    pub progress: i32,

    /// Forces `progress = 100` when set.
    #[serde(default)]
    pub completed: bool,

    #[serde(default)]
    pub members: Vec<u64>,

    #[serde(default)]
    pub components: Vec<u64>,

    /// Pre-dependencies: ids of tasks that must complete first.
    #[serde(default)]
    pub after: Vec<TaskId>,
}

/// `[milestone.<id>]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct MilestoneConfig {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    pub date: NaiveDate,
}

impl ProjectFile {
    pub(crate) fn new_unchecked(
        project: ProjectSection,
        task: BTreeMap<TaskId, TaskConfig>,
        milestone: BTreeMap<MilestoneId, MilestoneConfig>,
    ) -> Self {
        Self {
            project,
            task,
            milestone,
        }
    }

    /// Build task entities, with both dependency directions filled in.
    pub fn tasks(&self) -> Result<Vec<Task>> {
        let subsystem_ids: BTreeMap<&str, u64> = self
            .task
            .values()
            .filter_map(|t| t.subsystem.as_deref())
            .collect::<BTreeSet<&str>>()
            .into_iter()
            .zip(1u64..)
            .collect();

        let mut tasks: BTreeMap<TaskId, Task> = BTreeMap::new();
        for (&id, tc) in self.task.iter() {
            let mut task = Task::new(id, tc.title.clone(), self.project.id, tc.start);
            task.description = tc.description.clone();
            task.subsystem = tc.subsystem.as_ref().map(|name| Subsystem {
                id: subsystem_ids.get(name.as_str()).copied().unwrap_or_default(),
                name: name.clone(),
            });
            task.priority = tc.priority;
            task.end_date = tc.end;
            task.estimated_duration = hours_to_duration(tc.estimated_hours)?;
            task.actual_duration = tc.actual_hours.map(hours_to_duration).transpose()?;
            task.assigned_members = tc.members.iter().copied().collect();
            task.required_components = tc.components.iter().copied().collect();
            task.pre_dependencies = tc.after.iter().copied().collect();
            update_progress(&mut task, tc.progress, tc.completed)?;
            tasks.insert(id, task);
        }

        let edges: Vec<(TaskId, TaskId)> = tasks
            .values()
            .flat_map(|t| t.pre_dependencies.iter().map(move |&p| (t.id, p)))
            .collect();
        for (successor, predecessor) in edges {
            if let Some(pred) = tasks.get_mut(&predecessor) {
                pred.post_dependencies.insert(successor);
            }
        }

        Ok(tasks.into_values().collect())
    }

    pub fn milestones(&self) -> Vec<Milestone> {
        self.milestone
            .iter()
            .map(|(&id, mc)| Milestone {
                id,
                name: mc.name.clone(),
                description: mc.description.clone(),
                date: mc.date,
                project_id: self.project.id,
            })
            .collect()
    }
}

pub(crate) fn hours_to_duration(hours: f64) -> Result<Duration> {
    Duration::try_from_secs_f64(hours * 3600.0).map_err(|e| {
        ScheduleError::ConfigError(format!("invalid duration of {hours} hours: {e}"))
    })
}
