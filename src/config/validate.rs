// src/config/validate.rs

use std::collections::BTreeMap;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::config::model::{ProjectFile, RawProjectFile, hours_to_duration};
use crate::errors::{Result, ScheduleError};
use crate::model::TaskId;

impl TryFrom<RawProjectFile> for ProjectFile {
    type Error = crate::errors::ScheduleError;

    fn try_from(raw: RawProjectFile) -> std::result::Result<Self, Self::Error> {
        validate_project(&raw)?;
        let task = parse_ids(raw.task, "task")?;
        validate_tasks(&task)?;
        validate_task_dependencies(&task)?;
        validate_dag(&task)?;
        let milestone = parse_ids(raw.milestone, "milestone")?;
        Ok(ProjectFile::new_unchecked(raw.project, task, milestone))
    }
}

fn validate_project(cfg: &RawProjectFile) -> Result<()> {
    if cfg.project.name.trim().is_empty() {
        return Err(ScheduleError::ConfigError(
            "[project].name must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn parse_ids<T>(table: BTreeMap<String, T>, section: &str) -> Result<BTreeMap<u64, T>> {
    let mut parsed = BTreeMap::new();
    for (key, value) in table {
        let id: u64 = key.trim().parse().map_err(|_| {
            ScheduleError::ConfigError(format!(
                "[{section}.{key}]: table key must be a numeric id"
            ))
        })?;
        if parsed.insert(id, value).is_some() {
            return Err(ScheduleError::ConfigError(format!(
                "duplicate {section} id {id}"
            )));
        }
    }
    Ok(parsed)
}

fn validate_tasks(tasks: &BTreeMap<TaskId, crate::config::TaskConfig>) -> Result<()> {
    for (id, task) in tasks.iter() {
        if !(0..=100).contains(&task.progress) {
            return Err(ScheduleError::ConfigError(format!(
                "task {id} has progress {} outside 0..=100",
                task.progress
            )));
        }
        if let Some(end) = task.end {
            if end < task.start {
                return Err(ScheduleError::ConfigError(format!(
                    "task {id} ends ({end}) before it starts ({})",
                    task.start
                )));
            }
        }
        hours_to_duration(task.estimated_hours)?;
        if let Some(actual) = task.actual_hours {
            hours_to_duration(actual)?;
        }
    }
    Ok(())
}

fn validate_task_dependencies(tasks: &BTreeMap<TaskId, crate::config::TaskConfig>) -> Result<()> {
    for (id, task) in tasks.iter() {
        for dep in task.after.iter() {
            if dep == id {
                return Err(ScheduleError::ConfigError(format!(
                    "task {id} cannot depend on itself in `after`"
                )));
            }
            if !tasks.contains_key(dep) {
                return Err(ScheduleError::ConfigError(format!(
                    "task {id} has unknown dependency {dep} in `after`"
                )));
            }
        }
    }
    Ok(())
}

fn validate_dag(tasks: &BTreeMap<TaskId, crate::config::TaskConfig>) -> Result<()> {
    // Edge direction: dep -> task
    // For:
    //   [task.2]
    //   after = [1]
    // we add edge 1 -> 2.
    let mut graph: DiGraphMap<TaskId, ()> = DiGraphMap::new();

    for &id in tasks.keys() {
        graph.add_node(id);
    }

    for (&id, task) in tasks.iter() {
        for &dep in task.after.iter() {
            graph.add_edge(dep, id, ());
        }
    }

    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => Err(ScheduleError::CycleDetected(cycle.node_id())),
    }
}
