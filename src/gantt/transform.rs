// src/gantt/transform.rs

//! Task / milestone to timeline conversion.
//!
//! None of these functions fail: a record with missing optional data
//! (no subsystem, no end date) still yields an item, so one bad record
//! never blanks the whole chart.

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::gantt::palette;
use crate::gantt::timeline::{
    Edge, EdgeKind, ItemStatus, ItemType, TimelineItem, milestone_item_id, task_item_id,
};
use crate::model::{Milestone, Task};

/// Convert tasks into timeline items, preserving input order.
pub fn transform_tasks<'a, I>(tasks: I) -> Vec<TimelineItem>
where
    I: IntoIterator<Item = &'a Task>,
{
    tasks.into_iter().map(task_to_item).collect()
}

/// Convert milestones into timeline items using the local current date to
/// decide which have passed.
pub fn transform_milestones<'a, I>(milestones: I) -> Vec<TimelineItem>
where
    I: IntoIterator<Item = &'a Milestone>,
{
    transform_milestones_as_of(milestones, Local::now().date_naive())
}

pub fn transform_milestones_as_of<'a, I>(milestones: I, today: NaiveDate) -> Vec<TimelineItem>
where
    I: IntoIterator<Item = &'a Milestone>,
{
    milestones
        .into_iter()
        .map(|m| milestone_to_item(m, today))
        .collect()
}

/// One finish-to-start edge per pre-dependency relationship.
pub fn build_dependency_edges<'a, I>(tasks: I) -> Vec<Edge>
where
    I: IntoIterator<Item = &'a Task>,
{
    let edges: Vec<Edge> = tasks
        .into_iter()
        .flat_map(|task| {
            task.pre_dependencies.iter().map(move |&pre| Edge {
                source: task_item_id(pre),
                target: task_item_id(task.id),
                kind: EdgeKind::FinishToStart,
            })
        })
        .collect();

    debug!(count = edges.len(), "built dependency edges");
    edges
}

pub fn task_status(task: &Task) -> ItemStatus {
    if task.completed {
        ItemStatus::Completed
    } else if task.progress > 0 {
        ItemStatus::InProgress
    } else {
        ItemStatus::Pending
    }
}

fn task_to_item(task: &Task) -> TimelineItem {
    if task.subsystem.is_none() {
        debug!(task = task.id, "task has no subsystem; using empty label");
    }

    TimelineItem {
        id: task_item_id(task.id),
        title: task.title.clone(),
        start_date: task.start_date,
        end_date: task.effective_end_date(),
        progress: task.progress,
        item_type: ItemType::Task,
        status: task_status(task),
        subsystem: task.subsystem_name().to_string(),
        // BTreeSet iteration is ascending by id.
        dependencies: task
            .pre_dependencies
            .iter()
            .map(|&id| task_item_id(id))
            .collect(),
        color: palette::priority_color(task.priority).to_string(),
        priority: Some(task.priority),
    }
}

fn milestone_to_item(milestone: &Milestone, today: NaiveDate) -> TimelineItem {
    let status = if milestone.is_passed_as_of(today) {
        ItemStatus::Completed
    } else {
        ItemStatus::Pending
    };

    TimelineItem {
        id: milestone_item_id(milestone.id),
        title: milestone.name.clone(),
        start_date: milestone.date,
        end_date: milestone.date,
        progress: 0,
        item_type: ItemType::Milestone,
        status,
        subsystem: String::new(),
        dependencies: Vec::new(),
        color: palette::MILESTONE.to_string(),
        priority: None,
    }
}
