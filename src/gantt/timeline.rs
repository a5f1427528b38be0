// src/gantt/timeline.rs

//! Renderable timeline model shared by tasks and milestones.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::Priority;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Task,
    Milestone,
}

/// Display status of a timeline item.
///
/// For tasks: `Completed` if the completion flag is set, `InProgress` if any
/// progress was reported, `Pending` otherwise. For milestones: `Completed`
/// once the date has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemStatus {
    Completed,
    InProgress,
    Pending,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Completed => "completed",
            ItemStatus::InProgress => "in-progress",
            ItemStatus::Pending => "pending",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "completed" => Ok(ItemStatus::Completed),
            "in-progress" => Ok(ItemStatus::InProgress),
            "pending" => Ok(ItemStatus::Pending),
            other => Err(format!(
                "invalid status: {other} (expected \"completed\", \"in-progress\" or \"pending\")"
            )),
        }
    }
}

/// One bar (task) or diamond (milestone) on the Gantt chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineItem {
    /// Namespaced id: `task_<id>` or `milestone_<id>`.
    pub id: String,
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub progress: u8,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub status: ItemStatus,
    /// Subsystem name; empty when unknown.
    pub subsystem: String,
    /// Namespaced ids of the items this one waits on, sorted.
    pub dependencies: Vec<String>,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeKind {
    FinishToStart,
}

/// A dependency arrow between two timeline items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    /// Predecessor id.
    pub source: String,
    /// Successor id.
    pub target: String,
    #[serde(rename = "type")]
    pub kind: EdgeKind,
}

pub fn task_item_id(id: u64) -> String {
    format!("task_{id}")
}

pub fn milestone_item_id(id: u64) -> String {
    format!("milestone_{id}")
}
