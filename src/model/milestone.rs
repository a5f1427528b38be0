// src/model/milestone.rs

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::model::{MilestoneId, ProjectId};

/// A dated checkpoint in a project (kickoff, stop-build day, competitions).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: MilestoneId,
    pub name: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub project_id: ProjectId,
}

impl Milestone {
    pub fn new(
        id: MilestoneId,
        name: impl Into<String>,
        project_id: ProjectId,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            date,
            project_id,
        }
    }

    /// Whether the milestone date lies strictly before `today`.
    pub fn is_passed_as_of(&self, today: NaiveDate) -> bool {
        self.date < today
    }

    /// Whether the milestone date lies strictly before the local current date.
    pub fn is_passed(&self) -> bool {
        self.is_passed_as_of(Local::now().date_naive())
    }
}
