use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Task priority, as set by the team lead.
///
/// Ordering follows urgency: `Low < Medium < High < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "critical" => Ok(Priority::Critical),
            other => Err(format!(
                "invalid priority: {other} (expected \"low\", \"medium\", \"high\" or \"critical\")"
            )),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        };
        f.write_str(s)
    }
}

/// Named Gantt views layered on top of the field filters.
///
/// - `All`: no extra restriction.
/// - `CriticalPath`: only tasks with `Priority::Critical`.
/// - `BehindSchedule`: in-flight tasks whose progress lags the linear
///   expectation for today.
/// - `Milestones`: milestones only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterView {
    All,
    CriticalPath,
    BehindSchedule,
    Milestones,
}

impl Default for FilterView {
    fn default() -> Self {
        FilterView::All
    }
}

impl FromStr for FilterView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "all" => Ok(FilterView::All),
            "critical-path" => Ok(FilterView::CriticalPath),
            "behind-schedule" => Ok(FilterView::BehindSchedule),
            "milestones" => Ok(FilterView::Milestones),
            other => Err(format!(
                "invalid view: {other} (expected \"all\", \"critical-path\", \"behind-schedule\" or \"milestones\")"
            )),
        }
    }
}
