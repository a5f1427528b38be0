// src/gantt/filter.rs

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::gantt::timeline::{ItemStatus, ItemType, TimelineItem};
use crate::types::{FilterView, Priority};

/// Criteria for narrowing a timeline. Every `None` (or empty subsystem)
/// matches everything.
#[derive(Debug, Clone, Default)]
pub struct TimelineFilter {
    pub status: Option<ItemStatus>,
    pub subsystem: Option<String>,
    pub range_start: Option<NaiveDate>,
    pub range_end: Option<NaiveDate>,
    pub view: FilterView,
    /// Reference date for [`FilterView::BehindSchedule`]; defaults to the
    /// local current date.
    pub today: Option<NaiveDate>,
}

impl TimelineFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: ItemStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_subsystem(mut self, subsystem: impl Into<String>) -> Self {
        self.subsystem = Some(subsystem.into());
        self
    }

    pub fn with_range(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.range_start = start;
        self.range_end = end;
        self
    }

    pub fn with_view(mut self, view: FilterView) -> Self {
        self.view = view;
        self
    }

    pub fn as_of(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Whether `item` satisfies every supplied criterion.
    pub fn matches(&self, item: &TimelineItem) -> bool {
        if let Some(status) = self.status {
            if item.status != status {
                return false;
            }
        }

        if let Some(subsystem) = self.subsystem.as_deref() {
            if !subsystem.is_empty() && item.subsystem != subsystem {
                return false;
            }
        }

        // Interval overlap, not containment.
        if let Some(end) = self.range_end {
            if item.start_date > end {
                return false;
            }
        }
        if let Some(start) = self.range_start {
            if item.end_date < start {
                return false;
            }
        }

        match self.view {
            FilterView::All => true,
            FilterView::CriticalPath => item.priority == Some(Priority::Critical),
            FilterView::Milestones => item.item_type == ItemType::Milestone,
            FilterView::BehindSchedule => {
                let today = self.today.unwrap_or_else(|| Local::now().date_naive());
                is_behind_schedule(item, today)
            }
        }
    }
}

/// Return the items matching `filter`, in input order.
pub fn filter(items: &[TimelineItem], filter: &TimelineFilter) -> Vec<TimelineItem> {
    let kept: Vec<TimelineItem> = items
        .iter()
        .filter(|item| filter.matches(item))
        .cloned()
        .collect();

    debug!(
        total = items.len(),
        kept = kept.len(),
        view = ?filter.view,
        "filtered timeline"
    );
    kept
}

/// A task in flight on `today` whose progress is below the straight-line
/// expectation between its start and end dates.
fn is_behind_schedule(item: &TimelineItem, today: NaiveDate) -> bool {
    if item.item_type != ItemType::Task {
        return false;
    }
    if item.start_date > today || item.end_date < today {
        return false;
    }

    let total_days = (item.end_date - item.start_date).num_days();
    if total_days == 0 {
        return item.progress < 100;
    }

    let days_passed = (today - item.start_date).num_days();
    let expected = days_passed * 100 / total_days;
    i64::from(item.progress) < expected
}
