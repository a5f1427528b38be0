// src/dag/deadlines.rs

//! Date-driven task queries: what is due soon, what is already late.

use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::errors::{Result, ScheduleError};
use crate::model::Task;

/// Incomplete tasks whose end date falls within `[today, today + days]`.
///
/// Input order is preserved. Tasks without an end date never match.
pub fn due_soon<'a, I>(tasks: I, today: NaiveDate, days: u32) -> Result<Vec<&'a Task>>
where
    I: IntoIterator<Item = &'a Task>,
{
    if days == 0 {
        return Err(ScheduleError::InvalidDueWindow(days));
    }

    let due_before = today
        .checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX);

    let matched: Vec<&Task> = tasks
        .into_iter()
        .filter(|t| !t.completed)
        .filter(|t| matches!(t.end_date, Some(end) if end >= today && end <= due_before))
        .collect();

    debug!(%today, days, count = matched.len(), "due-soon query");
    Ok(matched)
}

/// Incomplete tasks whose end date is strictly before `today`.
pub fn overdue<'a, I>(tasks: I, today: NaiveDate) -> Vec<&'a Task>
where
    I: IntoIterator<Item = &'a Task>,
{
    tasks
        .into_iter()
        .filter(|t| !t.completed)
        .filter(|t| matches!(t.end_date, Some(end) if end < today))
        .collect()
}
