// src/progress.rs

//! Progress / completion state transitions.
//!
//! This is the single place where `Task::progress` and `Task::completed`
//! change. The invariant it maintains: `completed` implies `progress == 100`,
//! and `progress == 100` implies `completed`.
//!
//! Out-of-range progress is rejected with
//! [`ScheduleError::InvalidProgress`] rather than clamped.

use tracing::{debug, warn};

use crate::errors::{Result, ScheduleError};
use crate::model::Task;

pub const MAX_PROGRESS: i32 = 100;

/// Apply a progress update to `task`.
///
/// - `explicit_completed == true` forces `progress = 100, completed = true`
///   regardless of `new_progress` (which must still be in range).
/// - Otherwise `new_progress == 100` marks the task completed.
/// - Any other value sets the progress and clears `completed`.
///
/// Dependency readiness is not touched; it is derived on demand by
/// [`crate::dag::TaskGraph::is_ready`].
pub fn update_progress(
    task: &mut Task,
    new_progress: i32,
    explicit_completed: bool,
) -> Result<&mut Task> {
    if !(0..=MAX_PROGRESS).contains(&new_progress) {
        warn!(
            task = task.id,
            progress = new_progress,
            "rejecting out-of-range progress update"
        );
        return Err(ScheduleError::InvalidProgress(new_progress));
    }

    if explicit_completed || new_progress == MAX_PROGRESS {
        task.progress = 100;
        task.completed = true;
    } else {
        // Range checked above.
        task.progress = new_progress as u8;
        task.completed = false;
    }

    debug!(
        task = task.id,
        progress = task.progress,
        completed = task.completed,
        "progress updated"
    );

    Ok(task)
}

/// Check a task's stored progress against the completion invariant.
///
/// Used on tasks that did not come through [`update_progress`], such as
/// records handed over by a store.
pub fn check_consistent(task: &Task) -> Result<()> {
    let progress = i32::from(task.progress);
    if progress > MAX_PROGRESS {
        return Err(ScheduleError::InvalidProgress(progress));
    }
    match (task.completed, progress == MAX_PROGRESS) {
        (true, false) => Err(ScheduleError::CompletedWithoutFullProgress {
            task: task.id,
            progress: task.progress,
        }),
        (false, true) => Err(ScheduleError::FullProgressNotCompleted { task: task.id }),
        _ => Ok(()),
    }
}
