// tests/deadlines.rs

use frc_schedule::dag::{due_soon, overdue};
use frc_schedule::errors::ScheduleError;
use frc_schedule::model::Task;
use frc_schedule_test_utils::builders::TaskBuilder;
use frc_schedule_test_utils::date;

fn tasks() -> Vec<Task> {
    vec![
        TaskBuilder::new(1).end(date(2026, 1, 9)).build(),
        TaskBuilder::new(2).end(date(2026, 1, 10)).build(),
        TaskBuilder::new(3).end(date(2026, 1, 17)).build(),
        TaskBuilder::new(4).end(date(2026, 1, 18)).build(),
        TaskBuilder::new(5).end(date(2026, 1, 12)).completed().build(),
        TaskBuilder::new(6).build(),
        TaskBuilder::new(7).end(date(2025, 12, 1)).completed().build(),
    ]
}

fn ids(found: &[&Task]) -> Vec<u64> {
    found.iter().map(|t| t.id).collect()
}

#[test]
fn due_soon_window_is_inclusive_on_both_ends() -> Result<(), ScheduleError> {
    let tasks = tasks();
    let today = date(2026, 1, 10);

    let due = due_soon(&tasks, today, 7)?;
    assert_eq!(ids(&due), vec![2, 3]);

    let due = due_soon(&tasks, today, 1)?;
    assert_eq!(ids(&due), vec![2]);
    Ok(())
}

#[test]
fn due_soon_rejects_empty_window() {
    let tasks = tasks();
    assert!(matches!(
        due_soon(&tasks, date(2026, 1, 10), 0),
        Err(ScheduleError::InvalidDueWindow(0))
    ));
}

#[test]
fn overdue_skips_completed_and_undated_tasks() {
    let tasks = tasks();

    assert_eq!(ids(&overdue(&tasks, date(2026, 1, 10))), vec![1]);
    assert_eq!(ids(&overdue(&tasks, date(2026, 1, 19))), vec![1, 2, 3, 4]);
    assert!(overdue(&tasks, date(2025, 1, 1)).is_empty());
}
