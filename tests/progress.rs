// tests/progress.rs

use std::error::Error;

use frc_schedule::errors::ScheduleError;
use frc_schedule::progress::{check_consistent, update_progress};
use frc_schedule_test_utils::builders::TaskBuilder;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn full_progress_marks_completed() -> TestResult {
    let mut task = TaskBuilder::new(1).progress(30).build();

    let updated = update_progress(&mut task, 100, false)?;

    assert_eq!(updated.progress, 100);
    assert!(updated.completed);
    Ok(())
}

#[test]
fn explicit_completion_overrides_numeric_progress() -> TestResult {
    let mut task = TaskBuilder::new(1).build();

    update_progress(&mut task, 40, true)?;

    assert_eq!(task.progress, 100);
    assert!(task.completed);
    Ok(())
}

#[test]
fn partial_progress_clears_completion() -> TestResult {
    let mut task = TaskBuilder::new(1).completed().build();
    assert!(task.completed);

    update_progress(&mut task, 75, false)?;

    assert_eq!(task.progress, 75);
    assert!(!task.completed);

    update_progress(&mut task, 0, false)?;
    assert_eq!(task.progress, 0);
    assert!(!task.completed);
    Ok(())
}

#[test]
fn out_of_range_progress_is_rejected_without_mutation() {
    let mut task = TaskBuilder::new(1).progress(20).build();

    for bad in [-1, 101, i32::MIN, i32::MAX] {
        match update_progress(&mut task, bad, false) {
            Err(ScheduleError::InvalidProgress(v)) => assert_eq!(v, bad),
            other => panic!("expected InvalidProgress for {bad}, got {other:?}"),
        }
    }

    // Explicit completion does not bypass the range check.
    assert!(matches!(
        update_progress(&mut task, 150, true),
        Err(ScheduleError::InvalidProgress(150))
    ));

    assert_eq!(task.progress, 20);
    assert!(!task.completed);
}

#[test]
fn completed_always_implies_full_progress() -> TestResult {
    let mut task = TaskBuilder::new(1).build();

    for (value, explicit) in [(0, true), (50, false), (99, true), (100, false), (10, false)] {
        update_progress(&mut task, value, explicit)?;
        if task.completed {
            assert_eq!(task.progress, 100);
        }
        if task.progress == 100 {
            assert!(task.completed);
        }
    }
    Ok(())
}

#[test]
fn stored_progress_is_checked_without_coercion() -> TestResult {
    let mut task = TaskBuilder::new(1).progress(35).build();
    check_consistent(&task)?;

    task.completed = true;
    assert!(matches!(
        check_consistent(&task),
        Err(ScheduleError::CompletedWithoutFullProgress { task: 1, progress: 35 })
    ));
    assert_eq!(task.progress, 35);

    task.completed = false;
    task.progress = 101;
    assert!(matches!(check_consistent(&task), Err(ScheduleError::InvalidProgress(101))));

    update_progress(&mut task, 100, false)?;
    check_consistent(&task)?;
    Ok(())
}
