// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

use crate::model::TaskId;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Circular dependency: task {predecessor} already depends on task {successor}")]
    CircularDependency {
        successor: TaskId,
        predecessor: TaskId,
    },

    #[error("Task {0} cannot depend on itself")]
    SelfDependency(TaskId),

    #[error("Invalid progress: {0} (expected 0..=100)")]
    InvalidProgress(i32),

    #[error("Task {task} is marked completed with progress {progress}")]
    CompletedWithoutFullProgress { task: TaskId, progress: u8 },

    #[error("Task {task} has progress 100 but is not marked completed")]
    FullProgressNotCompleted { task: TaskId },

    #[error("Cycle detected in task graph involving task {0}")]
    CycleDetected(TaskId),

    #[error("Inconsistent dependency sets between task {task} and task {other}")]
    InconsistentDependency { task: TaskId, other: TaskId },

    #[error("Task not found: {0}")]
    TaskNotFound(TaskId),

    #[error("Duplicate task id: {0}")]
    DuplicateTask(TaskId),

    #[error("Invalid due-soon window: {0} days (must be >= 1)")]
    InvalidDueWindow(u32),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
