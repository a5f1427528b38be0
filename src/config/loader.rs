// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ProjectFile, RawProjectFile};
use crate::errors::Result;

/// Load a project file from a given path and return the raw `RawProjectFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation (dependency references, cycles, progress ranges). Use
/// [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawProjectFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    parse_str(&contents)
}

/// Parse project TOML from memory.
pub fn parse_str(contents: &str) -> Result<RawProjectFile> {
    let project: RawProjectFile = toml::from_str(contents)?;
    Ok(project)
}

/// Load a project file from path and validate it.
///
/// Checks for:
/// - non-numeric or duplicate task / milestone ids,
/// - out-of-range progress and inverted date ranges,
/// - unknown or self `after` references,
/// - dependency cycles.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ProjectFile> {
    let raw = load_from_path(&path)?;
    let project = ProjectFile::try_from(raw)?;
    debug!(
        path = %path.as_ref().display(),
        tasks = project.task.len(),
        milestones = project.milestone.len(),
        "project file loaded"
    );
    Ok(project)
}

/// Default project file: `Project.toml` in the current working directory.
pub fn default_project_path() -> PathBuf {
    PathBuf::from("Project.toml")
}
