// src/config/mod.rs

//! Project file loading and validation.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a project file from disk (`loader.rs`).
//! - Validate basic invariants like dependency correctness (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_project_path, load_and_validate, load_from_path, parse_str};
pub use model::{
    MilestoneConfig, ProjectFile, ProjectSection, RawProjectFile, TaskConfig,
};
