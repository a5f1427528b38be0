// src/model/mod.rs

//! In-memory entity model.
//!
//! - [`task`] holds the `Task` carrier, including its dependency id sets.
//! - [`milestone`] holds project milestones.
//!
//! Entities reference each other by id only; the owning arena is
//! [`crate::dag::TaskGraph`].

pub mod milestone;
pub mod task;

pub use milestone::Milestone;
pub use task::{Subsystem, Task};

pub type TaskId = u64;
pub type MilestoneId = u64;
pub type ProjectId = u64;
pub type MemberId = u64;
pub type ComponentId = u64;
