// src/dag/mod.rs

//! Task dependency graph and scheduling queries.
//!
//! - [`graph`] holds the per-project task arena and every edge mutation,
//!   with cycle prevention, readiness and topological ordering.
//! - [`deadlines`] answers "due soon" and "overdue" questions.

pub mod deadlines;
pub mod graph;

pub use deadlines::{due_soon, overdue};
pub use graph::TaskGraph;
