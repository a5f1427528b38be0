// src/gantt/mod.rs

//! Gantt chart views over tasks and milestones.
//!
//! - [`timeline`] defines the uniform `TimelineItem` and dependency `Edge`.
//! - [`transform`] converts tasks / milestones into timeline items.
//! - [`filter`] narrows a timeline by status, subsystem, date range and view.
//! - [`chart`] re-encodes items for the chart library.
//! - [`palette`] maps priorities to colors.

pub mod chart;
pub mod filter;
pub mod palette;
pub mod timeline;
pub mod transform;

pub use chart::{ChartModel, DataPoint, Dataset, to_chart_encoding};
pub use filter::{TimelineFilter, filter};
pub use timeline::{Edge, EdgeKind, ItemStatus, ItemType, TimelineItem};
pub use transform::{
    build_dependency_edges, transform_milestones, transform_milestones_as_of, transform_tasks,
};
