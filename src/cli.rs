// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use crate::config::default_project_path;
use crate::gantt::ItemStatus;
use crate::types::FilterView;

/// Command-line arguments for `frc-schedule`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "frc-schedule",
    version,
    about = "Inspect task dependencies, deadlines and Gantt data for an FRC project.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the project file (TOML).
    #[arg(long, value_name = "PATH", default_value_os_t = default_project_path())]
    pub project: PathBuf,

    /// Reference date (YYYY-MM-DD) used instead of the local current date.
    #[arg(long, value_name = "DATE")]
    pub today: Option<NaiveDate>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `FRC_SCHEDULE_LOG` is used, falling back to `info`.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Validate the project file and its dependency graph.
    Check,
    /// Print tasks in dependency order.
    Order,
    /// Print incomplete tasks whose prerequisites are all done.
    Ready,
    /// Print incomplete tasks waiting on other tasks.
    Blocked,
    /// Print incomplete tasks due within the next N days.
    DueSoon {
        #[arg(long, default_value_t = 7)]
        days: u32,
    },
    /// Print incomplete tasks past their end date.
    Overdue,
    /// Emit Gantt data as JSON on stdout.
    Gantt(GanttArgs),
}

#[derive(Debug, Clone, clap::Args)]
pub struct GanttArgs {
    /// Only items with this status (completed, in-progress, pending).
    #[arg(long)]
    pub status: Option<ItemStatus>,

    /// Only items in this subsystem.
    #[arg(long)]
    pub subsystem: Option<String>,

    /// Only items overlapping a range starting at this date.
    #[arg(long, value_name = "DATE")]
    pub from: Option<NaiveDate>,

    /// Only items overlapping a range ending at this date.
    #[arg(long, value_name = "DATE")]
    pub to: Option<NaiveDate>,

    /// Named view: all, critical-path, behind-schedule, milestones.
    #[arg(long, default_value = "all")]
    pub view: FilterView,

    #[arg(long, value_enum, default_value_t = GanttFormat::Chart)]
    pub format: GanttFormat,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum GanttFormat {
    /// Timeline items as a flat list.
    Items,
    /// `{ "datasets": [...] }` for the chart library.
    Chart,
    /// Finish-to-start dependency edges.
    Edges,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
