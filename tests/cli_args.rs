// tests/cli_args.rs

use std::path::PathBuf;

use clap::Parser;
use frc_schedule::cli::{CliArgs, Command, GanttFormat};
use frc_schedule::config::default_project_path;
use frc_schedule::types::FilterView;

#[test]
fn project_path_defaults_to_project_toml() {
    let args = CliArgs::try_parse_from(["frc-schedule", "check"]).expect("valid args");
    assert_eq!(args.project, default_project_path());
    assert_eq!(args.project, PathBuf::from("Project.toml"));
    assert!(args.log_level.is_none());
    assert!(matches!(args.command, Command::Check));
}

#[test]
fn gantt_arguments_parse() {
    let args = CliArgs::try_parse_from([
        "frc-schedule",
        "--project",
        "demos/Project.toml",
        "--today",
        "2026-01-12",
        "gantt",
        "--view",
        "critical-path",
        "--format",
        "edges",
    ])
    .expect("valid args");

    assert_eq!(args.project, PathBuf::from("demos/Project.toml"));
    match args.command {
        Command::Gantt(gantt) => {
            assert_eq!(gantt.view, FilterView::CriticalPath);
            assert_eq!(gantt.format, GanttFormat::Edges);
        }
        other => panic!("expected gantt command, got {other:?}"),
    }
}
