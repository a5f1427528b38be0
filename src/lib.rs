// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod gantt;
pub mod logging;
pub mod model;
pub mod progress;
pub mod store;
pub mod types;

use std::collections::HashSet;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::cli::{CliArgs, Command, GanttArgs, GanttFormat};
use crate::config::load_and_validate;
use crate::dag::{TaskGraph, due_soon, overdue};
use crate::gantt::{
    TimelineFilter, build_dependency_edges, filter, to_chart_encoding,
    transform_milestones_as_of, transform_tasks,
};
use crate::model::{Milestone, Task};
use crate::store::{InMemoryStore, TaskStore};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - project file loading
/// - the data-access store
/// - the task graph
/// - the requested report
pub fn run(args: CliArgs) -> Result<()> {
    let cfg = load_and_validate(&args.project)?;
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let project_id = cfg.project.id;

    let store = InMemoryStore::with_entities(cfg.tasks()?, cfg.milestones());
    let graph = TaskGraph::load_project(&store, project_id)?;
    let milestones = store.load_milestones_by_project(project_id)?;

    info!(
        project = %cfg.project.name,
        tasks = graph.len(),
        milestones = milestones.len(),
        %today,
        "project loaded"
    );

    match args.command {
        Command::Check => {
            graph.validate()?;
            println!(
                "{}: {} tasks, {} milestones, dependency graph ok",
                cfg.project.name,
                graph.len(),
                milestones.len()
            );
        }
        Command::Order => {
            for id in graph.topological_order_all()? {
                if let Some(task) = graph.get(id) {
                    print_task(task);
                }
            }
        }
        Command::Ready => {
            print_list(
                "ready to start",
                graph.ready_tasks().into_iter().filter_map(|id| graph.get(id)),
            );
        }
        Command::Blocked => {
            let blocked = graph.blocked_tasks();
            if blocked.is_empty() {
                println!("No blocked tasks");
            }
            for (id, blocking) in blocked {
                if let Some(task) = graph.get(id) {
                    print_task(task);
                    println!("      waiting on: {:?}", blocking);
                }
            }
        }
        Command::DueSoon { days } => {
            let due = due_soon(graph.tasks(), today, days)?;
            print_list(&format!("due within {days} days"), due);
        }
        Command::Overdue => {
            print_list("overdue", overdue(graph.tasks(), today));
        }
        Command::Gantt(gantt_args) => {
            print_gantt(&graph, &milestones, today, &gantt_args)?;
        }
    }

    Ok(())
}

fn print_gantt(
    graph: &TaskGraph,
    milestones: &[Milestone],
    today: NaiveDate,
    args: &GanttArgs,
) -> Result<()> {
    let mut items = transform_tasks(graph.tasks());
    items.extend(transform_milestones_as_of(milestones, today));

    let mut criteria = TimelineFilter::new()
        .with_range(args.from, args.to)
        .with_view(args.view)
        .as_of(today);
    if let Some(status) = args.status {
        criteria = criteria.with_status(status);
    }
    if let Some(subsystem) = &args.subsystem {
        criteria = criteria.with_subsystem(subsystem.clone());
    }
    let items = filter(&items, &criteria);

    let json = match args.format {
        GanttFormat::Items => serde_json::to_string_pretty(&items)?,
        GanttFormat::Chart => serde_json::to_string_pretty(&to_chart_encoding(&items))?,
        GanttFormat::Edges => {
            let kept: HashSet<&str> = items.iter().map(|i| i.id.as_str()).collect();
            let edges: Vec<_> = build_dependency_edges(graph.tasks())
                .into_iter()
                .filter(|e| kept.contains(e.source.as_str()) && kept.contains(e.target.as_str()))
                .collect();
            serde_json::to_string_pretty(&edges)?
        }
    };

    println!("{json}");
    debug!(format = ?args.format, "gantt output written");
    Ok(())
}

fn print_list<'a>(heading: &str, tasks: impl IntoIterator<Item = &'a Task>) {
    let tasks: Vec<&Task> = tasks.into_iter().collect();
    if tasks.is_empty() {
        println!("No tasks {heading}");
        return;
    }
    println!("Tasks {heading} ({}):", tasks.len());
    for task in tasks {
        print_task(task);
    }
}

fn print_task(task: &Task) {
    let end = task
        .end_date
        .map(|d| d.to_string())
        .unwrap_or_else(|| "-".to_string());
    println!(
        "  - {} {} [{}] {}..{} {}%{}",
        task.id,
        task.title,
        task.priority,
        task.start_date,
        end,
        task.progress,
        if task.completed { " (done)" } else { "" }
    );
}
