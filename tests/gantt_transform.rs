// tests/gantt_transform.rs

use std::collections::HashSet;

use frc_schedule::gantt::palette;
use frc_schedule::gantt::{
    EdgeKind, ItemStatus, ItemType, build_dependency_edges, to_chart_encoding,
    transform_milestones, transform_milestones_as_of, transform_tasks,
};
use frc_schedule::model::Task;
use frc_schedule::types::Priority;
use frc_schedule_test_utils::builders::{TaskBuilder, TaskGraphBuilder, milestone};
use frc_schedule_test_utils::{date, init_tracing};

fn sample_tasks() -> Vec<Task> {
    let graph = TaskGraphBuilder::new()
        .with_task(
            TaskBuilder::new(1)
                .title("Design drivetrain")
                .subsystem("Drivetrain")
                .priority(Priority::Critical)
                .dates(date(2026, 1, 10), date(2026, 1, 20))
                .completed()
                .build(),
        )
        .with_task(
            TaskBuilder::new(10)
                .title("Order motors")
                .priority(Priority::High)
                .progress(40)
                .build(),
        )
        .with_task(
            TaskBuilder::new(2)
                .title("Assemble gearbox")
                .subsystem("Drivetrain")
                .priority(Priority::Low)
                .after(10)
                .after(1)
                .dates(date(2026, 1, 21), date(2026, 1, 28))
                .build(),
        )
        .build();
    graph.tasks().cloned().collect()
}

#[test]
fn tasks_map_to_namespaced_items_with_derived_status() {
    init_tracing();
    let tasks = sample_tasks();

    let items = transform_tasks(&tasks);
    assert_eq!(items.len(), 3);

    let by_id = |id: &str| items.iter().find(|i| i.id == id).unwrap();

    let design = by_id("task_1");
    assert_eq!(design.title, "Design drivetrain");
    assert_eq!(design.item_type, ItemType::Task);
    assert_eq!(design.status, ItemStatus::Completed);
    assert_eq!(design.progress, 100);
    assert_eq!(design.start_date, date(2026, 1, 10));
    assert_eq!(design.end_date, date(2026, 1, 20));
    assert_eq!(design.subsystem, "Drivetrain");
    assert_eq!(design.color, palette::CRITICAL);

    let motors = by_id("task_10");
    assert_eq!(motors.status, ItemStatus::InProgress);
    assert_eq!(motors.color, palette::HIGH);
    // No subsystem and no end date still render.
    assert_eq!(motors.subsystem, "");
    assert_eq!(motors.end_date, motors.start_date);

    let gearbox = by_id("task_2");
    assert_eq!(gearbox.status, ItemStatus::Pending);
    assert_eq!(gearbox.color, palette::LOW);
    assert_eq!(gearbox.dependencies, vec!["task_1", "task_10"]);
}

#[test]
fn transform_tasks_is_deterministic() {
    let tasks = sample_tasks();
    assert_eq!(transform_tasks(&tasks), transform_tasks(&tasks));
}

#[test]
fn colors_are_a_function_of_priority_only() {
    let colors: HashSet<&str> = [Priority::Low, Priority::Medium, Priority::High, Priority::Critical]
        .into_iter()
        .map(palette::priority_color)
        .collect();
    assert_eq!(colors.len(), 4);
    assert!(!colors.contains(palette::MILESTONE));

    let a = TaskBuilder::new(1).priority(Priority::Medium).progress(10).build();
    let b = TaskBuilder::new(2).priority(Priority::Medium).completed().build();
    let items = transform_tasks([&a, &b]);
    assert_eq!(items[0].color, items[1].color);
    assert_eq!(items[0].color, palette::MEDIUM);
}

#[test]
fn milestones_use_date_for_both_ends_and_passed_for_status() {
    let today = date(2026, 2, 1);
    let milestones = vec![
        milestone(1, "Kickoff", date(2026, 1, 31)),
        milestone(2, "Stop build", date(2026, 2, 2)),
        milestone(3, "Today", today),
    ];

    let items = transform_milestones_as_of(&milestones, today);

    assert_eq!(items[0].id, "milestone_1");
    assert_eq!(items[0].status, ItemStatus::Completed);
    assert_eq!(items[1].status, ItemStatus::Pending);
    // Not strictly before today, so not yet passed.
    assert_eq!(items[2].status, ItemStatus::Pending);

    for item in &items {
        assert_eq!(item.item_type, ItemType::Milestone);
        assert_eq!(item.start_date, item.end_date);
        assert_eq!(item.progress, 0);
        assert_eq!(item.color, palette::MILESTONE);
        assert!(item.dependencies.is_empty());
    }
}

#[test]
fn milestones_relative_to_the_real_clock() {
    let today = chrono::Local::now().date_naive();
    let yesterday = today.pred_opt().unwrap();
    let tomorrow = today.succ_opt().unwrap();

    let milestones = vec![
        milestone(1, "Yesterday", yesterday),
        milestone(2, "Tomorrow", tomorrow),
    ];
    assert!(milestones[0].is_passed());
    assert!(!milestones[1].is_passed());

    let items = transform_milestones(&milestones);
    assert_eq!(items[0].status, ItemStatus::Completed);
    assert_eq!(items[1].status, ItemStatus::Pending);
}

#[test]
fn one_edge_per_pre_dependency() {
    let tasks = sample_tasks();
    let total_pre: usize = tasks.iter().map(|t| t.pre_dependencies.len()).sum();

    let edges = build_dependency_edges(&tasks);

    assert_eq!(edges.len(), total_pre);
    assert_eq!(edges.len(), 2);
    for edge in &edges {
        assert_eq!(edge.target, "task_2");
        assert_eq!(edge.kind, EdgeKind::FinishToStart);
    }
    let sources: HashSet<&str> = edges.iter().map(|e| e.source.as_str()).collect();
    assert_eq!(sources, HashSet::from(["task_1", "task_10"]));
}

#[test]
fn chart_encoding_remaps_fields() -> Result<(), serde_json::Error> {
    let tasks = sample_tasks();
    let mut items = transform_tasks(&tasks);
    items.extend(transform_milestones_as_of(
        &[milestone(7, "Regional", date(2026, 3, 5))],
        date(2026, 2, 1),
    ));

    let chart = to_chart_encoding(&items);
    assert_eq!(chart.datasets.len(), items.len());

    let design = &chart.datasets[0];
    assert_eq!(design.id, "task_1");
    assert_eq!(design.label, "Design drivetrain");
    assert_eq!(design.background_color, palette::CRITICAL);
    assert_eq!(design.border_color, "#a02725");
    assert_eq!(design.border_width, 1);
    assert_eq!(design.data[0].x, [date(2026, 1, 10), date(2026, 1, 20)]);
    assert_eq!(design.data[0].y, "Design drivetrain");

    let json = serde_json::to_value(&chart)?;
    let first = &json["datasets"][0];
    assert_eq!(first["backgroundColor"], palette::CRITICAL);
    assert_eq!(first["type"], "task");
    assert_eq!(first["subsystem"], "Drivetrain");
    assert_eq!(first["data"][0]["x"][0], "2026-01-10");

    // Empty subsystem is omitted rather than emitted as "".
    let milestone_json = &json["datasets"][3];
    assert_eq!(milestone_json["type"], "milestone");
    assert!(milestone_json.get("subsystem").is_none());
    Ok(())
}

#[test]
fn border_color_darkens_hex_and_falls_back_otherwise() {
    assert_eq!(palette::border_color("#ffffff"), "#b2b2b2");
    assert_eq!(palette::border_color("#000000"), "#000000");
    assert_eq!(palette::border_color("red"), palette::FALLBACK_BORDER);
    assert_eq!(palette::border_color("#12"), palette::FALLBACK_BORDER);
    assert_eq!(palette::border_color("#zzzzzz"), palette::FALLBACK_BORDER);
}
