// tests/graph_properties.rs

use proptest::prelude::*;

use frc_schedule::dag::TaskGraph;
use frc_schedule::errors::ScheduleError;
use frc_schedule::gantt::build_dependency_edges;
use frc_schedule_test_utils::builders::TaskBuilder;

const MAX_TASKS: u64 = 12;

fn empty_graph(n: u64) -> TaskGraph {
    let mut graph = TaskGraph::new();
    for id in 1..=n {
        graph
            .insert(TaskBuilder::new(id).build())
            .expect("fresh task without dependencies");
    }
    graph
}

// Arbitrary (successor, predecessor) requests over ids 1..=MAX_TASKS,
// including self edges and edges that would close cycles.
fn edge_requests() -> impl Strategy<Value = Vec<(u64, u64)>> {
    proptest::collection::vec((1..=MAX_TASKS, 1..=MAX_TASKS), 0..60)
}

fn assert_inverse_sets(graph: &TaskGraph) -> Result<(), TestCaseError> {
    for task in graph.tasks() {
        for &pre in &task.pre_dependencies {
            let other = graph.get(pre).expect("pre-dependency exists");
            prop_assert!(other.post_dependencies.contains(&task.id));
        }
        for &post in &task.post_dependencies {
            let other = graph.get(post).expect("post-dependency exists");
            prop_assert!(other.pre_dependencies.contains(&task.id));
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn edge_mutations_preserve_invariants(requests in edge_requests()) {
        let mut graph = empty_graph(MAX_TASKS);

        for (successor, predecessor) in requests {
            let would_cycle = graph.would_create_cycle(successor, predecessor);
            match graph.add_dependency(successor, predecessor) {
                Ok(()) => prop_assert!(!would_cycle),
                Err(ScheduleError::SelfDependency(id)) => {
                    prop_assert_eq!(id, successor);
                    prop_assert_eq!(successor, predecessor);
                }
                Err(ScheduleError::CircularDependency { .. }) => prop_assert!(would_cycle),
                Err(e) => prop_assert!(false, "unexpected error: {e:?}"),
            }
        }

        assert_inverse_sets(&graph)?;
        prop_assert!(graph.validate().is_ok());

        let order = graph.topological_order_all().expect("graph stays acyclic");
        prop_assert_eq!(order.len() as u64, MAX_TASKS);
    }

    #[test]
    fn reversing_an_accepted_edge_always_fails(requests in edge_requests()) {
        let mut graph = empty_graph(MAX_TASKS);

        for (successor, predecessor) in requests {
            if graph.add_dependency(successor, predecessor).is_ok() && successor != predecessor {
                let reversed = graph.add_dependency(predecessor, successor);
                let is_circular = matches!(reversed, Err(ScheduleError::CircularDependency { .. }));
                prop_assert!(is_circular);
            }
        }
    }

    #[test]
    fn one_edge_per_pre_dependency(requests in edge_requests()) {
        let mut graph = empty_graph(MAX_TASKS);
        for (successor, predecessor) in requests {
            let _ = graph.add_dependency(successor, predecessor);
        }

        let total: usize = graph.tasks().map(|t| t.pre_dependencies.len()).sum();
        prop_assert_eq!(build_dependency_edges(graph.tasks()).len(), total);
    }

    #[test]
    fn removals_and_detaches_keep_sets_inverse(
        requests in edge_requests(),
        removals in proptest::collection::vec((1..=MAX_TASKS, 1..=MAX_TASKS), 0..20),
        detach in 1..=MAX_TASKS,
    ) {
        let mut graph = empty_graph(MAX_TASKS);
        for (successor, predecessor) in requests {
            let _ = graph.add_dependency(successor, predecessor);
        }
        for (successor, predecessor) in removals {
            graph.remove_dependency(successor, predecessor);
        }
        graph.detach_task(detach).expect("task exists");

        assert_inverse_sets(&graph)?;
        for task in graph.tasks() {
            prop_assert!(!task.pre_dependencies.contains(&detach));
            prop_assert!(!task.post_dependencies.contains(&detach));
        }
    }
}
