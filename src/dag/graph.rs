// src/dag/graph.rs

use std::collections::{BTreeMap, BTreeSet, HashSet};

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use tracing::{debug, error, warn};

use crate::errors::{Result, ScheduleError};
use crate::model::{ProjectId, Task, TaskId};
use crate::progress;
use crate::store::TaskStore;

/// Arena of tasks for one project, keyed by task id.
///
/// Dependency edges live on the tasks themselves as id sets:
/// `b ∈ a.pre_dependencies` iff `a ∈ b.post_dependencies`. Every mutation
/// in this type keeps both sides in step and keeps the pre-dependency
/// graph acyclic.
///
/// Mutating methods take `&mut self`, so mutations on one graph are
/// serialized; share a graph across threads behind a `Mutex`.
#[derive(Debug, Clone, Default)]
pub struct TaskGraph {
    tasks: BTreeMap<TaskId, Task>,
}

impl TaskGraph {
    pub fn new() -> Self {
        Self {
            tasks: BTreeMap::new(),
        }
    }

    /// Build a graph from externally loaded tasks.
    ///
    /// Pre-dependency sets are authoritative; post-dependency sets are
    /// rebuilt from them. Fails on duplicate ids, inconsistent progress,
    /// self dependencies, references to tasks outside the input, and cycles.
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Result<Self> {
        let mut nodes: BTreeMap<TaskId, Task> = BTreeMap::new();
        for mut task in tasks {
            progress::check_consistent(&task)?;
            task.post_dependencies.clear();
            let id = task.id;
            if nodes.insert(id, task).is_some() {
                warn!(task = id, "duplicate task id in loaded set");
                return Err(ScheduleError::DuplicateTask(id));
            }
        }

        // Second pass: populate post sets based on pre sets.
        let edges: Vec<(TaskId, TaskId)> = nodes
            .values()
            .flat_map(|t| t.pre_dependencies.iter().map(move |&p| (t.id, p)))
            .collect();

        for (successor, predecessor) in edges {
            if successor == predecessor {
                return Err(ScheduleError::SelfDependency(successor));
            }
            match nodes.get_mut(&predecessor) {
                Some(pred) => {
                    pred.post_dependencies.insert(successor);
                }
                None => {
                    warn!(
                        task = successor,
                        missing = predecessor,
                        "pre-dependency refers to a task outside the loaded set"
                    );
                    return Err(ScheduleError::TaskNotFound(predecessor));
                }
            }
        }

        let graph = Self { tasks: nodes };
        graph.topological_order_all()?;
        Ok(graph)
    }

    /// Load every task of `project` from `store` into a new graph.
    pub fn load_project<S: TaskStore + ?Sized>(store: &S, project: ProjectId) -> Result<Self> {
        let tasks = store.load_tasks_by_project(project)?;
        debug!(project, count = tasks.len(), "loaded project tasks");
        Self::from_tasks(tasks)
    }

    /// Write every task back to `store`.
    pub fn save_all<S: TaskStore + ?Sized>(&self, store: &S) -> Result<()> {
        for task in self.tasks.values() {
            store.save_task(task.clone())?;
        }
        Ok(())
    }

    /// Add a task to the arena.
    ///
    /// The task's pre-dependencies are added one by one through
    /// [`TaskGraph::add_dependency`]; its post-dependency set is ignored
    /// and rebuilt by later edge insertions. If any edge is rejected the
    /// task is removed again and the error returned.
    pub fn insert(&mut self, mut task: Task) -> Result<()> {
        let id = task.id;
        if self.tasks.contains_key(&id) {
            return Err(ScheduleError::DuplicateTask(id));
        }
        progress::check_consistent(&task)?;

        let pre = std::mem::take(&mut task.pre_dependencies);
        task.post_dependencies.clear();
        self.tasks.insert(id, task);

        for predecessor in pre {
            if let Err(e) = self.add_dependency(id, predecessor) {
                self.remove_task(id)?;
                return Err(e);
            }
        }

        Ok(())
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(&id)
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.tasks.contains_key(&id)
    }

    /// All tasks, ordered by id.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    pub fn task_ids(&self) -> impl Iterator<Item = TaskId> + '_ {
        self.tasks.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Make `successor` depend on `predecessor`.
    ///
    /// Rejected when the two are the same task, or when `predecessor`
    /// already (transitively) depends on `successor`. Adding an edge that
    /// already exists is a no-op.
    pub fn add_dependency(&mut self, successor: TaskId, predecessor: TaskId) -> Result<()> {
        if successor == predecessor {
            warn!(task = successor, "rejecting self dependency");
            return Err(ScheduleError::SelfDependency(successor));
        }
        let existing = self.require(successor)?;
        self.require(predecessor)?;

        if existing.pre_dependencies.contains(&predecessor) {
            debug!(successor, predecessor, "dependency already present");
            return Ok(());
        }

        if self.is_ancestor(successor, predecessor) {
            warn!(
                successor,
                predecessor, "rejecting dependency that would close a cycle"
            );
            return Err(ScheduleError::CircularDependency {
                successor,
                predecessor,
            });
        }

        if let Some(s) = self.tasks.get_mut(&successor) {
            s.pre_dependencies.insert(predecessor);
        }
        if let Some(p) = self.tasks.get_mut(&predecessor) {
            p.post_dependencies.insert(successor);
        }

        debug!(successor, predecessor, "dependency added");
        Ok(())
    }

    /// Remove the edge `predecessor -> successor` in both directions.
    ///
    /// Returns whether an edge was removed.
    pub fn remove_dependency(&mut self, successor: TaskId, predecessor: TaskId) -> bool {
        let mut removed = false;
        if let Some(s) = self.tasks.get_mut(&successor) {
            removed |= s.pre_dependencies.remove(&predecessor);
        }
        if let Some(p) = self.tasks.get_mut(&predecessor) {
            removed |= p.post_dependencies.remove(&successor);
        }

        if removed {
            debug!(successor, predecessor, "dependency removed");
        }
        removed
    }

    /// Remove `id` from every dependency set in the graph and clear its own
    /// sets. Used before deleting a task.
    ///
    /// Returns the number of set entries removed from other tasks.
    pub fn detach_task(&mut self, id: TaskId) -> Result<usize> {
        let task = self
            .tasks
            .get_mut(&id)
            .ok_or(ScheduleError::TaskNotFound(id))?;
        task.pre_dependencies.clear();
        task.post_dependencies.clear();

        // Sweep the whole arena instead of trusting the task's own sets.
        let mut removed = 0;
        for other in self.tasks.values_mut() {
            if other.id == id {
                continue;
            }
            removed += usize::from(other.pre_dependencies.remove(&id));
            removed += usize::from(other.post_dependencies.remove(&id));
        }

        debug!(task = id, removed, "task detached from dependency graph");
        Ok(removed)
    }

    /// Detach `id` and drop it from the arena.
    pub fn remove_task(&mut self, id: TaskId) -> Result<Task> {
        self.detach_task(id)?;
        self.tasks
            .remove(&id)
            .ok_or(ScheduleError::TaskNotFound(id))
    }

    /// Apply [`progress::update_progress`] to a task in the arena.
    pub fn update_progress(
        &mut self,
        id: TaskId,
        new_progress: i32,
        explicit_completed: bool,
    ) -> Result<&Task> {
        let task = self
            .tasks
            .get_mut(&id)
            .ok_or(ScheduleError::TaskNotFound(id))?;
        let task = progress::update_progress(task, new_progress, explicit_completed)?;
        Ok(task)
    }

    /// Whether every pre-dependency of `id` is completed.
    ///
    /// Returns `None` if the task is unknown.
    pub fn is_ready(&self, id: TaskId) -> Option<bool> {
        let task = self.tasks.get(&id)?;
        Some(self.blocking_of(task).is_empty())
    }

    /// Would `add_dependency(successor, predecessor)` close a cycle?
    pub fn would_create_cycle(&self, successor: TaskId, predecessor: TaskId) -> bool {
        successor == predecessor || self.is_ancestor(successor, predecessor)
    }

    /// Every task `id` transitively depends on.
    pub fn all_prerequisites(&self, id: TaskId) -> BTreeSet<TaskId> {
        self.walk(id, |t| &t.pre_dependencies)
    }

    /// Every task that transitively depends on `id`.
    pub fn all_dependents(&self, id: TaskId) -> BTreeSet<TaskId> {
        self.walk(id, |t| &t.post_dependencies)
    }

    /// Incomplete tasks whose pre-dependencies are all completed.
    pub fn ready_tasks(&self) -> Vec<TaskId> {
        self.tasks
            .values()
            .filter(|t| !t.completed && self.blocking_of(t).is_empty())
            .map(|t| t.id)
            .collect()
    }

    /// Incomplete tasks that still wait on something, mapped to the
    /// pre-dependencies holding them up.
    pub fn blocked_tasks(&self) -> BTreeMap<TaskId, Vec<TaskId>> {
        self.tasks
            .values()
            .filter(|t| !t.completed)
            .filter_map(|t| {
                let blocking = self.blocking_of(t);
                if blocking.is_empty() {
                    None
                } else {
                    Some((t.id, blocking))
                }
            })
            .collect()
    }

    /// Order `ids` so that every pre-dependency precedes its dependents.
    ///
    /// Only edges between tasks in `ids` are considered.
    pub fn topological_order(&self, ids: &[TaskId]) -> Result<Vec<TaskId>> {
        let subset: BTreeSet<TaskId> = ids.iter().copied().collect();

        // Edge direction: predecessor -> successor.
        let mut graph: DiGraphMap<TaskId, ()> = DiGraphMap::new();
        for &id in &subset {
            self.require(id)?;
            graph.add_node(id);
        }
        for &id in &subset {
            for &pre in &self.tasks[&id].pre_dependencies {
                if subset.contains(&pre) {
                    graph.add_edge(pre, id, ());
                }
            }
        }

        match toposort(&graph, None) {
            Ok(order) => Ok(order),
            Err(cycle) => {
                let node = cycle.node_id();
                error!(task = node, "cycle detected in task dependency graph");
                Err(ScheduleError::CycleDetected(node))
            }
        }
    }

    /// Topological order of the whole arena.
    pub fn topological_order_all(&self) -> Result<Vec<TaskId>> {
        let ids: Vec<TaskId> = self.task_ids().collect();
        self.topological_order(&ids)
    }

    /// Check the progress, inverse-set and acyclicity invariants across
    /// the arena.
    pub fn validate(&self) -> Result<()> {
        for task in self.tasks.values() {
            progress::check_consistent(task)?;
            for &pre in &task.pre_dependencies {
                if pre == task.id {
                    return Err(ScheduleError::SelfDependency(pre));
                }
                let other = self.require(pre)?;
                if !other.post_dependencies.contains(&task.id) {
                    return Err(ScheduleError::InconsistentDependency {
                        task: task.id,
                        other: pre,
                    });
                }
            }
            for &post in &task.post_dependencies {
                let other = self.require(post)?;
                if !other.pre_dependencies.contains(&task.id) {
                    return Err(ScheduleError::InconsistentDependency {
                        task: task.id,
                        other: post,
                    });
                }
            }
        }

        self.topological_order_all()?;
        Ok(())
    }

    fn require(&self, id: TaskId) -> Result<&Task> {
        self.tasks.get(&id).ok_or(ScheduleError::TaskNotFound(id))
    }

    /// Pre-dependencies of `task` that are not completed. Dangling ids are
    /// reported as blocking.
    fn blocking_of(&self, task: &Task) -> Vec<TaskId> {
        task.pre_dependencies
            .iter()
            .copied()
            .filter(|pre| match self.tasks.get(pre) {
                Some(dep) => !dep.completed,
                None => {
                    warn!(task = task.id, dep = pre, "dependency missing from graph");
                    true
                }
            })
            .collect()
    }

    /// Return true if `ancestor` is reachable from `task` by following
    /// pre-dependency edges upwards.
    fn is_ancestor(&self, ancestor: TaskId, task: TaskId) -> bool {
        let mut stack: Vec<TaskId> = match self.tasks.get(&task) {
            Some(t) => t.pre_dependencies.iter().copied().collect(),
            None => return false,
        };
        let mut visited: HashSet<TaskId> = HashSet::new();

        while let Some(current) = stack.pop() {
            if current == ancestor {
                return true;
            }
            if !visited.insert(current) {
                continue;
            }
            if let Some(t) = self.tasks.get(&current) {
                stack.extend(t.pre_dependencies.iter().copied());
            }
        }

        false
    }

    fn walk<F>(&self, start: TaskId, next: F) -> BTreeSet<TaskId>
    where
        F: Fn(&Task) -> &BTreeSet<TaskId>,
    {
        let mut found = BTreeSet::new();
        let mut stack: Vec<TaskId> = match self.tasks.get(&start) {
            Some(t) => next(t).iter().copied().collect(),
            None => return found,
        };

        while let Some(current) = stack.pop() {
            if !found.insert(current) {
                continue;
            }
            if let Some(t) = self.tasks.get(&current) {
                stack.extend(next(t).iter().copied());
            }
        }

        found
    }
}
