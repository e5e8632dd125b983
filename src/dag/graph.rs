// src/dag/graph.rs

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};

use petgraph::Direction;
use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use tracing::debug;

use crate::dag::TaskName;
use crate::dag::task::{Task, TaskId};
use crate::errors::{GanttdagError, Result};

static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(1);

/// Arena of task definitions plus their dependency edges.
///
/// Tasks are addressed by [`TaskId`] (their index in the arena, tagged with
/// the graph that issued it). The graph is the scheduling context: every
/// dependency a project refers to must be resolvable here.
///
/// A clone keeps the id space of its source, so ids issued before the clone
/// resolve in both copies.
#[derive(Debug, Clone)]
pub struct TaskGraph {
    id: u64,
    tasks: Vec<Task>,
    /// Reverse adjacency, indexed like `tasks`.
    dependents: Vec<Vec<TaskId>>,
}

impl Default for TaskGraph {
    fn default() -> Self {
        Self {
            id: NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed),
            tasks: Vec::new(),
            dependents: Vec::new(),
        }
    }
}

impl TaskGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arena slot for `id`, if it was issued by this graph and exists.
    fn slot(&self, id: TaskId) -> Option<usize> {
        (id.graph == self.id && id.index < self.tasks.len()).then_some(id.index)
    }

    /// Create a task and return its id.
    ///
    /// Fails with [`GanttdagError::InvalidTask`] if the name is blank or the
    /// duration is negative (or does not fit in a `u32`), and with
    /// [`GanttdagError::UnknownDependency`] if a dependency is not a task of
    /// this graph. Nothing is stored on failure.
    pub fn create_task(
        &mut self,
        name: impl Into<TaskName>,
        description: impl Into<String>,
        duration: i64,
        dependencies: &[TaskId],
    ) -> Result<TaskId> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(GanttdagError::InvalidTask(
                "task name must not be empty".to_string(),
            ));
        }
        if duration < 0 {
            return Err(GanttdagError::InvalidTask(format!(
                "task '{}' has negative duration {}",
                name, duration
            )));
        }
        let duration = u32::try_from(duration).map_err(|_| {
            GanttdagError::InvalidTask(format!(
                "task '{}' has duration {} which exceeds {} days",
                name,
                duration,
                u32::MAX
            ))
        })?;

        let mut deps: Vec<TaskId> = Vec::with_capacity(dependencies.len());
        for &dep in dependencies {
            if self.slot(dep).is_none() {
                return Err(GanttdagError::UnknownDependency {
                    task: name,
                    dependency: dep.to_string(),
                });
            }
            if !deps.contains(&dep) {
                deps.push(dep);
            }
        }

        let id = TaskId {
            graph: self.id,
            index: self.tasks.len(),
        };
        for &dep in &deps {
            self.dependents[dep.index].push(id);
        }

        debug!(task = %name, %id, duration, deps = deps.len(), "created task");

        self.tasks.push(Task {
            id,
            name,
            description: description.into(),
            duration,
            deps,
            completed: false,
        });
        self.dependents.push(Vec::new());

        Ok(id)
    }

    /// Add a dependency edge after creation: `task` waits for `dependency`.
    ///
    /// Adding an edge that already exists is a no-op. Cycles are not checked
    /// here; they surface when the graph is validated.
    pub fn add_dependency(&mut self, task: TaskId, dependency: TaskId) -> Result<()> {
        let Some(slot) = self.slot(task) else {
            return Err(GanttdagError::InvalidTask(format!(
                "task {} is not part of this graph",
                task
            )));
        };
        let Some(dep_slot) = self.slot(dependency) else {
            return Err(GanttdagError::UnknownDependency {
                task: self.tasks[slot].name.clone(),
                dependency: dependency.to_string(),
            });
        };

        let info = &mut self.tasks[slot];
        if task == dependency {
            return Err(GanttdagError::InvalidTask(format!(
                "task '{}' cannot depend on itself",
                info.name
            )));
        }
        if info.deps.contains(&dependency) {
            return Ok(());
        }
        info.deps.push(dependency);
        self.dependents[dep_slot].push(task);

        debug!(%task, %dependency, "added dependency edge");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.slot(id).is_some()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.slot(id).map(|i| &self.tasks[i])
    }

    /// All tasks, in creation order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// First task with the given name, if any.
    pub fn find_by_name(&self, name: &str) -> Option<TaskId> {
        self.tasks.iter().find(|t| t.name == name).map(|t| t.id)
    }

    /// Immediate dependencies of a task.
    pub fn dependencies_of(&self, id: TaskId) -> &[TaskId] {
        self.get(id).map(|t| t.deps.as_slice()).unwrap_or(&[])
    }

    /// Immediate dependents of a task (tasks that wait for this one).
    pub fn dependents_of(&self, id: TaskId) -> &[TaskId] {
        self.slot(id)
            .map(|i| self.dependents[i].as_slice())
            .unwrap_or(&[])
    }

    /// Mark a task as completed. Returns `false` if the id is unknown.
    pub fn mark_complete(&mut self, id: TaskId) -> bool {
        self.set_completed(id, true)
    }

    pub fn set_completed(&mut self, id: TaskId, completed: bool) -> bool {
        match self.slot(id) {
            Some(i) => {
                self.tasks[i].completed = completed;
                true
            }
            None => false,
        }
    }

    /// Display name for an id, falling back to the id itself when the task
    /// does not exist.
    pub fn display_name(&self, id: TaskId) -> TaskName {
        match self.get(id) {
            Some(task) => task.name.clone(),
            None => id.to_string(),
        }
    }

    /// Validate the dependency closure of `roots` and return it in
    /// topological order (every task after all of its dependencies).
    ///
    /// `owner` names whoever refers to `roots` (usually the project) and is
    /// used as the referring side if a root itself is unknown.
    ///
    /// Errors:
    /// - [`GanttdagError::UnknownDependency`] if a root is not in this graph
    /// - [`GanttdagError::CyclicDependency`] with the offending cycle
    pub fn topological_order(&self, owner: &str, roots: &[TaskId]) -> Result<Vec<TaskId>> {
        let closure = self.dependency_closure(owner, roots)?;

        // Edge direction: dependency -> dependent.
        let mut graph: DiGraphMap<TaskId, ()> = DiGraphMap::new();
        for &id in &closure {
            graph.add_node(id);
        }
        for &id in &closure {
            for &dep in &self.tasks[id.index].deps {
                graph.add_edge(dep, id, ());
            }
        }

        match toposort(&graph, None) {
            Ok(order) => Ok(order),
            Err(cycle) => {
                let cycle = self.extract_cycle(&graph, cycle.node_id());
                Err(GanttdagError::CyclicDependency { cycle })
            }
        }
    }

    /// Collect `roots` and everything they transitively depend on, sorted by
    /// id. Iterative so deep chains cannot overflow the stack.
    fn dependency_closure(&self, owner: &str, roots: &[TaskId]) -> Result<Vec<TaskId>> {
        let mut seen = vec![false; self.tasks.len()];
        let mut closure = Vec::new();

        for &root in roots {
            if !self.contains(root) {
                return Err(GanttdagError::UnknownDependency {
                    task: owner.to_string(),
                    dependency: root.to_string(),
                });
            }

            // Edges are checked on insertion, so only roots can dangle.
            let mut stack = vec![root];
            while let Some(id) = stack.pop() {
                if seen[id.index] {
                    continue;
                }
                seen[id.index] = true;
                closure.push(id);

                for &dep in &self.tasks[id.index].deps {
                    if !seen[dep.index] {
                        stack.push(dep);
                    }
                }
            }
        }

        closure.sort();
        Ok(closure)
    }

    /// Find a concrete cycle through `start`, which toposort reported as
    /// lying on one.
    ///
    /// Breadth-first from `start` until an edge leads back to it, so the path
    /// is a shortest cycle through `start`. Returns names in edge order with
    /// the first name repeated at the end.
    fn extract_cycle(&self, graph: &DiGraphMap<TaskId, ()>, start: TaskId) -> Vec<TaskName> {
        let mut parent: HashMap<TaskId, TaskId> = HashMap::new();
        let mut queue = VecDeque::from([start]);

        while let Some(node) = queue.pop_front() {
            for next in graph.neighbors_directed(node, Direction::Outgoing) {
                if next == start {
                    let mut path = vec![node];
                    let mut cur = node;
                    while let Some(&p) = parent.get(&cur) {
                        cur = p;
                        path.push(cur);
                    }
                    path.reverse();
                    path.push(start);
                    return path.into_iter().map(|id| self.display_name(id)).collect();
                }
                if let Entry::Vacant(e) = parent.entry(next) {
                    e.insert(node);
                    queue.push_back(next);
                }
            }
        }

        vec![self.display_name(start), self.display_name(start)]
    }
}
