#![allow(dead_code)]

use std::collections::HashMap;

use chrono::NaiveDate;
use ganttdag::config::{ProjectFile, ProjectSection, RawProjectFile, TaskConfig};
use ganttdag::dag::{Project, TaskGraph, TaskId};

/// Builder for `ProjectFile` to simplify config-level test setup.
pub struct ProjectFileBuilder {
    config: RawProjectFile,
}

impl ProjectFileBuilder {
    pub fn new(name: &str, start_date: &str) -> Self {
        Self {
            config: RawProjectFile {
                project: ProjectSection {
                    name: name.to_string(),
                    description: String::new(),
                    start_date: start_date.to_string(),
                    end_date: None,
                },
                task: Vec::new(),
            },
        }
    }

    pub fn end_date(mut self, date: &str) -> Self {
        self.config.project.end_date = Some(date.to_string());
        self
    }

    pub fn with_task(mut self, task: TaskConfig) -> Self {
        self.config.task.push(task);
        self
    }

    pub fn raw(self) -> RawProjectFile {
        self.config
    }

    pub fn build(self) -> ProjectFile {
        ProjectFile::try_from(self.config).expect("Failed to build valid project file from builder")
    }
}

/// Builder for `TaskConfig`.
pub struct TaskConfigBuilder {
    task: TaskConfig,
}

impl TaskConfigBuilder {
    pub fn new(name: &str, duration: i64) -> Self {
        Self {
            task: TaskConfig {
                name: name.to_string(),
                description: String::new(),
                duration,
                after: vec![],
                group: None,
                completed: false,
            },
        }
    }

    pub fn after(mut self, dep: &str) -> Self {
        self.task.after.push(dep.to_string());
        self
    }

    pub fn description(mut self, text: &str) -> Self {
        self.task.description = text.to_string();
        self
    }

    pub fn group(mut self, group: &str) -> Self {
        self.task.group = Some(group.to_string());
        self
    }

    pub fn completed(mut self, val: bool) -> Self {
        self.task.completed = val;
        self
    }

    pub fn build(self) -> TaskConfig {
        self.task
    }
}

/// Builder for an in-memory `TaskGraph` + `Project`, addressing tasks by name.
///
/// Every task added here is also added to the project, in call order.
pub struct ProjectBuilder {
    graph: TaskGraph,
    project: Project,
    ids: HashMap<String, TaskId>,
}

impl ProjectBuilder {
    pub fn new(start_date: NaiveDate) -> Self {
        Self {
            graph: TaskGraph::new(),
            project: Project::new("test project", "", start_date, None),
            ids: HashMap::new(),
        }
    }

    /// Add a task depending on previously added tasks (by name).
    pub fn task(mut self, name: &str, duration: i64, after: &[&str]) -> Self {
        let deps: Vec<TaskId> = after.iter().map(|dep| self.id(dep)).collect();
        let id = self
            .graph
            .create_task(name, "", duration, &deps)
            .expect("valid test task");
        self.project.add_task(id);
        self.ids.insert(name.to_string(), id);
        self
    }

    /// Add an edge after creation (used to build cycles).
    pub fn edge(mut self, task: &str, dependency: &str) -> Self {
        let (task, dependency) = (self.id(task), self.id(dependency));
        self.graph
            .add_dependency(task, dependency)
            .expect("valid test edge");
        self
    }

    pub fn id(&self, name: &str) -> TaskId {
        *self
            .ids
            .get(name)
            .unwrap_or_else(|| panic!("unknown task '{name}' in test builder"))
    }

    pub fn build(self) -> BuiltProject {
        BuiltProject {
            graph: self.graph,
            project: self.project,
            ids: self.ids,
        }
    }
}

/// Output of [`ProjectBuilder::build`].
pub struct BuiltProject {
    pub graph: TaskGraph,
    pub project: Project,
    pub ids: HashMap<String, TaskId>,
}

impl BuiltProject {
    pub fn id(&self, name: &str) -> TaskId {
        self.ids[name]
    }
}
