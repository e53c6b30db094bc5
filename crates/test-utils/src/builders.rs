#![allow(dead_code)]

use husched::config::{ConfigFile, InputSection, RawConfigFile, ScheduleSection};
use husched::dag::TaskGraph;
use husched::types::{Delimiter, Orientation, TaskId};

/// Builder for `TaskGraph` to simplify test setup.
///
/// Tasks are added implicitly by `edge`, the same way the edge-list loader
/// does it.
pub struct GraphBuilder {
    graph: TaskGraph,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: TaskGraph::new(),
        }
    }

    pub fn task(mut self, id: TaskId) -> Self {
        self.graph.ensure_task(id);
        self
    }

    pub fn edge(mut self, from: TaskId, to: TaskId) -> Self {
        self.graph.ensure_task(from);
        self.graph.ensure_task(to);
        self.graph
            .add_edge(from, to)
            .expect("both endpoints were just added");
        self
    }

    pub fn edges(self, edges: &[(TaskId, TaskId)]) -> Self {
        edges
            .iter()
            .fold(self, |builder, &(from, to)| builder.edge(from, to))
    }

    /// `ids[0] -> ids[1] -> ... -> ids[n-1]`.
    pub fn chain(self, ids: &[TaskId]) -> Self {
        let builder = match ids.first() {
            Some(&first) => self.task(first),
            None => self,
        };
        ids.windows(2)
            .fold(builder, |builder, pair| builder.edge(pair[0], pair[1]))
    }

    pub fn build(self) -> TaskGraph {
        self.graph
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a forest from a parent table.
///
/// Task `i + 1` hangs below task `parents[i] + 1` when `parents[i]` is
/// `Some` (the parent index must be smaller than `i`). For `Orientation::In`
/// the edge points child -> parent, for `Orientation::Out` parent -> child.
pub fn forest_from_parents(parents: &[Option<usize>], orientation: Orientation) -> TaskGraph {
    let mut builder = GraphBuilder::new();

    for (i, parent) in parents.iter().enumerate() {
        let child = i as TaskId + 1;
        builder = builder.task(child);
        if let Some(p) = parent {
            assert!(*p < i, "parent index {p} must be below child index {i}");
            let parent = *p as TaskId + 1;
            builder = match orientation {
                Orientation::In => builder.edge(child, parent),
                Orientation::Out => builder.edge(parent, child),
            };
        }
    }

    builder.build()
}

/// Builder for `ConfigFile`.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                schedule: ScheduleSection::default(),
                input: InputSection::default(),
            },
        }
    }

    pub fn machines(mut self, machines: i64) -> Self {
        self.config.schedule.machines = machines;
        self
    }

    pub fn delimiter(mut self, delimiter: Delimiter) -> Self {
        self.config.input.delimiter = delimiter;
        self
    }

    pub fn build_raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
