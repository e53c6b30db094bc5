// src/input/edges.rs

//! Edge-list format: one `predecessor<delim>successor` pair of integer task
//! ids per line.
//!
//! ```text
//! # comments and blank lines are skipped
//! 1,3
//! 2,3
//! 3,4
//! ```

use std::path::Path;

use tracing::debug;

use crate::dag::TaskGraph;
use crate::errors::{HuschedError, Result};
use crate::fs::{FileSystem, RealFileSystem};
use crate::types::{Delimiter, TaskId};

/// Parse edge-list text into `(predecessor, successor)` pairs, in file order.
pub fn parse_edges(text: &str, delimiter: Delimiter) -> Result<Vec<(TaskId, TaskId)>> {
    let mut edges = Vec::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let malformed = |reason: String| HuschedError::MalformedInput {
            line: index + 1,
            content: raw_line.to_string(),
            reason,
        };

        let tokens = delimiter.split(line);
        if tokens.len() != 2 {
            return Err(malformed(format!(
                "expected 2 task ids separated by {delimiter}, found {} field(s)",
                tokens.len()
            )));
        }

        let parse = |token: &str| {
            token
                .parse::<TaskId>()
                .map_err(|_| malformed(format!("{token:?} is not an integer task id")))
        };

        edges.push((parse(tokens[0])?, parse(tokens[1])?));
    }

    Ok(edges)
}

/// Build a graph from edges, adding each task on its first appearance.
pub fn graph_from_edges(edges: &[(TaskId, TaskId)]) -> Result<TaskGraph> {
    let mut graph = TaskGraph::new();

    for &(from, to) in edges {
        graph.ensure_task(from);
        graph.ensure_task(to);
        graph.add_edge(from, to)?;
    }

    Ok(graph)
}

/// Load a graph from an edge-list file on disk.
pub fn load_graph(path: impl AsRef<Path>, delimiter: Delimiter) -> Result<TaskGraph> {
    load_graph_with_fs(&RealFileSystem, path, delimiter)
}

/// Load a graph from an edge-list file through the given filesystem.
pub fn load_graph_with_fs(
    fs: &dyn FileSystem,
    path: impl AsRef<Path>,
    delimiter: Delimiter,
) -> Result<TaskGraph> {
    let path = path.as_ref();
    let contents = fs.read_to_string(path)?;

    let edges = parse_edges(&contents, delimiter)?;
    let graph = graph_from_edges(&edges)?;

    debug!(
        path = %path.display(),
        tasks = graph.len(),
        edges = graph.edge_count(),
        "loaded precedence graph"
    );

    Ok(graph)
}
