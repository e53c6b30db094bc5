// src/input/mod.rs

//! Loading precedence graphs from edge-list files.

pub mod edges;

pub use edges::{graph_from_edges, load_graph, load_graph_with_fs, parse_edges};
