// src/dag/mod.rs

//! Precedence graph, shape classification, levels and Hu scheduling.
//!
//! - [`graph`] holds the task arena and both adjacency directions.
//! - [`topology`] decides whether the graph is an in/out tree or forest.
//! - [`levels`] computes the per-task level used as the scheduling key.
//! - [`scheduler`] runs Hu's list scheduling on a fixed number of machines.
//! - [`schedule`] is the read-only result.

pub mod graph;
pub mod levels;
pub mod schedule;
pub mod scheduler;
pub mod topology;

pub use graph::TaskGraph;
pub use levels::{LevelMap, assign_levels};
pub use schedule::{Assignment, Schedule};
pub use scheduler::HuScheduler;
pub use topology::{Topology, classify};
