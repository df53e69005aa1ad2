//! Shortest-path search over the directed edge set.
//!
//! Classic A* with a selectable cost metric: either total straight-line
//! distance or total travel time. The search consumes a built
//! [`Graph`](crate::graph::Graph) read-only and produces an independent
//! [`Path`] result.

mod astar;
mod config;


pub use astar::{Path, find_shortest_path};
pub use config::{CostMetric, CostModel};
