//! Read-only analyses over a built graph.
//!
//! Each algorithm takes the graph as an explicit parameter for the
//! duration of one call and produces an independent result; nothing here
//! retains the graph. Articulation detection reads the undirected
//! neighbour view; component labeling reads the directed edge lists and
//! writes the per-stop labels back through the graph.

mod articulation;
mod components;

pub use articulation::{connected_subgraphs, find_articulation_points};
pub use components::find_components;
