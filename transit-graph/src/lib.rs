//! Multimodal transport-network graph engine.
//!
//! Builds a stop/line/edge graph from in-memory timetable records,
//! synthesizes walking edges between nearby stops, and answers three
//! questions about the resulting network: least-cost paths between stops
//! (A*), articulation stops whose removal disconnects part of the network,
//! and strongly connected components of the directed edge set.
//!
//! Loading timetable files, projecting coordinates, and rendering are the
//! caller's job; the boundary of this crate is purely in-memory.

pub mod analysis;
pub mod domain;
pub mod graph;
pub mod search;
