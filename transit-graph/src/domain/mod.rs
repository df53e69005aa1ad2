//! Domain types for the transport network.
//!
//! This module contains the core vocabulary of the graph: stops, lines,
//! edges, transport modes, and the record types that form the in-memory
//! boundary with the data-loading collaborator. Arena indices
//! ([`StopIndex`], [`LineIndex`], [`EdgeIndex`]) are only meaningful for
//! the [`Graph`](crate::graph::Graph) that issued them.

mod edge;
mod error;
mod line;
mod mode;
mod record;
mod stop;

pub use edge::{Edge, EdgeIndex};
pub use error::GraphError;
pub use line::{Line, LineId, LineIndex};
pub use mode::TransportMode;
pub use record::{LineRecord, StopRecord};
pub use stop::{ComponentId, Stop, StopId, StopIndex};
