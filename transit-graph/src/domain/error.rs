//! Build-time error types.
//!
//! Only record inconsistencies that cannot be represented in the graph
//! arenas are errors. Absence outcomes in queries (a stop id that resolves
//! to nothing, an unreachable goal) are `None` values, not failures, and
//! merely inconsistent costs (non-monotonic offsets) are the loader's
//! problem.

use super::{LineId, StopId};

/// Errors raised while building a graph from input records.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Two stop records share an id
    #[error("duplicate stop id: {0}")]
    DuplicateStop(StopId),

    /// A line references a stop id with no record
    #[error("line {line} references unknown stop {stop}")]
    UnknownStop { line: LineId, stop: StopId },
}
