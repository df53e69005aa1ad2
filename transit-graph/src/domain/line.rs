//! Scheduled service lines.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{StopIndex, TransportMode};

/// External identifier of a line, as given by the timetable data.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(String);

impl LineId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LineId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Position of a line in a graph's line arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineIndex(pub usize);

/// One scheduled service: an ordered sequence of stops with offset times.
///
/// Offsets are seconds from the start of the service and are expected to
/// be non-decreasing along the sequence. That contract belongs to the data
/// loader; a descending pair here produces a negative edge time cost, not
/// a failure. Lines are immutable after construction apart from appending
/// stops during graph build.
#[derive(Debug, Clone)]
pub struct Line {
    id: LineId,
    mode: TransportMode,
    stops: Vec<(StopIndex, u32)>,
}

impl Line {
    pub(crate) fn new(id: LineId, mode: TransportMode) -> Self {
        Self {
            id,
            mode,
            stops: Vec::new(),
        }
    }

    /// Append a stop at the given offset to the end of the sequence.
    pub(crate) fn push_stop(&mut self, stop: StopIndex, offset_seconds: u32) {
        self.stops.push((stop, offset_seconds));
    }

    pub fn id(&self) -> &LineId {
        &self.id
    }

    pub fn mode(&self) -> TransportMode {
        self.mode
    }

    /// The (stop, offset seconds) sequence in service order.
    pub fn stops(&self) -> &[(StopIndex, u32)] {
        &self.stops
    }
}
