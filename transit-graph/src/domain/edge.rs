//! Directed, costed connections between stops.

use super::{LineIndex, StopIndex, TransportMode};

/// Position of an edge in a graph's edge arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeIndex(pub usize);

/// A directed arc between two stops.
///
/// `line` is `None` exactly when the edge was synthesized as a walking
/// connection. Edges are immutable values; equality is structural
/// identity over endpoints, mode, and owning line, so two edges for the
/// same connection are the same logical edge whatever their costs.
#[derive(Debug, Clone)]
pub struct Edge {
    from: StopIndex,
    to: StopIndex,
    mode: TransportMode,
    line: Option<LineIndex>,
    time: f64,
    distance: f64,
}

impl Edge {
    pub(crate) fn new(
        from: StopIndex,
        to: StopIndex,
        mode: TransportMode,
        line: Option<LineIndex>,
        time: f64,
        distance: f64,
    ) -> Self {
        Self {
            from,
            to,
            mode,
            line,
            time,
            distance,
        }
    }

    pub fn from_stop(&self) -> StopIndex {
        self.from
    }

    pub fn to_stop(&self) -> StopIndex {
        self.to
    }

    pub fn mode(&self) -> TransportMode {
        self.mode
    }

    /// The line this edge belongs to; `None` for walking edges.
    pub fn line(&self) -> Option<LineIndex> {
        self.line
    }

    /// Travel time along the edge, in seconds.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Straight-line distance between the endpoints, in meters.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// True for synthesized walking edges.
    pub fn is_walking(&self) -> bool {
        self.mode == TransportMode::Walking
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from
            && self.to == other.to
            && self.mode == other.mode
            && self.line == other.line
    }
}

impl Eq for Edge {}
