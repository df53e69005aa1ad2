//! Stop identity and the network vertex type.

use std::collections::BTreeSet;
use std::fmt;

use geo::{EuclideanDistance, Point};
use serde::{Deserialize, Serialize};

use super::EdgeIndex;

/// External identifier of a stop, as given by the timetable data.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StopId(String);

impl StopId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StopId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Position of a stop in a graph's stop arena.
///
/// Only meaningful for the [`Graph`](crate::graph::Graph) that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StopIndex(pub usize);

/// Label of a strongly connected component.
///
/// Labels run from 0 upwards and carry no meaning beyond equality: two
/// stops with the same label are mutually reachable over directed edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentId(pub usize);

/// A vertex of the transport network.
///
/// A stop owns its directed edge lists and a derived set of undirected
/// neighbours. The edge lists and neighbour set are maintained by the
/// owning [`Graph`](crate::graph::Graph); the component label is assigned
/// by the component finder and cleared whenever the edge set changes
/// structurally. Stops are created once at build time and never removed.
#[derive(Debug, Clone)]
pub struct Stop {
    id: StopId,
    name: String,
    position: Point<f64>,
    zone: Option<String>,
    outgoing: Vec<EdgeIndex>,
    incoming: Vec<EdgeIndex>,
    neighbours: BTreeSet<StopIndex>,
    component: Option<ComponentId>,
}

impl Stop {
    pub(crate) fn new(
        id: StopId,
        name: String,
        position: Point<f64>,
        zone: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            position,
            zone,
            outgoing: Vec::new(),
            incoming: Vec::new(),
            neighbours: BTreeSet::new(),
            component: None,
        }
    }

    pub fn id(&self) -> &StopId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Projected planar position, in meters.
    pub fn position(&self) -> Point<f64> {
        self.position
    }

    /// Fare zone or similar tag, if the source data provides one.
    pub fn zone(&self) -> Option<&str> {
        self.zone.as_deref()
    }

    /// Edges leaving this stop.
    pub fn outgoing(&self) -> &[EdgeIndex] {
        &self.outgoing
    }

    /// Edges arriving at this stop.
    pub fn incoming(&self) -> &[EdgeIndex] {
        &self.incoming
    }

    /// The undirected neighbour view: every stop connected to this one by
    /// an edge in either direction.
    ///
    /// Current as of the graph's last
    /// [`compute_neighbours`](crate::graph::Graph::compute_neighbours) run;
    /// the graph reruns that after every structural change.
    pub fn neighbours(&self) -> &BTreeSet<StopIndex> {
        &self.neighbours
    }

    /// The component label from the last
    /// [`find_components`](crate::analysis::find_components) run, or `None`
    /// if unlabeled.
    pub fn component(&self) -> Option<ComponentId> {
        self.component
    }

    /// Straight-line distance to another stop, in meters.
    pub fn distance_to(&self, other: &Stop) -> f64 {
        self.position.euclidean_distance(&other.position)
    }

    pub(crate) fn add_outgoing(&mut self, edge: EdgeIndex) {
        self.outgoing.push(edge);
    }

    pub(crate) fn add_incoming(&mut self, edge: EdgeIndex) {
        self.incoming.push(edge);
    }

    pub(crate) fn clear_edges(&mut self) {
        self.outgoing.clear();
        self.incoming.clear();
    }

    pub(crate) fn add_neighbour(&mut self, stop: StopIndex) {
        self.neighbours.insert(stop);
    }

    pub(crate) fn clear_neighbours(&mut self) {
        self.neighbours.clear();
    }

    pub(crate) fn set_component(&mut self, component: Option<ComponentId>) {
        self.component = component;
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
