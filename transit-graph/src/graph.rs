//! The transport network graph.
//!
//! [`Graph`] owns the stop, line, and edge arenas. Construction interns
//! the input records, creates one directed edge per consecutive stop pair
//! per line, and derives the undirected neighbour view. Walking edges
//! between nearby stops can be regenerated at any time without rebuilding
//! the line-derived edges.

use std::collections::HashMap;

use geo::Point;
use tracing::debug;

use crate::domain::{
    ComponentId, Edge, EdgeIndex, GraphError, Line, LineIndex, LineRecord, Stop, StopId,
    StopIndex, StopRecord, TransportMode,
};

/// Parameters for walking-edge synthesis.
///
/// Distances are in the units of the projected stop coordinates (meters).
#[derive(Debug, Clone)]
pub struct WalkConfig {
    /// Maximum straight-line distance between two stops for a walking
    /// edge to be created between them.
    pub max_distance_meters: f64,

    /// Assumed walking speed, used to derive the time cost of a walking
    /// edge from its distance.
    pub walking_speed_mps: f64,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            max_distance_meters: 100.0,
            walking_speed_mps: 1.4,
        }
    }
}

/// The transport network: stops, lines, and the directed edges that
/// connect them.
///
/// A graph is built once from input records. Scheduled edges (one per
/// consecutive stop pair per line) never change afterwards; walking edges
/// may be removed and re-synthesized repeatedly. The graph keeps every
/// stop's edge lists and neighbour set consistent with the edge arena
/// across those changes, and clears component labels on any structural
/// change, since a previous partition no longer describes the network.
#[derive(Debug, Clone)]
pub struct Graph {
    stops: Vec<Stop>,
    lines: Vec<Line>,
    edges: Vec<Edge>,
    by_id: HashMap<StopId, StopIndex>,
    component_count: usize,
}

impl Graph {
    /// Build a graph from stop and line records.
    ///
    /// For each consecutive pair of stops in a line with offsets
    /// (t_i, t_{i+1}), a directed edge is created with time cost
    /// t_{i+1} − t_i and distance cost equal to the straight-line distance
    /// between the stops. Edges exist only between stops adjacent in a
    /// line's sequence. Neighbour sets are derived before returning.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateStop`] if two stop records share an
    /// id, and [`GraphError::UnknownStop`] if a line references an id with
    /// no stop record.
    pub fn build(stops: Vec<StopRecord>, lines: Vec<LineRecord>) -> Result<Self, GraphError> {
        let mut graph = Graph {
            stops: Vec::with_capacity(stops.len()),
            lines: Vec::with_capacity(lines.len()),
            edges: Vec::new(),
            by_id: HashMap::with_capacity(stops.len()),
            component_count: 0,
        };

        for record in stops {
            let index = StopIndex(graph.stops.len());
            if graph.by_id.insert(record.id.clone(), index).is_some() {
                return Err(GraphError::DuplicateStop(record.id));
            }
            graph.stops.push(Stop::new(
                record.id,
                record.name,
                Point::new(record.x, record.y),
                record.zone,
            ));
        }

        for record in lines {
            graph.add_line(record)?;
        }

        graph.compute_neighbours();

        debug!(
            stops = graph.stops.len(),
            lines = graph.lines.len(),
            edges = graph.edges.len(),
            "graph built"
        );

        Ok(graph)
    }

    /// Intern one line record and create the edges between its
    /// consecutive stops.
    fn add_line(&mut self, record: LineRecord) -> Result<(), GraphError> {
        let index = LineIndex(self.lines.len());
        let mut line = Line::new(record.id, record.mode);

        for (stop_id, offset) in record.stops {
            let stop = self
                .by_id
                .get(&stop_id)
                .copied()
                .ok_or_else(|| GraphError::UnknownStop {
                    line: line.id().clone(),
                    stop: stop_id.clone(),
                })?;
            line.push_stop(stop, offset);
        }

        for pair in line.stops().windows(2) {
            let (from, t_from) = pair[0];
            let (to, t_to) = pair[1];
            let distance = self.stops[from.0].distance_to(&self.stops[to.0]);
            // Widen before subtracting: offsets in bad data may run backwards.
            let time = f64::from(t_to) - f64::from(t_from);
            self.insert_edge(Edge::new(from, to, record.mode, Some(index), time, distance));
        }

        self.lines.push(line);
        Ok(())
    }

    /// Register an edge in the arena and in both endpoints' edge lists.
    fn insert_edge(&mut self, edge: Edge) -> EdgeIndex {
        let index = EdgeIndex(self.edges.len());
        self.stops[edge.from_stop().0].add_outgoing(index);
        self.stops[edge.to_stop().0].add_incoming(index);
        self.edges.push(edge);
        index
    }

    /// Derive every stop's undirected neighbour set from the edge set:
    /// for each edge, the destination becomes a neighbour of the origin
    /// and vice versa.
    ///
    /// Idempotent. The graph reruns this after every structural mutation,
    /// so connectivity-based analyses always see current sets.
    pub fn compute_neighbours(&mut self) {
        for stop in &mut self.stops {
            stop.clear_neighbours();
        }
        for index in 0..self.edges.len() {
            let (from, to) = (self.edges[index].from_stop(), self.edges[index].to_stop());
            self.stops[from.0].add_neighbour(to);
            self.stops[to.0].add_neighbour(from);
        }
    }

    /// Regenerate walking edges between stops within
    /// `config.max_distance_meters` of each other.
    ///
    /// Existing walking edges are removed first, and all component labels
    /// are reset: a structural change invalidates any previous partition.
    /// The scan visits every ordered pair of distinct stops, so each
    /// qualifying pair gets a directed edge in both directions; callers
    /// iterating walking edges must not double-count. The scan is O(n²),
    /// which is acceptable for a fixed city-scale network.
    pub fn synthesize_walking_edges(&mut self, config: &WalkConfig) {
        self.remove_walking_edges();

        let mut added = 0usize;
        for from in 0..self.stops.len() {
            for to in 0..self.stops.len() {
                if from == to {
                    continue;
                }
                let distance = self.stops[from].distance_to(&self.stops[to]);
                if distance <= config.max_distance_meters {
                    let time = distance / config.walking_speed_mps;
                    self.insert_edge(Edge::new(
                        StopIndex(from),
                        StopIndex(to),
                        TransportMode::Walking,
                        None,
                        time,
                        distance,
                    ));
                    added += 1;
                }
            }
        }

        self.compute_neighbours();
        debug!(
            added,
            threshold = config.max_distance_meters,
            "walking edges regenerated"
        );
    }

    /// Remove every walking edge from the graph.
    ///
    /// Also resets component labels and recomputes neighbour sets, since
    /// the edge set changed structurally.
    pub fn remove_walking_edges(&mut self) {
        self.reset_component_labels();
        self.edges.retain(|edge| !edge.is_walking());

        // Removal shifts edge indices; rebuild every stop's edge lists.
        for stop in &mut self.stops {
            stop.clear_edges();
        }
        for index in 0..self.edges.len() {
            let (from, to) = (self.edges[index].from_stop(), self.edges[index].to_stop());
            self.stops[from.0].add_outgoing(EdgeIndex(index));
            self.stops[to.0].add_incoming(EdgeIndex(index));
        }

        self.compute_neighbours();
    }

    /// Clear every stop's component label and the recorded component
    /// count.
    pub fn reset_component_labels(&mut self) {
        for stop in &mut self.stops {
            stop.set_component(None);
        }
        self.component_count = 0;
    }

    pub(crate) fn assign_component(&mut self, stop: StopIndex, id: ComponentId) {
        self.stops[stop.0].set_component(Some(id));
    }

    pub(crate) fn set_component_count(&mut self, count: usize) {
        self.component_count = count;
    }

    /// Number of strongly connected components found by the last
    /// [`find_components`](crate::analysis::find_components) run, or 0 if
    /// none has run since the last structural change.
    pub fn component_count(&self) -> usize {
        self.component_count
    }

    /// All stops, in arena order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// All lines, in arena order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// All edges, scheduled and walking, in arena order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn stop(&self, index: StopIndex) -> &Stop {
        &self.stops[index.0]
    }

    pub fn line(&self, index: LineIndex) -> &Line {
        &self.lines[index.0]
    }

    pub fn edge(&self, index: EdgeIndex) -> &Edge {
        &self.edges[index.0]
    }

    /// Look up a stop by its external id.
    pub fn stop_index(&self, id: &StopId) -> Option<StopIndex> {
        self.by_id.get(id).copied()
    }

    /// The first stop whose name starts with `prefix`, alphabetically by
    /// name.
    pub fn first_matching_stop(&self, prefix: &str) -> Option<StopIndex> {
        self.all_matching_stops(prefix).into_iter().next()
    }

    /// All stops whose names start with `prefix`, alphabetically by name.
    pub fn all_matching_stops(&self, prefix: &str) -> Vec<StopIndex> {
        let mut matches: Vec<StopIndex> = (0..self.stops.len())
            .map(StopIndex)
            .filter(|index| self.stops[index.0].name().starts_with(prefix))
            .collect();
        matches.sort_by(|a, b| {
            self.stops[a.0]
                .name()
                .cmp(self.stops[b.0].name())
                .then(a.cmp(b))
        });
        matches
    }

    /// Human-readable one-line description of an edge.
    pub fn edge_description(&self, index: EdgeIndex) -> String {
        let edge = &self.edges[index.0];
        let from = &self.stops[edge.from_stop().0];
        let to = &self.stops[edge.to_stop().0];
        match edge.line() {
            Some(line) => format!(
                "from {from} to {to} by {} [{}], {:.0}s / {:.0}m",
                edge.mode(),
                self.lines[line.0].id(),
                edge.time(),
                edge.distance()
            ),
            None => format!(
                "from {from} to {to} by {}, {:.0}s / {:.0}m",
                edge.mode(),
                edge.time(),
                edge.distance()
            ),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Up to 6 stops on a small grid, and lines visiting random stops
    /// with offsets spaced a minute apart.
    fn small_network() -> impl Strategy<Value = (Vec<StopRecord>, Vec<LineRecord>)> {
        (2usize..=6).prop_flat_map(|n| {
            let stops: Vec<StopRecord> = (0..n)
                .map(|i| {
                    StopRecord::new(
                        format!("s{i}").as_str(),
                        format!("Stop {i}"),
                        (i % 3) as f64 * 400.0,
                        (i / 3) as f64 * 400.0,
                    )
                })
                .collect();
            let lines = prop::collection::vec(
                prop::collection::vec(0..n, 2..=4),
                0..=3,
            )
            .prop_map(move |routes| {
                routes
                    .into_iter()
                    .enumerate()
                    .map(|(id, route)| {
                        LineRecord::new(
                            format!("line-{id}").as_str(),
                            TransportMode::Bus,
                            route
                                .into_iter()
                                .enumerate()
                                .map(|(leg, stop)| {
                                    (StopId::new(format!("s{stop}")), leg as u32 * 60)
                                })
                                .collect(),
                        )
                    })
                    .collect::<Vec<_>>()
            });
            (Just(stops), lines)
        })
    }

    proptest! {
        /// neighbour(A) contains B iff neighbour(B) contains A.
        #[test]
        fn neighbours_are_symmetric((stops, lines) in small_network()) {
            let graph = Graph::build(stops, lines).unwrap();
            for (index, stop) in graph.stops().iter().enumerate() {
                for neighbour in stop.neighbours() {
                    prop_assert!(
                        graph.stop(*neighbour).neighbours().contains(&StopIndex(index))
                    );
                }
            }
        }

        /// Recomputing neighbours never changes them.
        #[test]
        fn compute_neighbours_idempotent((stops, lines) in small_network()) {
            let mut graph = Graph::build(stops, lines).unwrap();
            let before: Vec<_> =
                graph.stops().iter().map(|s| s.neighbours().clone()).collect();
            graph.compute_neighbours();
            let after: Vec<_> =
                graph.stops().iter().map(|s| s.neighbours().clone()).collect();
            prop_assert_eq!(before, after);
        }

        /// Every neighbour pair is witnessed by an edge in some direction.
        #[test]
        fn neighbours_match_edge_set((stops, lines) in small_network()) {
            let graph = Graph::build(stops, lines).unwrap();
            for (index, stop) in graph.stops().iter().enumerate() {
                let this = StopIndex(index);
                for neighbour in stop.neighbours() {
                    let witnessed = graph.edges().iter().any(|e| {
                        (e.from_stop() == this && e.to_stop() == *neighbour)
                            || (e.from_stop() == *neighbour && e.to_stop() == this)
                    });
                    prop_assert!(witnessed);
                }
            }
        }

        /// Walking synthesis with the same threshold is structurally
        /// idempotent.
        #[test]
        fn walking_synthesis_idempotent(
            (stops, lines) in small_network(),
            threshold in 0.0f64..1500.0,
        ) {
            let mut graph = Graph::build(stops, lines).unwrap();
            let config = WalkConfig { max_distance_meters: threshold, walking_speed_mps: 1.4 };
            graph.synthesize_walking_edges(&config);
            let first = graph.edges().len();
            graph.synthesize_walking_edges(&config);
            prop_assert_eq!(graph.edges().len(), first);
        }
    }
}
