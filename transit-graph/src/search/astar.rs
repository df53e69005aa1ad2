//! A* search over the directed edge set.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use tracing::debug;

use crate::domain::{Edge, EdgeIndex, StopId, StopIndex};
use crate::graph::Graph;

use super::config::CostModel;

/// A candidate partial path on the search frontier: the stop it reaches,
/// the edge it arrived by (`None` only for the start entry), the
/// accumulated cost, and the estimated total cost through this stop.
#[derive(Debug, Clone)]
struct PathItem {
    stop: StopIndex,
    edge: Option<EdgeIndex>,
    cost: f64,
    estimate: f64,
}

/// Frontier order: lowest estimate first. Ties break on lower accumulated
/// cost, then lower stop index, so equal-cost searches pop in a defined
/// order rather than one that depends on heap internals.
impl Ord for PathItem {
    fn cmp(&self, other: &Self) -> Ordering {
        self.estimate
            .total_cmp(&other.estimate)
            .then(self.cost.total_cmp(&other.cost))
            .then(self.stop.cmp(&other.stop))
    }
}

impl PartialOrd for PathItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for PathItem {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PathItem {}

/// An ordered list of edges from a start stop to a goal stop.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    edges: Vec<EdgeIndex>,
    total_cost: f64,
}

impl Path {
    /// The edges in travel order. Empty when start and goal coincide.
    pub fn edges(&self) -> &[EdgeIndex] {
        &self.edges
    }

    /// Total cost under the metric the search ran with.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Resolve the edge indices against the graph that produced them.
    pub fn resolve<'g>(&self, graph: &'g Graph) -> Vec<&'g Edge> {
        self.edges.iter().map(|&edge| graph.edge(edge)).collect()
    }
}

/// Find a least-cost path between two stops.
///
/// Classic A* over directed edges: a min-priority frontier ordered by
/// accumulated cost plus heuristic, a visited set of finalized stops, and
/// a back-pointer per stop recording the edge that first finalized it.
/// Popping an already-finalized stop skips the stale duplicate entry.
///
/// Returns `None` when either id is not in the graph or the goal is
/// unreachable; both are normal outcomes, not errors. When start and goal
/// coincide the path is empty with zero cost.
pub fn find_shortest_path(
    graph: &Graph,
    start: &StopId,
    goal: &StopId,
    model: &CostModel,
) -> Option<Path> {
    let start = graph.stop_index(start)?;
    let goal = graph.stop_index(goal)?;

    let stop_count = graph.stops().len();
    let mut visited = vec![false; stop_count];
    let mut back_pointer: Vec<Option<EdgeIndex>> = vec![None; stop_count];

    let mut frontier = BinaryHeap::new();
    frontier.push(Reverse(PathItem {
        stop: start,
        edge: None,
        cost: 0.0,
        estimate: model.heuristic(graph.stop(start), graph.stop(goal)),
    }));

    while let Some(Reverse(item)) = frontier.pop() {
        if visited[item.stop.0] {
            continue;
        }
        visited[item.stop.0] = true;
        back_pointer[item.stop.0] = item.edge;

        if item.stop == goal {
            let edges = reconstruct(graph, start, goal, &back_pointer);
            debug!(edges = edges.len(), cost = item.cost, "path found");
            return Some(Path {
                edges,
                total_cost: item.cost,
            });
        }

        for &edge_index in graph.stop(item.stop).outgoing() {
            let edge = graph.edge(edge_index);
            let next = edge.to_stop();
            if visited[next.0] {
                continue;
            }
            let cost = item.cost + model.edge_cost(edge);
            let estimate = cost + model.heuristic(graph.stop(next), graph.stop(goal));
            frontier.push(Reverse(PathItem {
                stop: next,
                edge: Some(edge_index),
                cost,
                estimate,
            }));
        }
    }

    debug!("frontier exhausted without reaching goal");
    None
}

/// Walk the back-pointers from goal to start and reverse into travel
/// order.
fn reconstruct(
    graph: &Graph,
    start: StopIndex,
    goal: StopIndex,
    back_pointer: &[Option<EdgeIndex>],
) -> Vec<EdgeIndex> {
    let mut edges = Vec::new();
    let mut current = goal;
    while current != start {
        match back_pointer[current.0] {
            Some(edge) => {
                edges.push(edge);
                current = graph.edge(edge).from_stop();
            }
            // Every finalized stop but the start has a back-pointer.
            None => break,
        }
    }
    edges.reverse();
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LineRecord, StopRecord, TransportMode};

    fn id(s: &str) -> StopId {
        StopId::from(s)
    }

    fn abc_graph() -> Graph {
        Graph::build(
            vec![
                StopRecord::new("a", "A", 0.0, 0.0),
                StopRecord::new("b", "B", 300.0, 400.0),
                StopRecord::new("c", "C", 600.0, 800.0),
            ],
            vec![LineRecord::new(
                "bus-1",
                TransportMode::Bus,
                vec![(id("a"), 0), (id("b"), 5), (id("c"), 12)],
            )],
        )
        .unwrap()
    }

    #[test]
    fn follows_the_line_and_sums_times() {
        let graph = abc_graph();
        let path = find_shortest_path(&graph, &id("a"), &id("c"), &CostModel::time()).unwrap();

        let edges = path.resolve(&graph);
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].from_stop(), StopIndex(0));
        assert_eq!(edges[0].to_stop(), StopIndex(1));
        assert_eq!(edges[1].from_stop(), StopIndex(1));
        assert_eq!(edges[1].to_stop(), StopIndex(2));
        approx::assert_relative_eq!(path.total_cost(), 12.0);
    }

    #[test]
    fn missing_stop_is_no_path() {
        let graph = abc_graph();
        let model = CostModel::distance();
        assert!(find_shortest_path(&graph, &id("nowhere"), &id("c"), &model).is_none());
        assert!(find_shortest_path(&graph, &id("a"), &id("nowhere"), &model).is_none());
    }

    #[test]
    fn unreachable_goal_is_no_path() {
        // Edges run a -> b -> c only; nothing leads back.
        let graph = abc_graph();
        let model = CostModel::distance();
        assert!(find_shortest_path(&graph, &id("c"), &id("a"), &model).is_none());
    }

    #[test]
    fn edgeless_graph_has_no_path() {
        let graph = Graph::build(
            vec![
                StopRecord::new("a", "A", 0.0, 0.0),
                StopRecord::new("b", "B", 10.0, 0.0),
            ],
            vec![],
        )
        .unwrap();
        assert!(find_shortest_path(&graph, &id("a"), &id("b"), &CostModel::distance()).is_none());
    }

    #[test]
    fn start_equals_goal_is_empty_path() {
        let graph = abc_graph();
        let path = find_shortest_path(&graph, &id("b"), &id("b"), &CostModel::time()).unwrap();
        assert!(path.edges().is_empty());
        assert_eq!(path.total_cost(), 0.0);
    }
}
