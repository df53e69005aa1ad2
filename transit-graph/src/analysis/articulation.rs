//! Articulation points of the undirected neighbour view.
//!
//! An articulation point (cut vertex) is a stop whose removal increases
//! the number of connected sub-graphs. Detection runs independently per
//! connected sub-graph with a depth/reach-back DFS. The traversals use
//! explicit work-stacks rather than recursion, so deep networks cannot
//! exhaust the call stack.

use std::collections::BTreeSet;

use crate::domain::StopIndex;
use crate::graph::Graph;

/// Partition the stops into connected sub-graphs over the undirected
/// neighbour view.
///
/// Every stop appears in exactly one sub-graph; an isolated stop forms a
/// singleton. Requires the neighbour sets to be current, which the graph
/// maintains across structural changes.
pub fn connected_subgraphs(graph: &Graph) -> Vec<Vec<StopIndex>> {
    let stop_count = graph.stops().len();
    let mut seen = vec![false; stop_count];
    let mut subgraphs = Vec::new();

    for root in 0..stop_count {
        if seen[root] {
            continue;
        }
        seen[root] = true;
        let mut members = Vec::new();
        let mut stack = vec![StopIndex(root)];
        while let Some(stop) = stack.pop() {
            members.push(stop);
            for &neighbour in graph.stop(stop).neighbours() {
                if !seen[neighbour.0] {
                    seen[neighbour.0] = true;
                    stack.push(neighbour);
                }
            }
        }
        subgraphs.push(members);
    }

    subgraphs
}

/// One DFS frame: a stop, the stop it was entered from, its depth, and a
/// cursor into its neighbour list.
struct Frame {
    stop: StopIndex,
    parent: StopIndex,
    depth: usize,
    neighbours: Vec<StopIndex>,
    cursor: usize,
}

impl Frame {
    fn new(graph: &Graph, stop: StopIndex, parent: StopIndex, depth: usize) -> Self {
        Self {
            stop,
            parent,
            depth,
            neighbours: graph.stop(stop).neighbours().iter().copied().collect(),
            cursor: 0,
        }
    }
}

/// Find every articulation point in the graph.
///
/// For each connected sub-graph, a DFS from an arbitrary root assigns
/// increasing depths and computes reach-back values: the shallowest depth
/// a subtree reaches via a back-edge, ignoring the edge to its immediate
/// parent. A non-root stop is an articulation point iff some child
/// subtree's reach-back is at least the stop's own depth (the subtree
/// cannot get above the stop without going through it); the root is one
/// iff its DFS spawns more than one independent subtree. Isolated stops
/// and leaves are never articulation points.
pub fn find_articulation_points(graph: &Graph) -> BTreeSet<StopIndex> {
    let stop_count = graph.stops().len();
    let mut depth: Vec<Option<usize>> = vec![None; stop_count];
    let mut reach_back = vec![0usize; stop_count];
    let mut points = BTreeSet::new();

    for subgraph in connected_subgraphs(graph) {
        let root = subgraph[0];
        depth[root.0] = Some(0);
        let mut root_subtrees = 0;

        let first_neighbours: Vec<StopIndex> =
            graph.stop(root).neighbours().iter().copied().collect();
        for first in first_neighbours {
            if depth[first.0].is_some() {
                continue;
            }
            root_subtrees += 1;
            explore_subtree(graph, root, first, &mut depth, &mut reach_back, &mut points);
        }

        if root_subtrees > 1 {
            points.insert(root);
        }
    }

    points
}

/// Iterative DFS of one subtree hanging off `root`, marking articulation
/// points among the subtree's internal stops.
fn explore_subtree(
    graph: &Graph,
    root: StopIndex,
    first: StopIndex,
    depth: &mut [Option<usize>],
    reach_back: &mut [usize],
    points: &mut BTreeSet<StopIndex>,
) {
    depth[first.0] = Some(1);
    reach_back[first.0] = 1;
    let mut stack = vec![Frame::new(graph, first, root, 1)];

    loop {
        let Some(frame) = stack.last_mut() else { break };

        if frame.cursor < frame.neighbours.len() {
            let neighbour = frame.neighbours[frame.cursor];
            frame.cursor += 1;
            if neighbour == frame.parent {
                continue;
            }
            let (stop, stop_depth) = (frame.stop, frame.depth);
            match depth[neighbour.0] {
                // Back-edge: the subtree reaches that depth directly.
                Some(seen_depth) => {
                    reach_back[stop.0] = reach_back[stop.0].min(seen_depth);
                }
                None => {
                    let child_depth = stop_depth + 1;
                    depth[neighbour.0] = Some(child_depth);
                    reach_back[neighbour.0] = child_depth;
                    stack.push(Frame::new(graph, neighbour, stop, child_depth));
                }
            }
        } else {
            // Subtree below this stop is complete; fold its reach-back
            // into the parent and test the cut condition there.
            let Some(finished) = stack.pop() else { break };
            if let Some(parent) = stack.last_mut() {
                let child_reach = reach_back[finished.stop.0];
                reach_back[parent.stop.0] = reach_back[parent.stop.0].min(child_reach);
                if child_reach >= parent.depth {
                    points.insert(parent.stop);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LineRecord, StopId, StopRecord, TransportMode};

    fn build(stop_ids: &[&str], routes: &[&[&str]]) -> Graph {
        let stops = stop_ids
            .iter()
            .enumerate()
            .map(|(i, id)| {
                StopRecord::new(*id, format!("Stop {id}"), (i % 4) as f64 * 200.0, (i / 4) as f64 * 200.0)
            })
            .collect();
        let lines = routes
            .iter()
            .enumerate()
            .map(|(index, route)| {
                LineRecord::new(
                    format!("line-{index}").as_str(),
                    TransportMode::Bus,
                    route
                        .iter()
                        .enumerate()
                        .map(|(leg, stop)| (StopId::from(*stop), leg as u32 * 60))
                        .collect(),
                )
            })
            .collect();
        Graph::build(stops, lines).unwrap()
    }

    fn points_of(graph: &Graph) -> BTreeSet<StopIndex> {
        find_articulation_points(graph)
    }

    #[test]
    fn path_graph_interior_stops_are_cut_vertices() {
        let graph = build(&["a", "b", "c", "d"], &[&["a", "b", "c", "d"]]);
        let points = points_of(&graph);
        assert_eq!(
            points,
            BTreeSet::from([StopIndex(1), StopIndex(2)])
        );
    }

    #[test]
    fn cycle_has_no_cut_vertices() {
        let graph = build(&["a", "b", "c", "d"], &[&["a", "b", "c", "d", "a"]]);
        assert!(points_of(&graph).is_empty());
    }

    #[test]
    fn isolated_stops_and_leaves_are_never_cut_vertices() {
        let graph = build(&["a", "b", "lonely"], &[&["a", "b"]]);
        assert!(points_of(&graph).is_empty());
    }

    #[test]
    fn star_center_is_the_only_cut_vertex() {
        let graph = build(
            &["hub", "p", "q", "r"],
            &[&["p", "hub"], &["q", "hub"], &["r", "hub"]],
        );
        assert_eq!(points_of(&graph), BTreeSet::from([StopIndex(0)]));
    }

    #[test]
    fn bridge_endpoints_between_two_cycles() {
        // Two triangles joined by the single edge c - d.
        let graph = build(
            &["a", "b", "c", "d", "e", "f"],
            &[
                &["a", "b", "c", "a"],
                &["d", "e", "f", "d"],
                &["c", "d"],
            ],
        );
        assert_eq!(
            points_of(&graph),
            BTreeSet::from([StopIndex(2), StopIndex(3)])
        );
    }

    #[test]
    fn results_are_unions_over_disjoint_subgraphs() {
        let graph = build(
            &["a", "b", "c", "x", "y", "z"],
            &[&["a", "b", "c"], &["x", "y", "z"]],
        );
        assert_eq!(
            points_of(&graph),
            BTreeSet::from([StopIndex(1), StopIndex(4)])
        );
    }

    #[test]
    fn subgraph_partition_covers_every_stop_once() {
        let graph = build(
            &["a", "b", "c", "x", "y", "lonely"],
            &[&["a", "b", "c"], &["x", "y"]],
        );
        let subgraphs = connected_subgraphs(&graph);
        assert_eq!(subgraphs.len(), 3);

        let mut all: Vec<StopIndex> = subgraphs.into_iter().flatten().collect();
        all.sort();
        assert_eq!(all, (0..6).map(StopIndex).collect::<Vec<_>>());
    }

    #[test]
    fn direction_of_line_edges_does_not_matter() {
        // One-way edges still connect stops in the undirected view.
        let graph = build(&["a", "b", "c"], &[&["c", "b", "a"]]);
        assert_eq!(points_of(&graph), BTreeSet::from([StopIndex(1)]));
    }
}
