//! Strongly connected components of the directed edge set.

use tracing::debug;

use crate::domain::{ComponentId, StopIndex};
use crate::graph::Graph;

/// Label every stop with its strongly connected component and return the
/// component count.
///
/// Kosaraju's algorithm: any previous partition is discarded, then a
/// first pass builds a finish-order stack by postorder DFS over outgoing
/// edges, and a second pass pops that stack and labels each still
/// unlabeled stop's backward-reachable set (DFS over incoming edges) with
/// a fresh [`ComponentId`], counting up from 0. Two stops share a label
/// iff each is reachable from the other along directed edges; the label
/// value means nothing beyond equality. The count is also recorded on the
/// graph. Both passes use explicit work-stacks rather than recursion.
pub fn find_components(graph: &mut Graph) -> usize {
    graph.reset_component_labels();

    let stop_count = graph.stops().len();

    // Pass 1: postorder finish stack over outgoing edges.
    let mut visited = vec![false; stop_count];
    let mut finish: Vec<StopIndex> = Vec::with_capacity(stop_count);
    let mut stack: Vec<(StopIndex, usize)> = Vec::new();

    for start in 0..stop_count {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        stack.push((StopIndex(start), 0));

        loop {
            let Some(entry) = stack.last_mut() else { break };
            let (stop, cursor) = *entry;
            let outgoing = graph.stop(stop).outgoing();

            if cursor < outgoing.len() {
                entry.1 += 1;
                let next = graph.edge(outgoing[cursor]).to_stop();
                if !visited[next.0] {
                    visited[next.0] = true;
                    stack.push((next, 0));
                }
            } else {
                finish.push(stop);
                stack.pop();
            }
        }
    }

    // Pass 2: label backward-reachable sets in reverse finish order.
    let mut next_id = 0usize;
    let mut work: Vec<StopIndex> = Vec::new();

    for &seed in finish.iter().rev() {
        if graph.stop(seed).component().is_some() {
            continue;
        }
        let id = ComponentId(next_id);
        next_id += 1;

        graph.assign_component(seed, id);
        work.push(seed);
        while let Some(stop) = work.pop() {
            let incoming = graph.stop(stop).incoming().to_vec();
            for edge in incoming {
                let origin = graph.edge(edge).from_stop();
                if graph.stop(origin).component().is_none() {
                    graph.assign_component(origin, id);
                    work.push(origin);
                }
            }
        }
    }

    graph.set_component_count(next_id);
    debug!(components = next_id, "strongly connected components labeled");
    next_id
}
