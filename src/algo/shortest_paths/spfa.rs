use std::collections::VecDeque;

use fixedbitset::FixedBitSet;

use crate::core::{
    base::Vertex,
    error::IndexOutOfRange,
    graph::GraphStore,
    weight::{Weight, INF},
};

/// Shortest Path Faster Algorithm, a queue-driven Bellman-Ford variant.
///
/// Returns a distance for every vertex, [`INF`] for the unreachable ones.
/// Negative edge weights are supported, and on typical sparse graphs the
/// queue discipline converges faster than the full-edge-list rounds of
/// [`bellman_ford`](super::bellman_ford).
///
/// Must not be run on a graph with a negative cycle reachable from
/// `start`: without a relaxation-count bound the queue never drains. Use
/// [`has_negative_cycle`] first when the input cannot be trusted.
pub fn spfa<V, G>(graph: &G, start: Vertex) -> Result<Vec<Weight>, IndexOutOfRange>
where
    G: GraphStore<V>,
{
    graph.check_vertex(start)?;

    let n = graph.vertex_count();

    let mut dist = vec![INF; n];
    let mut in_queue = FixedBitSet::with_capacity(n);
    let mut queue = VecDeque::new();

    dist[start] = 0;
    queue.push_back(start);
    in_queue.insert(start);

    while let Some(vertex) = queue.pop_front() {
        in_queue.set(vertex, false);

        for (next, weight) in graph.out_edges(vertex) {
            let next_dist = dist[vertex] + weight;
            if next_dist < dist[next] {
                dist[next] = next_dist;

                if !in_queue.contains(next) {
                    in_queue.insert(next);
                    queue.push_back(next);
                }
            }
        }
    }

    Ok(dist)
}

/// Detects whether a negative cycle is reachable anywhere in the graph.
///
/// Seeds every vertex into the relaxation queue at distance 0 (the same
/// as running [`spfa`] from a virtual source connected to all vertices by
/// zero-weight edges) and counts, per vertex, the number of edges on its
/// current best path. A best path can have at most `vertex_count - 1`
/// edges, so a count reaching `vertex_count` proves that relaxation went
/// around a cycle with negative total weight. Runs to quiescence or to the
/// threshold, whichever comes first.
pub fn has_negative_cycle<V, G>(graph: &G) -> bool
where
    G: GraphStore<V>,
{
    let n = graph.vertex_count();

    let mut dist: Vec<Weight> = vec![0; n];
    let mut path_len = vec![0usize; n];
    let mut in_queue = FixedBitSet::with_capacity(n);
    let mut queue: VecDeque<Vertex> = (0..n).collect();
    in_queue.insert_range(..);

    while let Some(vertex) = queue.pop_front() {
        in_queue.set(vertex, false);

        for (next, weight) in graph.out_edges(vertex) {
            let next_dist = dist[vertex] + weight;
            if next_dist < dist[next] {
                dist[next] = next_dist;
                path_len[next] = path_len[vertex] + 1;

                if path_len[next] >= n {
                    return true;
                }

                if !in_queue.contains(next) {
                    in_queue.insert(next);
                    queue.push_back(next);
                }
            }
        }
    }

    false
}
