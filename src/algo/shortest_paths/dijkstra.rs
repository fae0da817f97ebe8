use std::{cmp::Reverse, collections::BinaryHeap};

use fixedbitset::FixedBitSet;

use crate::core::{
    base::Vertex,
    error::IndexOutOfRange,
    graph::GraphStore,
    weight::{Weight, INF},
};

/// Dijkstra's algorithm for single-source shortest paths.
///
/// Returns a distance for every vertex, [`INF`] for the unreachable ones.
///
/// Requires all edge weights to be non-negative. This precondition is a
/// documented contract, not a runtime check: on a graph with negative
/// weights the call still returns, but the distances may be wrong. Use
/// [`bellman_ford`](super::bellman_ford) or [`spfa`](super::spfa) there.
///
/// The frontier is a binary heap keyed by tentative distance. Relaxing a
/// vertex that is already in the heap pushes a duplicate entry instead of
/// updating the priority; the visited check below discards the stale ones,
/// which is what makes each vertex finalized exactly once.
pub fn dijkstra<V, G>(graph: &G, start: Vertex) -> Result<Vec<Weight>, IndexOutOfRange>
where
    G: GraphStore<V>,
{
    graph.check_vertex(start)?;

    let n = graph.vertex_count();

    let mut dist = vec![INF; n];
    let mut visited = FixedBitSet::with_capacity(n);
    let mut queue = BinaryHeap::new();

    dist[start] = 0;
    queue.push(Reverse((0, start)));

    while let Some(Reverse((vertex_dist, vertex))) = queue.pop() {
        // Stale entry from a relaxation that was later improved.
        if visited.contains(vertex) {
            continue;
        }
        visited.insert(vertex);

        for (next, weight) in graph.out_edges(vertex) {
            if visited.contains(next) {
                continue;
            }

            let next_dist = vertex_dist + weight;
            if next_dist < dist[next] {
                dist[next] = next_dist;
                queue.push(Reverse((next_dist, next)));
            }
        }
    }

    Ok(dist)
}
