use crate::core::{
    base::Vertex,
    error::IndexOutOfRange,
    graph::GraphStore,
    weight::{Weight, INF},
};

/// Bellman-Ford algorithm for single-source shortest paths.
///
/// Returns a distance for every vertex, [`INF`] for the unreachable ones.
/// Negative edge weights are supported; negative cycles are not detected
/// here (see [`has_negative_cycle`](super::has_negative_cycle)), they
/// merely leave the affected distances at whatever the last round produced.
///
/// Performs `steps` rounds of full-edge-list relaxation; `None` means
/// `vertex_count - 1`, the number of rounds needed to propagate any
/// shortest path in a graph without negative cycles. A smaller bound
/// limits the result to paths of at most `steps` edges. Each round relaxes
/// against a snapshot of the previous round's distances, so the edge order
/// within a round cannot affect the round's outcome.
pub fn bellman_ford<V, G>(
    graph: &G,
    start: Vertex,
    steps: Option<usize>,
) -> Result<Vec<Weight>, IndexOutOfRange>
where
    G: GraphStore<V>,
{
    graph.check_vertex(start)?;

    let n = graph.vertex_count();
    let steps = steps.unwrap_or(n.saturating_sub(1));

    let mut dist = vec![INF; n];
    dist[start] = 0;

    for _ in 0..steps {
        let prev = dist.clone();
        let mut relaxed = false;

        for edge in graph.edges() {
            // Never relax from an unknown distance; unreachable vertices
            // must come out as exactly INF even with negative edges around.
            if prev[edge.from] == INF {
                continue;
            }

            let next_dist = prev[edge.from] + edge.weight;
            if next_dist < dist[edge.to] {
                dist[edge.to] = next_dist;
                relaxed = true;
            }
        }

        // If no distance improved, subsequent rounds would not improve
        // either.
        if !relaxed {
            break;
        }
    }

    Ok(dist)
}
