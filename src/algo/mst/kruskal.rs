use crate::{common::UnionFind, core::graph::GraphStore};

use super::Mst;

/// Kruskal's algorithm: edge sort plus union-find.
///
/// Collects all stored edges, sorts them ascending by weight (the order
/// among equal weights is unspecified; it can change which edges are
/// chosen, never the total weight), and admits an edge exactly when its
/// endpoints sit in different components. The construction succeeds when
/// `vertex_count - 1` edges are admitted; anything less means the input is
/// disconnected and the [`Mst::disconnected`] sentinel is returned.
///
/// Assumes an undirected graph, i.e. both orientations of every edge
/// stored; the reverse orientation of an admitted edge lands in an
/// already-joined component and is skipped.
pub fn kruskal<V, G>(graph: &G) -> Mst
where
    G: GraphStore<V>,
{
    let n = graph.vertex_count();

    let mut edges = graph.edges().collect::<Vec<_>>();
    edges.sort_by_key(|edge| edge.weight);

    let mut components = UnionFind::new(n);
    let mut admitted = Vec::with_capacity(n.saturating_sub(1));
    let mut total_weight = 0;

    for edge in edges {
        if components.union(edge.from, edge.to) {
            total_weight += edge.weight;
            admitted.push(edge);
        }
    }

    if admitted.len() == n.saturating_sub(1) {
        Mst {
            total_weight,
            edges: admitted,
        }
    } else {
        Mst::disconnected()
    }
}
