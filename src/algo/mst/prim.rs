use fixedbitset::FixedBitSet;

use crate::core::{
    base::Edge,
    graph::GraphStore,
    weight::INF,
};

use super::Mst;

/// Prim's algorithm: grows the tree from vertex 0.
///
/// Keeps, per non-tree vertex, the cheapest known weight connecting it to
/// the tree and the tree-side endpoint of that weight. Each of the
/// `vertex_count` steps selects the cheapest non-tree vertex with a naive
/// O(V) scan (no heap), admits it, and relaxes its neighbors' keys. When
/// no selectable vertex is left before the tree spans the graph, the input
/// is disconnected and the [`Mst::disconnected`] sentinel is returned.
///
/// Assumes an undirected graph, i.e. both orientations of every edge
/// stored.
pub fn prim<V, G>(graph: &G) -> Mst
where
    G: GraphStore<V>,
{
    let n = graph.vertex_count();

    let mut key = vec![INF; n];
    let mut parent = vec![0; n];
    let mut in_tree = FixedBitSet::with_capacity(n);

    let mut edges = Vec::with_capacity(n.saturating_sub(1));
    let mut total_weight = 0;

    if let Some(root) = key.first_mut() {
        *root = 0;
    }

    for _ in 0..n {
        let mut vertex = None;
        for candidate in 0..n {
            if in_tree.contains(candidate) || key[candidate] == INF {
                continue;
            }
            match vertex {
                Some(best) if key[best] <= key[candidate] => {}
                _ => vertex = Some(candidate),
            }
        }

        // Every remaining vertex is unreachable from the tree built so
        // far.
        let Some(vertex) = vertex else {
            return Mst::disconnected();
        };

        in_tree.insert(vertex);
        if vertex != 0 {
            total_weight += key[vertex];
            edges.push(Edge::new(parent[vertex], vertex, key[vertex]));
        }

        for (next, weight) in graph.out_edges(vertex) {
            if !in_tree.contains(next) && weight < key[next] {
                key[next] = weight;
                parent[next] = vertex;
            }
        }
    }

    Mst {
        total_weight,
        edges,
    }
}
