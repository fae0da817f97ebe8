//! The two graph representations.
//!
//! A _storage_ implements the [`GraphStore`](crate::core::GraphStore)
//! contract, so the algorithms in [`algo`](crate::algo) run on either.
//! The choice is a space/time trade-off:
//!
//! |               | **[AdjList]** | **[AdjMatrix]** |
//! |---------------|---------------|-----------------|
//! | add edge      | _O(d)_        | _O(1)_          |
//! | lookup edge   | _O(d)_        | _O(1)_          |
//! | remove edge   | _O(d)_        | _O(1)_          |
//! | enumerate edges | _O(V + E)_  | _O(V²)_         |
//! | space         | _O(V + E)_    | _O(V²)_         |
//!
//! * _V_ – vertex count
//! * _E_ – edge count
//! * _d_ – vertex out-degree
//!
//! The representations also differ in the sentinel their
//! [`edge`](crate::core::GraphStore::edge) reports for an absent edge; see
//! the documentation of each type.

pub mod adj_list;
pub mod adj_matrix;

pub use adj_list::AdjList;
pub use adj_matrix::AdjMatrix;

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::core::{Edge, GraphStore, IndexOutOfRange};

    // The contract must not depend on the backing representation. These
    // helpers are exercised by both storage implementations, each called
    // with a fresh 4-vertex graph.

    pub fn test_merge_min<G: GraphStore<()>>(mut graph: G) {
        graph.add_edge(0, 1, 5).unwrap();
        assert_eq!(graph.edge(0, 1), Ok(5));

        // A smaller weight replaces the stored one.
        graph.add_edge(0, 1, 3).unwrap();
        assert_eq!(graph.edge(0, 1), Ok(3));

        // A larger weight does not degrade the stored shortcut.
        graph.add_edge(0, 1, 7).unwrap();
        assert_eq!(graph.edge(0, 1), Ok(3));

        assert_eq!(graph.edge_count(), 1);
    }

    pub fn test_self_loop_noop<G: GraphStore<()>>(mut graph: G) {
        let before = graph.edge(1, 1).unwrap();

        graph.add_edge(1, 1, 5).unwrap();

        assert_eq!(graph.edge(1, 1), Ok(before));
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.edges().count(), 0);
        assert!(graph.neighbors(1).unwrap().is_empty());
    }

    pub fn test_remove_edge<G: GraphStore<()>>(mut graph: G) {
        graph.add_edge(0, 1, 5).unwrap();
        graph.add_edge(1, 2, 7).unwrap();

        graph.remove_edge(0, 1).unwrap();

        assert_eq!(graph.edge(0, 1), Ok(G::ABSENT));
        assert_eq!(graph.edge(1, 2), Ok(7));
        assert_eq!(graph.edge_count(), 1);

        // Removing a non-existent edge is a silent no-op.
        graph.remove_edge(2, 3).unwrap();
        assert_eq!(graph.edge_count(), 1);
    }

    pub fn test_out_of_range<G: GraphStore<i32>>(mut graph: G) {
        let oob = IndexOutOfRange {
            vertex: 4,
            bound: 4,
        };

        assert_matches!(graph.add_edge(4, 0, 1), Err(e) if e == oob);
        assert_matches!(graph.add_edge(0, 4, 1), Err(e) if e == oob);
        assert_matches!(graph.remove_edge(4, 0), Err(e) if e == oob);
        assert_matches!(graph.edge(0, 4), Err(e) if e == oob);
        assert_matches!(graph.neighbors(4), Err(e) if e == oob);
        assert_matches!(graph.vertex(4), Err(e) if e == oob);
        assert_matches!(graph.vertex_mut(4), Err(e) if e == oob);
        assert_matches!(graph.set_vertex(4, 1), Err(e) if e == oob);

        // Nothing was clamped into range.
        assert_eq!(graph.edge_count(), 0);
    }

    pub fn test_neighbors_and_edges<G: GraphStore<()>>(mut graph: G) {
        graph
            .extend_with_edges([(0, 1, 1), (0, 2, 2), (2, 1, 3)])
            .unwrap();

        let mut neighbors = graph.neighbors(0).unwrap();
        neighbors.sort_unstable();
        assert_eq!(neighbors, vec![1, 2]);
        assert!(graph.neighbors(1).unwrap().is_empty());

        let mut edges = graph.edges().collect::<Vec<_>>();
        edges.sort_unstable_by_key(|edge| (edge.from, edge.to));
        assert_eq!(
            edges,
            vec![Edge::new(0, 1, 1), Edge::new(0, 2, 2), Edge::new(2, 1, 3)]
        );

        assert_eq!(graph.edge_count(), 3);
        assert_eq!(
            graph.out_edges(0).count() + graph.out_edges(1).count() + graph.out_edges(2).count(),
            3
        );
    }

    pub fn test_vertex_labels<G: GraphStore<i32>>(mut graph: G) {
        // Labels start at the type's default value.
        assert_eq!(graph.vertex(0), Ok(&0));

        graph.set_vertex(1, 42).unwrap();
        assert_eq!(graph.vertex(1), Ok(&42));

        *graph.vertex_mut(1).unwrap() += 1;
        assert_eq!(graph.vertex(1), Ok(&43));
    }
}
