//! Minimum spanning tree construction.
//!
//! Two constructions with the same result shape: [`prim`] grows a tree
//! vertex by vertex, [`kruskal`] admits globally cheapest edges under a
//! union-find component check. On a connected input both report the same
//! total weight; the admitted edge sets may differ when equal weights
//! leave room for choice. Both assume an undirected graph, i.e. every edge
//! inserted in both orientations, e.g. via
//! [`add_edge_undirected`](crate::core::GraphStore::add_edge_undirected).
//!
//! A disconnected input is a normal outcome, reported through the
//! [`Mst::disconnected`] sentinel rather than an error.
//!
//! # Examples
//!
//! ```
//! use gravel::{algo::{kruskal, prim}, core::GraphStore, storage::AdjList};
//!
//! let mut graph = AdjList::<()>::new(4);
//! for (u, v, w) in [(0, 1, 1), (1, 2, 2), (0, 2, 4), (2, 3, 1)] {
//!     graph.add_edge_undirected(u, v, w).unwrap();
//! }
//!
//! let tree = kruskal(&graph);
//! assert_eq!(tree.total_weight, 4);
//! assert_eq!(tree.total_weight, prim(&graph).total_weight);
//! ```

use crate::core::{base::Edge, weight::Weight};

mod kruskal;
mod prim;

pub use kruskal::kruskal;
pub use prim::prim;

/// Total weight reported when no spanning tree exists.
pub const NO_SPANNING_TREE: Weight = -1;

/// A minimum spanning tree: the admitted edges and their total weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mst {
    /// Sum of the admitted edge weights, or [`NO_SPANNING_TREE`] for a
    /// disconnected input.
    pub total_weight: Weight,
    /// The admitted edges, `vertex_count - 1` of them on success and none
    /// for a disconnected input.
    pub edges: Vec<Edge>,
}

impl Mst {
    /// The "no spanning tree exists" sentinel: `(NO_SPANNING_TREE, [])`.
    pub fn disconnected() -> Self {
        Self {
            total_weight: NO_SPANNING_TREE,
            edges: Vec::new(),
        }
    }

    /// Whether this is the [`disconnected`](Mst::disconnected) sentinel.
    pub fn is_disconnected(&self) -> bool {
        self.total_weight == NO_SPANNING_TREE && self.edges.is_empty()
    }
}
