//! A small graph-algorithms engine: a fixed-vertex-count vertex/edge model
//! exposed through two interchangeable storage representations (the dense
//! [`AdjMatrix`](storage::AdjMatrix) and the sparse
//! [`AdjList`](storage::AdjList)), plus the classical algorithms operating
//! on the shared [`GraphStore`](core::GraphStore) contract: single-source
//! shortest paths, negative-cycle detection, minimum spanning trees and
//! all-pairs shortest paths.

pub mod algo;
pub mod common;
pub mod core;
pub mod storage;

pub mod prelude {
    #[doc(hidden)]
    pub use crate::{
        algo::{
            bellman_ford, dijkstra, floyd_warshall, has_negative_cycle, kruskal, prim, spfa, Mst,
        },
        core::{Edge, GraphStore, IndexOutOfRange, Vertex, Weight, INF},
        storage::{AdjList, AdjMatrix},
    };
}
