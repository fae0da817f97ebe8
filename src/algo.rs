//! Graph algorithms.
//!
//! Every algorithm is a pure read of the current edge state producing a
//! fresh result; none mutates the graph it runs on. All of them run to
//! completion synchronously; there is no cancellation, timeout or
//! partial-result concept.
//!
//! * [`shortest_paths`] – Dijkstra, Bellman-Ford, SPFA and negative-cycle
//!   detection.
//! * [`mst`] – Prim and Kruskal.
//! * [`all_pairs`] – Floyd-Warshall, matrix representation only.

pub mod all_pairs;
pub mod mst;
pub mod shortest_paths;

pub use all_pairs::floyd_warshall;
pub use mst::{kruskal, prim, Mst};
pub use shortest_paths::{bellman_ford, dijkstra, has_negative_cycle, spfa};
