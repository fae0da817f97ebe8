//! Single-source shortest-path distances.
//!
//! Three algorithms with the same calling shape and the same result: a
//! dense `Vec<Weight>` of length `vertex_count`, indexed by vertex, with
//! [`INF`](crate::core::INF) for every vertex the start cannot reach.
//! Their contracts differ:
//!
//! * [`dijkstra`] – the fastest of the three; requires non-negative
//!   weights (documented, not checked).
//! * [`bellman_ford`] – bounded rounds of full-edge-list relaxation;
//!   handles negative weights, and the round count can be capped to limit
//!   results to short paths.
//! * [`spfa`] – queue-driven relaxation; handles negative weights and
//!   usually beats Bellman-Ford on sparse graphs, but diverges on a
//!   reachable negative cycle.
//!
//! [`has_negative_cycle`] is the bounded detector to consult when negative
//! cycles cannot be ruled out; none of the distance functions reports them.
//!
//! # Examples
//!
//! ```
//! use gravel::{algo::dijkstra, core::GraphStore, storage::AdjList};
//!
//! let mut graph = AdjList::<()>::new(4);
//! graph
//!     .extend_with_edges([(0, 1, 1), (1, 2, 2), (0, 2, 4), (2, 3, 1)])
//!     .unwrap();
//!
//! let dist = dijkstra(&graph, 0).unwrap();
//! assert_eq!(dist, vec![0, 1, 3, 4]);
//! ```

mod bellman_ford;
mod dijkstra;
mod spfa;

pub use bellman_ford::bellman_ford;
pub use dijkstra::dijkstra;
pub use spfa::{has_negative_cycle, spfa};
