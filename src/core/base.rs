use crate::core::weight::Weight;

/// Vertex identifier, valid in `[0, vertex_count)` of its graph.
///
/// Vertices are never created or destroyed after graph construction; the
/// vertex count is fixed for the lifetime of a graph instance.
pub type Vertex = usize;

/// Directed weighted connection between two vertices.
///
/// An undirected graph is modeled by storing both orientations of every
/// edge (see
/// [`add_edge_undirected`](crate::core::graph::GraphStore::add_edge_undirected)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: Vertex,
    pub to: Vertex,
    pub weight: Weight,
}

impl Edge {
    pub fn new(from: Vertex, to: Vertex, weight: Weight) -> Self {
        Self { from, to, weight }
    }
}
