use thiserror::Error;

use crate::core::base::Vertex;

/// A vertex argument was outside `[0, vertex_count)`.
///
/// Raised by every operation taking a vertex argument; out-of-range
/// vertices are never silently clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("vertex {vertex} out of range for graph with {bound} vertices")]
pub struct IndexOutOfRange {
    /// The offending vertex argument.
    pub vertex: Vertex,
    /// The vertex count of the graph that rejected it.
    pub bound: usize,
}
