use std::fmt;

use crate::core::{
    base::{Edge, Vertex},
    error::IndexOutOfRange,
    graph::GraphStore,
    weight::Weight,
};

/// Sparse adjacency-list representation.
///
/// Backed by a per-vertex vector of `(neighbor, weight)` pairs. Edge
/// lookup is O(degree), edge enumeration is O(V + E), and memory is
/// proportional to the edge count, which makes this the representation of
/// choice for sparse graphs and for algorithms keyed on edge iteration.
///
/// The absent-edge sentinel reported by [`edge`](GraphStore::edge) is `-1`.
/// Note that `-1` is also a representable weight, so a caller storing
/// negative weights cannot distinguish an absent edge from a stored `-1`
/// through [`edge`](GraphStore::edge) alone.
///
/// The simplest insertion policy for this backing store appends
/// unconditionally, which makes duplicate insertions for the same ordered
/// pair visible as separate entries. This implementation instead searches
/// and merges by minimum weight, keeping the edge-uniqueness behavior
/// identical across both representations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjList<V> {
    adj: Vec<Vec<(Vertex, Weight)>>,
    vertices: Vec<V>,
    n_edges: usize,
}

impl<V> AdjList<V> {
    /// Creates a graph with `vertex_count` isolated vertices, each labeled
    /// with `V::default()`.
    pub fn new(vertex_count: usize) -> Self
    where
        V: Default,
    {
        Self {
            adj: (0..vertex_count).map(|_| Vec::new()).collect(),
            vertices: (0..vertex_count).map(|_| V::default()).collect(),
            n_edges: 0,
        }
    }
}

impl<V> GraphStore<V> for AdjList<V> {
    type EdgesIter<'a>
        = EdgesIter<'a>
    where
        Self: 'a;

    type OutEdgesIter<'a>
        = std::iter::Copied<std::slice::Iter<'a, (Vertex, Weight)>>
    where
        Self: 'a;

    const ABSENT: Weight = -1;

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.n_edges
    }

    fn add_edge(
        &mut self,
        from: Vertex,
        to: Vertex,
        weight: Weight,
    ) -> Result<(), IndexOutOfRange> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        if from == to {
            return Ok(());
        }

        match self.adj[from].iter_mut().find(|(next, _)| *next == to) {
            Some((_, existing)) => *existing = (*existing).min(weight),
            None => {
                self.adj[from].push((to, weight));
                self.n_edges += 1;
            }
        }

        Ok(())
    }

    fn remove_edge(&mut self, from: Vertex, to: Vertex) -> Result<(), IndexOutOfRange> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        let before = self.adj[from].len();
        self.adj[from].retain(|(next, _)| *next != to);
        self.n_edges -= before - self.adj[from].len();

        Ok(())
    }

    fn edge(&self, from: Vertex, to: Vertex) -> Result<Weight, IndexOutOfRange> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        let weight = self.adj[from]
            .iter()
            .find(|(next, _)| *next == to)
            .map(|(_, weight)| *weight)
            .unwrap_or(Self::ABSENT);

        Ok(weight)
    }

    fn neighbors(&self, vertex: Vertex) -> Result<Vec<Vertex>, IndexOutOfRange> {
        self.check_vertex(vertex)?;

        Ok(self.adj[vertex].iter().map(|(next, _)| *next).collect())
    }

    fn edges(&self) -> Self::EdgesIter<'_> {
        EdgesIter {
            adj: &self.adj,
            from: 0,
            pos: 0,
        }
    }

    fn out_edges(&self, vertex: Vertex) -> Self::OutEdgesIter<'_> {
        self.adj[vertex].iter().copied()
    }

    fn vertex(&self, vertex: Vertex) -> Result<&V, IndexOutOfRange> {
        self.check_vertex(vertex)?;
        Ok(&self.vertices[vertex])
    }

    fn vertex_mut(&mut self, vertex: Vertex) -> Result<&mut V, IndexOutOfRange> {
        self.check_vertex(vertex)?;
        Ok(&mut self.vertices[vertex])
    }
}

/// Debugging dump in `vertex: (neighbor, weight) ...` lines. Not a stable
/// format.
impl<V> fmt::Display for AdjList<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (from, edges) in self.adj.iter().enumerate() {
            write!(f, "{from}:")?;
            for (to, weight) in edges {
                write!(f, " ({to}, {weight})")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub struct EdgesIter<'a> {
    adj: &'a [Vec<(Vertex, Weight)>],
    from: Vertex,
    pos: usize,
}

impl Iterator for EdgesIter<'_> {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.from == self.adj.len() {
                return None;
            }

            match self.adj[self.from].get(self.pos) {
                Some(&(to, weight)) => {
                    self.pos += 1;
                    return Some(Edge::new(self.from, to, weight));
                }
                None => {
                    self.from += 1;
                    self.pos = 0;
                }
            }
        }
    }
}
