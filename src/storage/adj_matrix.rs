use std::fmt;

use crate::core::{
    base::{Edge, Vertex},
    error::IndexOutOfRange,
    graph::GraphStore,
    weight::{Weight, INF},
};

/// Dense adjacency-matrix representation.
///
/// Backed by a flat row-major `vertex_count × vertex_count` table of
/// weights. The diagonal is fixed at 0; every other cell holds either a
/// stored weight or [`INF`] meaning "no edge". Edge lookup is O(1), while
/// enumerating all edges scans the whole table, which bounds this
/// representation to moderate vertex counts. It is the natural home for
/// [Floyd-Warshall](crate::algo::all_pairs::floyd_warshall) and for dense
/// graphs in general.
///
/// The absent-edge sentinel reported by [`edge`](GraphStore::edge) is
/// [`INF`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjMatrix<V> {
    cells: Vec<Weight>,
    vertices: Vec<V>,
    n_edges: usize,
}

impl<V> AdjMatrix<V> {
    /// Creates a graph with `vertex_count` isolated vertices, each labeled
    /// with `V::default()`.
    pub fn new(vertex_count: usize) -> Self
    where
        V: Default,
    {
        let mut cells = vec![INF; vertex_count * vertex_count];
        for v in 0..vertex_count {
            cells[v * vertex_count + v] = 0;
        }

        Self {
            cells,
            vertices: (0..vertex_count).map(|_| V::default()).collect(),
            n_edges: 0,
        }
    }

    /// Copies the weight table as nested rows, diagonal and [`INF`] cells
    /// included.
    pub fn to_table(&self) -> Vec<Vec<Weight>> {
        let n = self.vertices.len();
        if n == 0 {
            return Vec::new();
        }

        self.cells.chunks(n).map(<[Weight]>::to_vec).collect()
    }

    fn cell(&self, row: Vertex, col: Vertex) -> usize {
        row * self.vertices.len() + col
    }

    fn row(&self, row: Vertex) -> &[Weight] {
        let n = self.vertices.len();
        &self.cells[row * n..(row + 1) * n]
    }
}

impl<V> GraphStore<V> for AdjMatrix<V> {
    type EdgesIter<'a>
        = EdgesIter<'a>
    where
        Self: 'a;

    type OutEdgesIter<'a>
        = OutEdgesIter<'a>
    where
        Self: 'a;

    const ABSENT: Weight = INF;

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

        let cell = self.cell(from, to);
        if weight < self.cells[cell] {
            if self.cells[cell] == INF {
                self.n_edges += 1;
            }
            self.cells[cell] = weight;
        }

        Ok(())
    }

    fn remove_edge(&mut self, from: Vertex, to: Vertex) -> Result<(), IndexOutOfRange> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        // The diagonal holds no edges, only the fixed zero distance.
        if from == to {
            return Ok(());
        }

        let cell = self.cell(from, to);
        if self.cells[cell] != INF {
            self.cells[cell] = INF;
            self.n_edges -= 1;
        }

        Ok(())
    }

    fn edge(&self, from: Vertex, to: Vertex) -> Result<Weight, IndexOutOfRange> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        Ok(self.cells[self.cell(from, to)])
    }

    fn neighbors(&self, vertex: Vertex) -> Result<Vec<Vertex>, IndexOutOfRange> {
        self.check_vertex(vertex)?;

        Ok(self.out_edges(vertex).map(|(to, _)| to).collect())
    }

    fn edges(&self) -> Self::EdgesIter<'_> {
        EdgesIter {
            cells: &self.cells,
            vertex_count: self.vertices.len(),
            index: 0,
        }
    }

    fn out_edges(&self, vertex: Vertex) -> Self::OutEdgesIter<'_> {
        OutEdgesIter {
            row: self.row(vertex),
            src: vertex,
            col: 0,
        }
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
impl<V> fmt::Display for AdjMatrix<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for from in 0..self.vertices.len() {
            write!(f, "{from}:")?;
            for (to, weight) in self.out_edges(from) {
                write!(f, " ({to}, {weight})")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub struct EdgesIter<'a> {
    cells: &'a [Weight],
    vertex_count: usize,
    index: usize,
}

impl Iterator for EdgesIter<'_> {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.index == self.cells.len() {
                return None;
            }

            let index = self.index;
            self.index += 1;

            let from = index / self.vertex_count;
            let to = index % self.vertex_count;

            // Diagonal cells hold the fixed zero distance, not edges.
            if from != to && self.cells[index] != INF {
                return Some(Edge::new(from, to, self.cells[index]));
            }
        }
    }
}

pub struct OutEdgesIter<'a> {
    row: &'a [Weight],
    src: Vertex,
    col: usize,
}

impl Iterator for OutEdgesIter<'_> {
    type Item = (Vertex, Weight);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.col == self.row.len() {
                return None;
            }

            let to = self.col;
            self.col += 1;

            if to != self.src && self.row[to] != INF {
                return Some((to, self.row[to]));
            }
        }
    }
}
