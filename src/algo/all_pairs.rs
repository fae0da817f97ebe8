//! All-pairs shortest-path distances.
//!
//! Floyd-Warshall is built only atop the matrix representation: it is a
//! dense-table algorithm, and [`AdjMatrix`] already stores exactly the
//! table it starts from.

use crate::{
    core::weight::{Weight, INF},
    storage::AdjMatrix,
};

/// Floyd-Warshall over the matrix representation's weight table.
///
/// Returns the full `vertex_count × vertex_count` distance table without
/// mutating the stored graph; `table[i][j]` is the shortest path weight
/// from `i` to `j`, or [`INF`] when there is none. The classic
/// triple loop considers every vertex `k` as an intermediate hop for every
/// pair `(i, j)`; [`INF`] operands are skipped so unreachable pairs come
/// out as exactly [`INF`].
///
/// Negative edge weights are fine. A negative cycle makes some diagonal
/// entries negative; checking the diagonal is the caller's job, this
/// routine does not detect or report cycles itself.
pub fn floyd_warshall<V>(graph: &AdjMatrix<V>) -> Vec<Vec<Weight>> {
    let mut dist = graph.to_table();
    let n = dist.len();

    for k in 0..n {
        for i in 0..n {
            if dist[i][k] == INF {
                continue;
            }
            for j in 0..n {
                if dist[k][j] == INF {
                    continue;
                }

                let through_k = dist[i][k] + dist[k][j];
                if through_k < dist[i][j] {
                    dist[i][j] = through_k;
                }
            }
        }
    }

    dist
}

#[cfg(test)]
mod tests {
    use crate::{
        algo::shortest_paths::dijkstra,
        core::{GraphStore, INF},
        storage::AdjMatrix,
    };

    use super::*;

    fn create_basic_graph() -> AdjMatrix<()> {
        let mut graph = AdjMatrix::new(4);
        graph
            .extend_with_edges([(0, 1, 1), (1, 2, 2), (0, 2, 4), (2, 3, 1)])
            .unwrap();
        graph
    }

    #[test]
    fn basic_table() {
        let table = floyd_warshall(&create_basic_graph());

        assert_eq!(table[0], vec![0, 1, 3, 4]);
        assert_eq!(table[1], vec![INF, 0, 2, 3]);
        assert_eq!(table[2], vec![INF, INF, 0, 1]);
        assert_eq!(table[3], vec![INF, INF, INF, 0]);
    }

    #[test]
    fn zero_diagonal_without_negative_cycles() {
        let table = floyd_warshall(&create_basic_graph());

        for (i, row) in table.iter().enumerate() {
            assert_eq!(row[i], 0);
        }
    }

    #[test]
    fn matches_dijkstra_per_source() {
        let graph = create_basic_graph();
        let table = floyd_warshall(&graph);

        for start in 0..4 {
            assert_eq!(table[start], dijkstra(&graph, start).unwrap());
        }
    }

    #[test]
    fn negative_edge_shortcut() {
        let mut graph = AdjMatrix::<()>::new(3);
        graph
            .extend_with_edges([(0, 1, 4), (0, 2, 2), (2, 1, -1)])
            .unwrap();

        let table = floyd_warshall(&graph);
        assert_eq!(table[0], vec![0, 1, 2]);
    }

    #[test]
    fn negative_cycle_shows_on_diagonal() {
        let mut graph = AdjMatrix::<()>::new(2);
        graph.extend_with_edges([(0, 1, 1), (1, 0, -3)]).unwrap();

        let table = floyd_warshall(&graph);
        assert!(table[0][0] < 0);
        assert!(table[1][1] < 0);
    }

    #[test]
    fn does_not_mutate_graph() {
        let graph = create_basic_graph();
        let before = graph.clone();

        let _ = floyd_warshall(&graph);

        assert_eq!(graph, before);
    }

    #[test]
    fn empty_graph() {
        assert!(floyd_warshall(&AdjMatrix::<()>::new(0)).is_empty());
    }
}
