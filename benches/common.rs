#![allow(dead_code)]

use fastrand::Rng;
use gravel::{core::GraphStore, storage::AdjList};

pub const RANDOM_SEED: u64 = 0x5eed_ca11;

/// Directed random graph with roughly `density * n * (n - 1)` edges and
/// weights in `1..100`.
pub fn random_directed(vertex_count: usize, density: f32, rng: &mut Rng) -> AdjList<()> {
    let mut graph = AdjList::new(vertex_count);

    for from in 0..vertex_count {
        for to in 0..vertex_count {
            if from != to && rng.f32() < density {
                graph
                    .add_edge(from, to, rng.i64(1..100))
                    .expect("vertices are in range by construction");
            }
        }
    }

    graph
}
