#![allow(dead_code)]
use rand::{Rng, SeedableRng, rngs::StdRng};

use separator_search::{Graph, Partition, Side, VertexId};

/// A connected random graph on ids `0..n`: a random spanning tree plus `extra` random edges.
pub fn random_graph(n: u32, extra: usize, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pairs = Vec::new();
    for v in 1..n {
        pairs.push((rng.random_range(0..v), v));
    }
    for _ in 0..extra {
        pairs.push((rng.random_range(0..n), rng.random_range(0..n)));
    }
    Graph::from_pairs(pairs)
}

pub const STRATEGIES: [&str; 7] = [
    "random", "dfs", "bfs", "dgr", "inward", "outward", "degree-priority:total-asc",
];

/// Structural checks every finished partition must pass.
pub fn assert_well_formed(partition: &Partition, wardens: &[VertexId]) {
    let graph = partition.graph();
    assert!(partition.is_complete(), "neutral vertices remain");
    assert_eq!(partition.verify(), Ok(()));

    let result = partition.result();
    assert_eq!(result.separator_count() + result.warden_count() + result.opposite_count(), graph.node_count());
    for id in wardens {
        assert!(result.warden_side.contains(id), "warden {id} left the warden side");
    }

    // No warden-side vertex touches the opposite side.
    for node in 0..graph.node_count() {
        if partition.side(node) != Side::Warden { continue }
        for v in graph.edges(node) {
            assert_ne!(partition.side(v), Side::Opposite, "{} touches {}", graph.id(node), graph.id(v));
        }
    }
}
