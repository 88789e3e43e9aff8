//! Benchmark support: seeded random graph generation.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use renketsu_providers_edgelist::{EdgeListError, EdgeListGraph};

/// Generates a random graph with `node_count` nodes and `edge_count`
/// undirected edges, stored in both directions.
///
/// The same seed always yields the same graph, so benchmark runs are
/// comparable across invocations.
///
/// # Errors
/// Returns [`EdgeListError`] when the underlying provider rejects the
/// generated edges.
pub fn random_graph(
    node_count: usize,
    edge_count: usize,
    seed: u64,
) -> Result<EdgeListGraph, EdgeListError> {
    if node_count == 0 {
        return EdgeListGraph::from_edges("random", 0, &[]);
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut edges = Vec::with_capacity(edge_count * 2);
    for _ in 0..edge_count {
        let source = rng.gen_range(0..node_count);
        let target = rng.gen_range(0..node_count);
        edges.push((source, target));
        edges.push((target, source));
    }
    EdgeListGraph::from_edges("random", node_count, &edges)
}
