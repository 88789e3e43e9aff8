//! Tests for the `Renketsu` orchestration API.

mod common;

use common::AdjacencyGraph;
use renketsu_core::{CancellationToken, ComponentId, RenketsuBuilder};
use rstest::{fixture, rstest};
use tracing_subscriber::layer::SubscriberExt;

use renketsu_test_support::tracing::RecordingLayer;

#[fixture]
fn two_cliques() -> AdjacencyGraph {
    AdjacencyGraph::undirected(
        5,
        &[(0, 1, 1.0), (0, 2, 1.0), (1, 2, 1.0), (3, 4, 1.0)],
    )
}

fn sizes(assignments: &[ComponentId]) -> Vec<usize> {
    let mut sizes = std::collections::HashMap::new();
    for id in assignments {
        *sizes.entry(id.get()).or_insert(0_usize) += 1;
    }
    let mut sizes: Vec<_> = sizes.into_values().collect();
    sizes.sort_unstable();
    sizes
}

#[rstest]
fn builder_defaults() {
    let builder = RenketsuBuilder::new();
    assert_eq!(builder.concurrency(), 4);
    assert_eq!(builder.min_batch_size(), 10_000);
    assert_eq!(builder.threshold(), None);

    let renketsu = builder.clone().build().expect("defaults valid");
    assert_eq!(renketsu.concurrency().get(), 4);
    assert_eq!(renketsu.min_batch_size().get(), 10_000);
}

#[rstest]
fn run_finds_two_components(two_cliques: AdjacencyGraph) {
    let renketsu = RenketsuBuilder::new()
        .with_concurrency(2)
        .with_min_batch_size(2)
        .build()
        .expect("configuration is valid");

    let components = renketsu.run(&two_cliques).expect("run must succeed");
    assert_eq!(components.component_count(), 2);
    assert_eq!(sizes(components.assignments()), vec![2, 3]);
}

#[rstest]
fn strict_threshold_filters_every_edge(two_cliques: AdjacencyGraph) {
    let renketsu = RenketsuBuilder::new()
        .with_concurrency(2)
        .with_min_batch_size(2)
        .with_threshold(1.0)
        .build()
        .expect("configuration is valid");

    let components = renketsu.run(&two_cliques).expect("run must succeed");
    assert_eq!(components.component_count(), 5);
}

#[rstest]
fn empty_graph_yields_zero_components() {
    let graph = AdjacencyGraph::undirected(0, &[]);
    let renketsu = RenketsuBuilder::new().build().expect("defaults valid");

    let components = renketsu.run(&graph).expect("run must succeed");
    assert_eq!(components.component_count(), 0);
    assert!(components.assignments().is_empty());
}

#[rstest]
fn cancelled_run_returns_identity_without_error(two_cliques: AdjacencyGraph) {
    let token = CancellationToken::new();
    let renketsu = RenketsuBuilder::new()
        .with_concurrency(2)
        .with_min_batch_size(1)
        .with_cancellation(token.clone())
        .build()
        .expect("configuration is valid");
    token.cancel();

    let components = renketsu.run(&two_cliques).expect("cancelled run must not fail");
    assert_eq!(components.component_count(), 5);
}

#[rstest]
fn run_emits_instrumented_span(two_cliques: AdjacencyGraph) {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let _guard = tracing::subscriber::set_default(subscriber);

    let renketsu = RenketsuBuilder::new()
        .with_concurrency(2)
        .with_min_batch_size(2)
        .build()
        .expect("configuration is valid");
    renketsu.run(&two_cliques).expect("run must succeed");

    let spans = layer.spans();
    let run_span = spans
        .iter()
        .find(|span| span.name == "core.run")
        .expect("run must record its span");
    assert_eq!(run_span.fields.get("graph").map(String::as_str), Some("adjacency"));
    assert_eq!(run_span.fields.get("nodes").map(String::as_str), Some("5"));
}
