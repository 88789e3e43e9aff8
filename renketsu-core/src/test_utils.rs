//! Shared helpers for in-crate tests.

use std::collections::HashMap;
use std::sync::Arc;

use crate::dss::DisjointSetStruct;
use crate::error::GraphError;
use crate::graph::{EdgeCursor, GraphView};

/// Canonical labelling of the induced partition: nodes get dense labels in
/// first-seen order, so two structures induce the same partition iff their
/// canonical labellings are equal.
pub(crate) fn canonical_partition(dss: &DisjointSetStruct) -> Vec<usize> {
    let mut labels = Vec::with_capacity(dss.capacity());
    let mut by_root = HashMap::new();
    for node in 0..dss.capacity() {
        let root = dss.set_id_of(node);
        let next = by_root.len();
        labels.push(*by_root.entry(root).or_insert(next));
    }
    labels
}

/// In-memory adjacency-list graph with per-edge weights.
#[derive(Clone)]
pub(crate) struct VecGraph {
    name: &'static str,
    adjacency: Arc<Vec<Vec<(usize, f64)>>>,
}

impl VecGraph {
    pub(crate) fn weighted(node_count: usize, edges: &[(usize, usize, f64)]) -> Self {
        let mut adjacency = vec![Vec::new(); node_count];
        for &(source, target, weight) in edges {
            adjacency[source].push((target, weight));
        }
        Self {
            name: "vec-graph",
            adjacency: Arc::new(adjacency),
        }
    }

    pub(crate) fn unweighted(node_count: usize, edges: &[(usize, usize)]) -> Self {
        let weighted: Vec<_> = edges
            .iter()
            .map(|&(source, target)| (source, target, 1.0))
            .collect();
        Self::weighted(node_count, &weighted)
    }

    /// Adds both directions of every edge, as a graph store with
    /// bidirectional relationships would.
    pub(crate) fn undirected(node_count: usize, edges: &[(usize, usize, f64)]) -> Self {
        let mut both = Vec::with_capacity(edges.len() * 2);
        for &(source, target, weight) in edges {
            both.push((source, target, weight));
            both.push((target, source, weight));
        }
        Self::weighted(node_count, &both)
    }
}

pub(crate) struct VecCursor {
    adjacency: Arc<Vec<Vec<(usize, f64)>>>,
}

impl EdgeCursor for VecCursor {
    fn for_each_outgoing<F>(&mut self, node: usize, mut visitor: F) -> Result<(), GraphError>
    where
        F: FnMut(usize, usize) -> bool,
    {
        let neighbours = self.adjacency.get(node).ok_or(GraphError::NodeOutOfBounds {
            node,
            node_count: self.adjacency.len(),
        })?;
        for &(target, _) in neighbours {
            if !visitor(node, target) {
                break;
            }
        }
        Ok(())
    }
}

impl GraphView for VecGraph {
    type Edges = VecCursor;

    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn name(&self) -> &str {
        self.name
    }

    fn concurrent_copy(&self) -> VecCursor {
        VecCursor {
            adjacency: Arc::clone(&self.adjacency),
        }
    }

    fn weight_of(&self, source: usize, target: usize) -> f64 {
        self.adjacency
            .get(source)
            .and_then(|neighbours| {
                neighbours
                    .iter()
                    .find(|(candidate, _)| *candidate == target)
            })
            .map_or(1.0, |&(_, weight)| weight)
    }
}

/// Graph whose cursor fails when asked to iterate `fail_at`.
#[derive(Clone)]
pub(crate) struct FailingGraph {
    inner: VecGraph,
    fail_at: usize,
}

impl FailingGraph {
    pub(crate) fn new(inner: VecGraph, fail_at: usize) -> Self {
        Self { inner, fail_at }
    }
}

pub(crate) struct FailingCursor {
    inner: VecCursor,
    fail_at: usize,
    node_count: usize,
}

impl EdgeCursor for FailingCursor {
    fn for_each_outgoing<F>(&mut self, node: usize, visitor: F) -> Result<(), GraphError>
    where
        F: FnMut(usize, usize) -> bool,
    {
        if node == self.fail_at {
            return Err(GraphError::NodeOutOfBounds {
                node,
                node_count: self.node_count,
            });
        }
        self.inner.for_each_outgoing(node, visitor)
    }
}

impl GraphView for FailingGraph {
    type Edges = FailingCursor;

    fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    fn name(&self) -> &str {
        "failing-graph"
    }

    fn concurrent_copy(&self) -> FailingCursor {
        FailingCursor {
            inner: self.inner.concurrent_copy(),
            fail_at: self.fail_at,
            node_count: self.inner.node_count(),
        }
    }

    fn weight_of(&self, source: usize, target: usize) -> f64 {
        self.inner.weight_of(source, target)
    }
}
