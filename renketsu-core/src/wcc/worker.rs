//! Per-batch union-find workers.

use std::sync::Arc;

use crate::cancel::CancellationToken;
use crate::dss::DisjointSetStruct;
use crate::error::{Result, WccError};
use crate::graph::{EdgeCursor, GraphView};
use crate::partition::Batch;
use crate::progress::ProgressSink;

/// One unit of batch work: scans a contiguous node range and unions the
/// endpoints of every outgoing edge into a private structure.
pub(super) struct BatchUnionFind<'graph, G: GraphView> {
    graph: &'graph G,
    edges: G::Edges,
    batch: Batch,
    threshold: Option<f64>,
    cancel: CancellationToken,
    progress: Arc<dyn ProgressSink>,
}

impl<'graph, G: GraphView> BatchUnionFind<'graph, G> {
    pub(super) fn new(
        graph: &'graph G,
        batch: Batch,
        threshold: Option<f64>,
        cancel: CancellationToken,
        progress: Arc<dyn ProgressSink>,
    ) -> Self {
        Self {
            edges: graph.concurrent_copy(),
            graph,
            batch,
            threshold,
            cancel,
            progress,
        }
    }

    /// Runs the scan and hands back the populated structure.
    ///
    /// The cancellation token is polled once per node; a node whose edge
    /// iteration has started is always finished before the flag is honoured,
    /// and the structure populated so far is returned rather than discarded.
    pub(super) fn run(mut self) -> Result<DisjointSetStruct> {
        let node_count = self.graph.node_count();
        let mut structure = DisjointSetStruct::new(node_count);
        let end = self.batch.end().min(node_count);

        let mut node = self.batch.offset;
        while node < end && self.cancel.is_running() {
            self.scan_node(node, &mut structure)?;
            node += 1;
        }

        if node_count > 0 {
            self.progress.log_progress(node as f64 / node_count as f64);
        }
        Ok(structure)
    }

    fn scan_node(&mut self, node: usize, structure: &mut DisjointSetStruct) -> Result<()> {
        let outcome = match self.threshold {
            None => self.edges.for_each_outgoing(node, |source, target| {
                structure.union(source, target);
                true
            }),
            Some(threshold) => {
                let graph = self.graph;
                self.edges.for_each_outgoing(node, |source, target| {
                    // Strictly above the threshold; edges at the threshold
                    // are ignored.
                    if graph.weight_of(source, target) > threshold {
                        structure.union(source, target);
                    }
                    true
                })
            }
        };
        outcome.map_err(|error| WccError::Graph {
            graph: Arc::from(self.graph.name()),
            error,
        })
    }
}
