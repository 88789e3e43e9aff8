//! Core orchestration for the renketsu library.
//!
//! Provides the [`Renketsu`] runtime entry point: it sizes batches for the
//! target graph, drives the parallel union-find, and renumbers the final
//! structure into dense component assignments.

use std::num::NonZeroUsize;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::cancel::CancellationToken;
use crate::error::Result;
use crate::graph::GraphView;
use crate::partition::adjust_batch_size;
use crate::progress::ProgressSink;
use crate::result::Components;
use crate::wcc::ParallelUnionFind;

/// Entry point for computing weakly-connected components.
///
/// Under cancellation the computation terminates cooperatively and the
/// returned assignments reflect only partial work; treat them as advisory in
/// that case.
///
/// # Examples
/// ```
/// use renketsu_core::{EdgeCursor, GraphError, GraphView, RenketsuBuilder};
///
/// #[derive(Clone)]
/// struct Triangle;
///
/// impl EdgeCursor for Triangle {
///     fn for_each_outgoing<F>(&mut self, node: usize, mut visitor: F) -> Result<(), GraphError>
///     where
///         F: FnMut(usize, usize) -> bool,
///     {
///         // 0-1-2 form a cycle, node 3 is isolated
///         if node < 3 {
///             visitor(node, (node + 1) % 3);
///         }
///         Ok(())
///     }
/// }
///
/// impl GraphView for Triangle {
///     type Edges = Triangle;
///     fn node_count(&self) -> usize { 4 }
///     fn name(&self) -> &str { "triangle" }
///     fn concurrent_copy(&self) -> Triangle { self.clone() }
///     fn weight_of(&self, _source: usize, _target: usize) -> f64 { 1.0 }
/// }
///
/// let renketsu = RenketsuBuilder::new()
///     .with_concurrency(2)
///     .with_min_batch_size(1)
///     .build()
///     .expect("builder must succeed");
/// let components = renketsu.run(&Triangle).expect("run must succeed");
/// assert_eq!(components.component_count(), 2);
/// ```
pub struct Renketsu {
    concurrency: NonZeroUsize,
    min_batch_size: NonZeroUsize,
    threshold: Option<f64>,
    pool: rayon::ThreadPool,
    cancel: CancellationToken,
    progress: Arc<dyn ProgressSink>,
}

impl std::fmt::Debug for Renketsu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renketsu")
            .field("concurrency", &self.concurrency)
            .field("min_batch_size", &self.min_batch_size)
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

impl Renketsu {
    pub(crate) fn new(
        concurrency: NonZeroUsize,
        min_batch_size: NonZeroUsize,
        threshold: Option<f64>,
        pool: rayon::ThreadPool,
        cancel: CancellationToken,
        progress: Arc<dyn ProgressSink>,
    ) -> Self {
        Self {
            concurrency,
            min_batch_size,
            threshold,
            pool,
            cancel,
            progress,
        }
    }

    /// Returns the number of concurrent batch workers.
    #[must_use]
    pub fn concurrency(&self) -> NonZeroUsize {
        self.concurrency
    }

    /// Returns the minimum number of nodes per batch.
    #[must_use]
    pub fn min_batch_size(&self) -> NonZeroUsize {
        self.min_batch_size
    }

    /// Returns the configured weight threshold, if any.
    #[must_use]
    pub fn threshold(&self) -> Option<f64> {
        self.threshold
    }

    /// Returns the cancellation token observed by running computations.
    #[must_use]
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Computes component assignments for the provided [`GraphView`].
    ///
    /// Blocks until the batch and merge regions both finish. An empty graph
    /// yields zero components without error.
    ///
    /// # Errors
    /// Returns [`crate::WccError::Graph`] when edge iteration fails in any
    /// batch worker.
    pub fn run<G: GraphView>(&self, graph: &G) -> Result<Components> {
        let nodes = graph.node_count();
        self.run_with_len(graph, nodes)
    }

    #[instrument(
        name = "core.run",
        err,
        skip(self, graph),
        fields(
            graph = %graph.name(),
            nodes = nodes,
            concurrency = %self.concurrency,
            threshold = ?self.threshold,
        ),
    )]
    fn run_with_len<G: GraphView>(&self, graph: &G, nodes: usize) -> Result<Components> {
        let batch_size = adjust_batch_size(nodes, self.concurrency, self.min_batch_size);
        let mut algo = ParallelUnionFind::new(
            graph,
            &self.pool,
            batch_size,
            self.cancel.clone(),
            Arc::clone(&self.progress),
        );

        let structure = match self.threshold {
            Some(threshold) => algo.compute_with_threshold(threshold)?,
            None => algo.compute()?,
        };

        let components = Components::from_structure(structure);
        debug!(
            components = components.component_count(),
            batch_size = batch_size.get(),
            "computation completed"
        );
        Ok(components)
    }
}
