//! Parallel weakly-connected components via partitioned union-find.
//!
//! The computation builds on the observation that a disjoint-set structure
//! can be populated from just a partition of the nodes and the partial
//! structures then merged pairwise. Batch workers run on a bounded pool
//! supplied by the caller while the merge tree runs as recursive fork/join
//! on the global rayon pool, which distributes merge tasks better than a
//! serial accumulator would.

mod merge;
mod worker;

use std::num::NonZeroUsize;
use std::sync::Arc;

use rayon::prelude::*;

use crate::cancel::CancellationToken;
use crate::dss::DisjointSetStruct;
use crate::error::Result;
use crate::graph::GraphView;
use crate::partition::node_batches;
use crate::progress::ProgressSink;

use self::merge::parallel_merge;
use self::worker::BatchUnionFind;

/// Parallel union-find over a partition of the node id space.
///
/// Each batch worker owns a private, full-sized [`DisjointSetStruct`] and a
/// private edge cursor; populated structures are handed off by move to the
/// merge stage, which consumes two owned structures at a time until one
/// remains. The final structure is held by this object until taken or
/// released.
///
/// Most callers use [`crate::Renketsu::run`]; this type is the lower-level
/// surface for drivers that manage their own worker pool.
pub struct ParallelUnionFind<'a, G: GraphView> {
    graph: &'a G,
    pool: &'a rayon::ThreadPool,
    batch_size: NonZeroUsize,
    cancel: CancellationToken,
    progress: Arc<dyn ProgressSink>,
    structure: Option<DisjointSetStruct>,
}

impl<'a, G: GraphView> ParallelUnionFind<'a, G> {
    /// Creates the algorithm object over `graph`, scheduling batch workers
    /// on `pool`.
    pub fn new(
        graph: &'a G,
        pool: &'a rayon::ThreadPool,
        batch_size: NonZeroUsize,
        cancel: CancellationToken,
        progress: Arc<dyn ProgressSink>,
    ) -> Self {
        Self {
            graph,
            pool,
            batch_size,
            cancel,
            progress,
            structure: None,
        }
    }

    /// Computes components from every outgoing edge.
    ///
    /// Blocks until the batch region and the merge region both finish. An
    /// empty graph yields an empty structure. Under cancellation the
    /// returned structure reflects partial work.
    ///
    /// # Errors
    /// Returns [`crate::WccError::Graph`] when any worker's edge iteration
    /// fails; the failure is never swallowed.
    pub fn compute(&mut self) -> Result<&DisjointSetStruct> {
        self.compute_inner(None)
    }

    /// Computes components from edges whose weight strictly exceeds
    /// `threshold`.
    ///
    /// # Errors
    /// Returns [`crate::WccError::Graph`] when any worker's edge iteration
    /// fails.
    pub fn compute_with_threshold(&mut self, threshold: f64) -> Result<&DisjointSetStruct> {
        self.compute_inner(Some(threshold))
    }

    fn compute_inner(&mut self, threshold: Option<f64>) -> Result<&DisjointSetStruct> {
        let partials = self.run_batches(threshold)?;
        let merged = parallel_merge(partials, &self.cancel)
            .unwrap_or_else(|| DisjointSetStruct::new(self.graph.node_count()));
        Ok(self.structure.insert(merged))
    }

    /// Runs one worker per batch on the bounded pool, blocking until every
    /// worker has finished, then hands the populated structures back in
    /// batch order. A failed worker short-circuits the collection and its
    /// siblings' structures are discarded.
    fn run_batches(&self, threshold: Option<f64>) -> Result<Vec<DisjointSetStruct>> {
        let batches = node_batches(self.graph.node_count(), self.batch_size);
        self.pool.install(|| {
            batches
                .into_par_iter()
                .map(|batch| {
                    BatchUnionFind::new(
                        self.graph,
                        batch,
                        threshold,
                        self.cancel.clone(),
                        Arc::clone(&self.progress),
                    )
                    .run()
                })
                .collect()
        })
    }

    /// Returns the structure held from the most recent computation.
    #[must_use]
    pub fn structure(&self) -> Option<&DisjointSetStruct> {
        self.structure.as_ref()
    }

    /// Transfers ownership of the held structure to the caller.
    #[must_use]
    pub fn take_structure(&mut self) -> Option<DisjointSetStruct> {
        self.structure.take()
    }

    /// Drops the held structure so its memory can be reclaimed.
    pub fn release(&mut self) {
        self.structure = None;
    }
}
