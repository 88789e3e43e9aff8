//! Graph view abstractions consumed by the component computation.
//!
//! The core never owns graph storage. It consumes a read-only [`GraphView`]
//! that can hand out one independent [`EdgeCursor`] per batch worker, so no
//! iteration state is ever shared between threads.

use crate::error::GraphError;

/// Abstraction over an immutable graph with dense node ids `[0, node_count)`.
///
/// # Examples
/// ```
/// use renketsu_core::{EdgeCursor, GraphError, GraphView};
///
/// #[derive(Clone)]
/// struct PairGraph;
///
/// impl EdgeCursor for PairGraph {
///     fn for_each_outgoing<F>(&mut self, node: usize, mut visitor: F) -> Result<(), GraphError>
///     where
///         F: FnMut(usize, usize) -> bool,
///     {
///         // 0 <-> 1, node 2 isolated
///         match node {
///             0 => visitor(0, 1),
///             1 => visitor(1, 0),
///             2 => true,
///             _ => return Err(GraphError::NodeOutOfBounds { node, node_count: 3 }),
///         };
///         Ok(())
///     }
/// }
///
/// impl GraphView for PairGraph {
///     type Edges = PairGraph;
///     fn node_count(&self) -> usize { 3 }
///     fn name(&self) -> &str { "pair" }
///     fn concurrent_copy(&self) -> PairGraph { self.clone() }
///     fn weight_of(&self, _source: usize, _target: usize) -> f64 { 1.0 }
/// }
///
/// let graph = PairGraph;
/// let mut edges = graph.concurrent_copy();
/// let mut seen = Vec::new();
/// edges.for_each_outgoing(0, |s, t| { seen.push((s, t)); true })?;
/// assert_eq!(seen, [(0, 1)]);
/// # Ok::<(), GraphError>(())
/// ```
pub trait GraphView: Send + Sync {
    /// The thread-confined edge iteration view handed to each worker.
    type Edges: EdgeCursor;

    /// Returns the number of nodes in the graph.
    fn node_count(&self) -> usize;

    /// Returns whether the graph contains no nodes.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    /// Returns a human-readable name used in error payloads and spans.
    fn name(&self) -> &str;

    /// Returns an independent edge iteration view.
    ///
    /// Each worker obtains its own copy; implementations must not hand out
    /// views that share mutable cursor state.
    fn concurrent_copy(&self) -> Self::Edges;

    /// Returns the weight of the edge `source -> target`.
    ///
    /// Only consulted by the threshold-filtered variant, and only for pairs
    /// previously yielded by edge iteration. Unweighted graphs report a
    /// uniform default.
    fn weight_of(&self, source: usize, target: usize) -> f64;
}

/// A thread-confined cursor over a graph's outgoing edges.
pub trait EdgeCursor: Send {
    /// Calls `visitor(source, target)` for every outgoing edge of `node`.
    ///
    /// The visitor returns `true` to continue and `false` to stop iterating
    /// the current node's edges early.
    ///
    /// # Errors
    /// Returns a [`GraphError`] when the underlying storage cannot enumerate
    /// the node's edges; the owning worker aborts and the failure surfaces
    /// from the whole computation.
    fn for_each_outgoing<F>(&mut self, node: usize, visitor: F) -> Result<(), GraphError>
    where
        F: FnMut(usize, usize) -> bool;
}
