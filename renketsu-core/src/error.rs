//! Error types for the renketsu core library.
//!
//! Defines the error enums exposed by the public API and a convenient result
//! alias. Cancellation is deliberately absent from the taxonomy: it is a
//! cooperative termination path that yields a partial result, not a failure.

use std::sync::Arc;

use thiserror::Error;

/// An error produced by [`crate::GraphView`] edge iteration.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// Iteration was requested for a node id the graph does not contain.
    #[error("node {node} is out of bounds for a graph of {node_count} nodes")]
    NodeOutOfBounds {
        /// The requested node id.
        node: usize,
        /// The number of nodes the graph holds.
        node_count: usize,
    },
}

impl GraphError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> GraphErrorCode {
        match self {
            Self::NodeOutOfBounds { .. } => GraphErrorCode::NodeOutOfBounds,
        }
    }
}

/// Machine-readable error codes for [`GraphError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum GraphErrorCode {
    /// Iteration was requested for a node id the graph does not contain.
    NodeOutOfBounds,
}

impl GraphErrorCode {
    /// Returns the symbolic identifier for logging and metrics surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NodeOutOfBounds => "GRAPH_NODE_OUT_OF_BOUNDS",
        }
    }
}

/// Error type produced when configuring or running the computation.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum WccError {
    /// Concurrency must be at least one.
    #[error("concurrency must be at least 1 (got {got})")]
    InvalidConcurrency {
        /// The invalid concurrency supplied by the caller.
        got: usize,
    },
    /// The minimum batch size must be at least one.
    #[error("min_batch_size must be at least 1 (got {got})")]
    InvalidBatchSize {
        /// The invalid minimum batch size supplied by the caller.
        got: usize,
    },
    /// The weight threshold must be a finite number.
    #[error("threshold must be finite (got {got})")]
    InvalidThreshold {
        /// The non-finite threshold supplied by the caller.
        got: f64,
    },
    /// The bounded worker pool could not be constructed.
    #[error("worker pool construction failed: {message}")]
    Scheduler {
        /// Description reported by the pool builder.
        message: Arc<str>,
    },
    /// A [`crate::GraphView`] operation failed while scanning a batch.
    #[error("graph `{graph}` failed during edge iteration: {error}")]
    Graph {
        /// Identifier of the graph that produced the error.
        graph: Arc<str>,
        /// Underlying iteration error bubbled up by a batch worker.
        #[source]
        error: GraphError,
    },
}

impl WccError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> WccErrorCode {
        match self {
            Self::InvalidConcurrency { .. } => WccErrorCode::InvalidConcurrency,
            Self::InvalidBatchSize { .. } => WccErrorCode::InvalidBatchSize,
            Self::InvalidThreshold { .. } => WccErrorCode::InvalidThreshold,
            Self::Scheduler { .. } => WccErrorCode::Scheduler,
            Self::Graph { .. } => WccErrorCode::Graph,
        }
    }

    /// Retrieve the inner [`GraphErrorCode`] when the error originated in a
    /// [`crate::GraphView`].
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph { error, .. } => Some(error.code()),
            _ => None,
        }
    }
}

/// Machine-readable error codes for [`WccError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum WccErrorCode {
    /// Concurrency must be at least one.
    InvalidConcurrency,
    /// The minimum batch size must be at least one.
    InvalidBatchSize,
    /// The weight threshold must be a finite number.
    InvalidThreshold,
    /// The bounded worker pool could not be constructed.
    Scheduler,
    /// A graph operation failed while scanning a batch.
    Graph,
}

impl WccErrorCode {
    /// Returns the symbolic identifier for logging and metrics surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidConcurrency => "WCC_INVALID_CONCURRENCY",
            Self::InvalidBatchSize => "WCC_INVALID_BATCH_SIZE",
            Self::InvalidThreshold => "WCC_INVALID_THRESHOLD",
            Self::Scheduler => "WCC_SCHEDULER",
            Self::Graph => "WCC_GRAPH_FAILURE",
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, WccError>;
