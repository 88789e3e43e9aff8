//! Renketsu core library.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod cancel;
mod dss;
mod error;
mod graph;
mod partition;
mod progress;
mod renketsu;
mod result;
#[cfg(test)]
mod test_utils;
mod wcc;

pub use crate::{
    builder::{DEFAULT_CONCURRENCY, DEFAULT_MIN_BATCH_SIZE, RenketsuBuilder},
    cancel::CancellationToken,
    dss::DisjointSetStruct,
    error::{GraphError, GraphErrorCode, Result, WccError, WccErrorCode},
    graph::{EdgeCursor, GraphView},
    partition::{Batch, adjust_batch_size, node_batches},
    progress::{LogProgress, ProgressSink},
    renketsu::Renketsu,
    result::{ComponentId, Components},
    wcc::ParallelUnionFind,
};
