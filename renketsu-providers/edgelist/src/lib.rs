//! Edge-list graph provider for the renketsu core runtime.
//!
//! Builds immutable CSR adjacency from in-memory edge lists or from Parquet
//! files carrying `UInt64` source/target columns and an optional `Float64`
//! weight column, and exposes it through [`renketsu_core::GraphView`].

mod errors;
mod ingest;
mod provider;

pub use crate::{
    errors::EdgeListError,
    provider::{DEFAULT_WEIGHT, EdgeListCursor, EdgeListGraph},
};
