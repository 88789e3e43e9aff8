use arrow_schema::{ArrowError, DataType};
use thiserror::Error;

/// Errors raised while building an edge-list graph.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EdgeListError {
    /// A requested column is missing from the Parquet schema.
    #[error("column `{column}` not found in Parquet schema")]
    ColumnNotFound {
        /// Name of the missing column.
        column: String,
    },
    /// A column has an unexpected Arrow type.
    #[error("column `{column}` must be {expected:?} but found {actual:?}")]
    InvalidColumnType {
        /// Name of the offending column.
        column: String,
        /// The Arrow type the provider requires.
        expected: DataType,
        /// The Arrow type found in the schema.
        actual: DataType,
    },
    /// An edge row contains a null endpoint or weight.
    #[error("edge row {row} contains a null value")]
    NullEdge {
        /// Zero-based row index across all batches.
        row: usize,
    },
    /// An edge references a node id outside `[0, node_count)`.
    #[error("edge references node {node}, but node_count is {node_count}")]
    NodeOutOfBounds {
        /// The out-of-range node id.
        node: usize,
        /// The number of nodes in the graph.
        node_count: usize,
    },
    /// A node id does not fit the host pointer width.
    #[error("node id {id} exceeds the host pointer width")]
    NodeIdOverflow {
        /// The oversized raw id.
        id: u64,
    },
    /// Arrow-level failure while decoding record batches.
    #[error("arrow error: {0}")]
    Arrow(#[from] ArrowError),
    /// Parquet-level failure while reading the file.
    #[error("parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),
    /// I/O failure while opening the file.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
