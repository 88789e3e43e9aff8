//! Edge-list graph provider backed by compressed sparse rows.
use std::{fs::File, path::Path, sync::Arc};

use arrow_array::RecordBatchReader;
use arrow_schema::DataType;
use parquet::arrow::{ProjectionMask, arrow_reader::ParquetRecordBatchReaderBuilder};
use parquet::file::reader::ChunkReader;

use renketsu_core::{EdgeCursor, GraphError, GraphView};

use crate::errors::EdgeListError;
use crate::ingest::{RawEdge, append_edges, column_index, validate_column_type};

/// Weight reported for edges loaded without a weight column.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Immutable adjacency storage shared by the graph and its cursors.
#[derive(Debug)]
struct Csr {
    offsets: Vec<usize>,
    targets: Vec<usize>,
    weights: Option<Vec<f64>>,
}

impl Csr {
    fn node_count(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    fn neighbours(&self, node: usize) -> Option<&[usize]> {
        let start = *self.offsets.get(node)?;
        let end = *self.offsets.get(node + 1)?;
        self.targets.get(start..end)
    }
}

/// Graph over dense node ids built from an explicit edge list.
///
/// Edges are stored directed as given; for weakly-connected component
/// computations the direction is irrelevant because unions are symmetric,
/// so callers only need both directions when other traversals require them.
///
/// # Examples
/// ```
/// use renketsu_providers_edgelist::EdgeListGraph;
/// use renketsu_core::GraphView;
///
/// let graph = EdgeListGraph::from_edges("demo", 3, &[(0, 1), (1, 0)])
///     .expect("edges are in bounds");
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// ```
#[derive(Debug)]
pub struct EdgeListGraph {
    name: String,
    csr: Arc<Csr>,
}

impl EdgeListGraph {
    /// Builds an unweighted graph from `(source, target)` pairs.
    ///
    /// # Errors
    /// Returns [`EdgeListError::NodeOutOfBounds`] when an endpoint is not in
    /// `[0, node_count)`.
    pub fn from_edges(
        name: impl Into<String>,
        node_count: usize,
        edges: &[(usize, usize)],
    ) -> Result<Self, EdgeListError> {
        let raw: Vec<_> = edges
            .iter()
            .map(|&(source, target)| (source, target, None))
            .collect();
        Self::from_parts(name, node_count, &raw, false)
    }

    /// Builds a weighted graph from `(source, target, weight)` triples.
    ///
    /// # Errors
    /// Returns [`EdgeListError::NodeOutOfBounds`] when an endpoint is not in
    /// `[0, node_count)`.
    pub fn from_weighted_edges(
        name: impl Into<String>,
        node_count: usize,
        edges: &[(usize, usize, f64)],
    ) -> Result<Self, EdgeListError> {
        let raw: Vec<_> = edges
            .iter()
            .map(|&(source, target, weight)| (source, target, Some(weight)))
            .collect();
        Self::from_parts(name, node_count, &raw, true)
    }

    /// Loads a graph from a Parquet file of `UInt64` source/target columns
    /// and an optional `Float64` weight column.
    ///
    /// The node count is derived from the largest endpoint seen.
    ///
    /// # Errors
    /// Returns [`EdgeListError`] for missing or mistyped columns, null edge
    /// rows, oversized node ids, and underlying Parquet or I/O failures.
    pub fn try_from_parquet_path(
        name: impl Into<String>,
        path: impl AsRef<Path>,
        source_column: &str,
        target_column: &str,
        weight_column: Option<&str>,
    ) -> Result<Self, EdgeListError> {
        let file = File::open(path)?;
        Self::try_from_parquet_reader(name, file, source_column, target_column, weight_column)
    }

    /// Loads a graph from a Parquet reader.
    ///
    /// # Errors
    /// Returns the same errors as [`Self::try_from_parquet_path`].
    pub fn try_from_parquet_reader<R>(
        name: impl Into<String>,
        reader: R,
        source_column: &str,
        target_column: &str,
        weight_column: Option<&str>,
    ) -> Result<Self, EdgeListError>
    where
        R: ChunkReader + Send + 'static,
    {
        let builder = ParquetRecordBatchReaderBuilder::try_new(reader)?;
        let mut projected: Vec<&str> = vec![source_column, target_column];
        projected.extend(weight_column);
        let mask = ProjectionMask::columns(builder.parquet_schema(), projected);
        let reader = builder.with_projection(mask).build()?;
        let schema = reader.schema();

        let source_index = column_index(&schema, source_column)?;
        let target_index = column_index(&schema, target_column)?;
        validate_column_type(&schema, source_index, source_column, &DataType::UInt64)?;
        validate_column_type(&schema, target_index, target_column, &DataType::UInt64)?;
        let weight_index = weight_column
            .map(|column| {
                let index = column_index(&schema, column)?;
                validate_column_type(&schema, index, column, &DataType::Float64)?;
                Ok::<_, EdgeListError>((index, column))
            })
            .transpose()?;

        let mut raw = Vec::new();
        let mut rows = 0_usize;
        for batch in reader {
            let batch = batch?;
            append_edges(
                &batch,
                (source_index, source_column),
                (target_index, target_column),
                weight_index,
                rows,
                &mut raw,
            )?;
            rows += batch.num_rows();
        }

        let mut edges = Vec::with_capacity(raw.len());
        let mut node_count = 0_usize;
        for RawEdge {
            source,
            target,
            weight,
        } in raw
        {
            let source = narrow_node_id(source)?;
            let target = narrow_node_id(target)?;
            node_count = node_count.max(source + 1).max(target + 1);
            edges.push((source, target, weight));
        }
        Self::from_parts(name, node_count, &edges, weight_column.is_some())
    }

    fn from_parts(
        name: impl Into<String>,
        node_count: usize,
        edges: &[(usize, usize, Option<f64>)],
        weighted: bool,
    ) -> Result<Self, EdgeListError> {
        for &(source, target, _) in edges {
            for node in [source, target] {
                if node >= node_count {
                    return Err(EdgeListError::NodeOutOfBounds { node, node_count });
                }
            }
        }

        let mut offsets = vec![0_usize; node_count + 1];
        for &(source, _, _) in edges {
            offsets[source + 1] += 1;
        }
        for index in 1..offsets.len() {
            offsets[index] += offsets[index - 1];
        }

        let mut cursors = offsets.clone();
        let mut targets = vec![0_usize; edges.len()];
        let mut weights = weighted.then(|| vec![DEFAULT_WEIGHT; edges.len()]);
        for &(source, target, weight) in edges {
            let slot = cursors[source];
            targets[slot] = target;
            if let (Some(values), Some(weight)) = (weights.as_mut(), weight) {
                values[slot] = weight;
            }
            cursors[source] += 1;
        }

        Ok(Self {
            name: name.into(),
            csr: Arc::new(Csr {
                offsets,
                targets,
                weights,
            }),
        })
    }

    /// Returns the number of stored (directed) edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.csr.targets.len()
    }
}

fn narrow_node_id(id: u64) -> Result<usize, EdgeListError> {
    usize::try_from(id).map_err(|_| EdgeListError::NodeIdOverflow { id })
}

/// Thread-confined cursor over the shared adjacency storage.
pub struct EdgeListCursor {
    csr: Arc<Csr>,
}

impl EdgeCursor for EdgeListCursor {
    fn for_each_outgoing<F>(&mut self, node: usize, mut visitor: F) -> Result<(), GraphError>
    where
        F: FnMut(usize, usize) -> bool,
    {
        let neighbours = self
            .csr
            .neighbours(node)
            .ok_or(GraphError::NodeOutOfBounds {
                node,
                node_count: self.csr.node_count(),
            })?;
        for &target in neighbours {
            if !visitor(node, target) {
                break;
            }
        }
        Ok(())
    }
}

impl GraphView for EdgeListGraph {
    type Edges = EdgeListCursor;

    fn node_count(&self) -> usize {
        self.csr.node_count()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn concurrent_copy(&self) -> EdgeListCursor {
        EdgeListCursor {
            csr: Arc::clone(&self.csr),
        }
    }

    fn weight_of(&self, source: usize, target: usize) -> f64 {
        let Some(weights) = self.csr.weights.as_deref() else {
            return DEFAULT_WEIGHT;
        };
        let Some(start) = self.csr.offsets.get(source).copied() else {
            return DEFAULT_WEIGHT;
        };
        let Some(end) = self.csr.offsets.get(source + 1).copied() else {
            return DEFAULT_WEIGHT;
        };
        (start..end)
            .find(|&slot| self.csr.targets.get(slot) == Some(&target))
            .and_then(|slot| weights.get(slot).copied())
            .unwrap_or(DEFAULT_WEIGHT)
    }
}
