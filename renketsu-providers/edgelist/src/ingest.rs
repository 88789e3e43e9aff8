//! Helpers for decoding edge columns from Arrow record batches.

use arrow_array::{Array, Float64Array, RecordBatch, UInt64Array};
use arrow_schema::{DataType, Schema};

use crate::errors::EdgeListError;

/// One decoded edge row before CSR assembly.
pub(crate) struct RawEdge {
    pub(crate) source: u64,
    pub(crate) target: u64,
    pub(crate) weight: Option<f64>,
}

pub(crate) fn column_index(schema: &Schema, column: &str) -> Result<usize, EdgeListError> {
    schema
        .index_of(column)
        .map_err(|_| EdgeListError::ColumnNotFound {
            column: column.to_owned(),
        })
}

pub(crate) fn validate_column_type(
    schema: &Schema,
    index: usize,
    column: &str,
    expected: &DataType,
) -> Result<(), EdgeListError> {
    let actual = schema.field(index).data_type();
    if actual == expected {
        Ok(())
    } else {
        Err(EdgeListError::InvalidColumnType {
            column: column.to_owned(),
            expected: expected.clone(),
            actual: actual.clone(),
        })
    }
}

fn u64_column<'a>(
    batch: &'a RecordBatch,
    index: usize,
    column: &str,
) -> Result<&'a UInt64Array, EdgeListError> {
    batch
        .column(index)
        .as_any()
        .downcast_ref::<UInt64Array>()
        .ok_or_else(|| EdgeListError::InvalidColumnType {
            column: column.to_owned(),
            expected: DataType::UInt64,
            actual: batch.column(index).data_type().clone(),
        })
}

fn f64_column<'a>(
    batch: &'a RecordBatch,
    index: usize,
    column: &str,
) -> Result<&'a Float64Array, EdgeListError> {
    batch
        .column(index)
        .as_any()
        .downcast_ref::<Float64Array>()
        .ok_or_else(|| EdgeListError::InvalidColumnType {
            column: column.to_owned(),
            expected: DataType::Float64,
            actual: batch.column(index).data_type().clone(),
        })
}

/// Decodes one record batch worth of edges, appending to `out`.
///
/// `start_row` is the absolute row offset of the batch, used so null
/// diagnostics point at the right row of the file.
pub(crate) fn append_edges(
    batch: &RecordBatch,
    source: (usize, &str),
    target: (usize, &str),
    weight: Option<(usize, &str)>,
    start_row: usize,
    out: &mut Vec<RawEdge>,
) -> Result<(), EdgeListError> {
    let sources = u64_column(batch, source.0, source.1)?;
    let targets = u64_column(batch, target.0, target.1)?;
    let weights = weight
        .map(|(index, column)| f64_column(batch, index, column))
        .transpose()?;

    out.reserve(batch.num_rows());
    for row_index in 0..batch.num_rows() {
        let absolute_row = start_row + row_index;
        if sources.is_null(row_index) || targets.is_null(row_index) {
            return Err(EdgeListError::NullEdge { row: absolute_row });
        }
        let weight_value = match weights {
            Some(values) => {
                if values.is_null(row_index) {
                    return Err(EdgeListError::NullEdge { row: absolute_row });
                }
                Some(values.value(row_index))
            }
            None => None,
        };
        out.push(RawEdge {
            source: sources.value(row_index),
            target: targets.value(row_index),
            weight: weight_value,
        });
    }
    Ok(())
}
