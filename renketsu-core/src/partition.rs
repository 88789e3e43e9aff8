//! Node-range batching for the parallel computation.
//!
//! The node id space `[0, node_count)` is cut into contiguous batches, one
//! per worker task. The batch size heuristic aims for a batch count
//! proportional to the configured concurrency while never dropping below the
//! caller's minimum, so small graphs do not pay per-task overhead for
//! parallelism they cannot use.

use std::num::NonZeroUsize;

/// A contiguous half-open range `[offset, offset + length)` of node ids
/// assigned to one worker.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Batch {
    /// First node id in the range.
    pub offset: usize,
    /// Number of node ids in the range.
    pub length: usize,
}

impl Batch {
    /// Returns the exclusive end of the range.
    #[must_use]
    pub fn end(&self) -> usize {
        self.offset.saturating_add(self.length)
    }
}

/// Computes the batch size for `node_count` nodes at the given concurrency.
///
/// The result is `max(min_batch_size, ceil(node_count / concurrency))`, so
/// at most `concurrency` batches are produced unless the minimum batch size
/// forces fewer.
#[must_use]
pub fn adjust_batch_size(
    node_count: usize,
    concurrency: NonZeroUsize,
    min_batch_size: NonZeroUsize,
) -> NonZeroUsize {
    let target = node_count.div_ceil(concurrency.get());
    NonZeroUsize::new(target).map_or(min_batch_size, |size| size.max(min_batch_size))
}

/// Cuts `[0, node_count)` into batches of `batch_size` nodes.
///
/// Batches are disjoint, ascending, and cover the range exactly; the last
/// batch may be shorter. `node_count == 0` yields no batches.
#[must_use]
pub fn node_batches(node_count: usize, batch_size: NonZeroUsize) -> Vec<Batch> {
    let size = batch_size.get();
    (0..node_count)
        .step_by(size)
        .map(|offset| Batch {
            offset,
            length: size.min(node_count - offset),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rstest::rstest;
    use std::num::NonZeroUsize;

    use super::{Batch, adjust_batch_size, node_batches};

    fn nz(value: usize) -> NonZeroUsize {
        NonZeroUsize::new(value).expect("test values are non-zero")
    }

    #[rstest]
    #[case::even_split(100, 4, 1, 25)]
    #[case::rounds_up(101, 4, 1, 26)]
    #[case::min_wins(100, 4, 50, 50)]
    #[case::single_thread(100, 1, 1, 100)]
    #[case::empty_graph(0, 4, 10, 10)]
    fn batch_size_heuristic(
        #[case] node_count: usize,
        #[case] concurrency: usize,
        #[case] min_batch_size: usize,
        #[case] expected: usize,
    ) {
        let size = adjust_batch_size(node_count, nz(concurrency), nz(min_batch_size));
        assert_eq!(size.get(), expected);
    }

    #[test]
    fn batches_cover_range_with_short_tail() {
        let batches = node_batches(10, nz(4));
        assert_eq!(
            batches,
            vec![
                Batch { offset: 0, length: 4 },
                Batch { offset: 4, length: 4 },
                Batch { offset: 8, length: 2 },
            ]
        );
    }

    #[test]
    fn empty_graph_yields_no_batches() {
        assert!(node_batches(0, nz(7)).is_empty());
    }

    proptest! {
        /// Batches are disjoint, ordered, and their union is exactly
        /// `[0, node_count)` for any node count and concurrency.
        #[test]
        fn batches_partition_the_node_range(
            node_count in 0_usize..10_000,
            concurrency in 1_usize..64,
            min_batch_size in 1_usize..128,
        ) {
            let size = adjust_batch_size(node_count, nz(concurrency), nz(min_batch_size));
            prop_assert!(size.get() >= min_batch_size);

            let batches = node_batches(node_count, size);
            prop_assert_eq!(
                batches.len(),
                node_count.div_ceil(size.get()),
            );

            let mut expected_offset = 0;
            for batch in &batches {
                prop_assert_eq!(batch.offset, expected_offset);
                prop_assert!(batch.length >= 1);
                expected_offset = batch.end();
            }
            prop_assert_eq!(expected_offset, node_count);
        }
    }
}
