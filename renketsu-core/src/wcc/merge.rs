//! Fork/join reduction of per-batch structures.

use crate::cancel::CancellationToken;
use crate::dss::DisjointSetStruct;

/// Reduces the collected partial structures into one.
///
/// Recursive divide and conquer: a pair is split off and merged while the
/// remainder merges concurrently via [`rayon::join`], building a merge tree
/// of depth `O(log k)` on the global work-stealing pool. Each recursion owns
/// a disjoint vector of structures, so no collection is shared across the
/// forked branches, and a panic in the forked half resurfaces at the join
/// point.
///
/// Returns `None` for an empty collection. When cancellation is observed at
/// a recursion step, one arbitrary structure is returned and the rest are
/// dropped unmerged; the result then reflects only partial work.
pub(super) fn parallel_merge(
    mut structs: Vec<DisjointSetStruct>,
    cancel: &CancellationToken,
) -> Option<DisjointSetStruct> {
    if structs.len() <= 1 || !cancel.is_running() {
        return structs.pop();
    }
    if structs.len() == 2 {
        let right = structs.pop()?;
        let left = structs.pop()?;
        return Some(left.merge_from(right));
    }

    let pair = structs.split_off(structs.len() - 2);
    let (rest, pair) = rayon::join(
        || parallel_merge(structs, cancel),
        || parallel_merge(pair, cancel),
    );
    match (rest, pair) {
        (Some(left), Some(right)) => Some(left.merge_from(right)),
        (left, right) => left.or(right),
    }
}
