//! Multi-key stable sort

use std::cmp::Ordering;

use rayon::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::selector::{KeySelector, SortDirection};
use crate::value::Value;

/// Inputs at or above this length sort on the worker pool.
const PAR_SORT_THRESHOLD: usize = 8192;

/// Sort `items` by one or more keys, each with its own direction.
///
/// Missing trailing directions default to ascending. Keys are projected
/// exactly once per item before sorting begins, so callback selectors are
/// never re-invoked per comparison. The sort is stable: items whose full
/// key tuples compare equal keep their original relative order. A failing
/// callback selector aborts the call with no partial result.
pub fn order_by(
    items: &[Value],
    selectors: &[KeySelector],
    directions: &[SortDirection],
) -> Result<Vec<Value>> {
    if selectors.is_empty() {
        // Trivially sorted: nothing to compare on
        return Ok(items.to_vec());
    }

    // Precompute the key tuple for every item up front. This is the
    // performance-critical step; everything after is plain comparisons.
    let mut keyed: Vec<(Vec<Value>, Value)> = Vec::with_capacity(items.len());
    for item in items {
        let keys = selectors
            .iter()
            .map(|s| s.project(item))
            .collect::<Result<Vec<Value>>>()?;
        keyed.push((keys, item.clone()));
    }

    let cmp = |a: &(Vec<Value>, Value), b: &(Vec<Value>, Value)| -> Ordering {
        for (i, (ka, kb)) in a.0.iter().zip(b.0.iter()).enumerate() {
            let mut ord = ka.compare(kb);
            if direction_for(directions, i) == SortDirection::Desc {
                ord = ord.reverse();
            }
            if ord != Ordering::Equal {
                return ord;
            }
        }
        // Equal tuples: stability keeps input order
        Ordering::Equal
    };

    // Both sorts are stable merge sorts, so the parallel path cannot
    // reorder equal-key items.
    if keyed.len() >= PAR_SORT_THRESHOLD {
        debug!(len = keyed.len(), "sorting on the worker pool");
        keyed.par_sort_by(cmp);
    } else {
        keyed.sort_by(cmp);
    }

    Ok(keyed.into_iter().map(|(_, item)| item).collect())
}

/// Direction paired with selector `i`; absent trailing entries are ascending.
fn direction_for(directions: &[SortDirection], i: usize) -> SortDirection {
    directions.get(i).copied().unwrap_or_default()
}
