//! Greedy reduction of a prime factor multiset into at most two buckets.
//!
//! Pairs the smallest with the largest factor while that fits, otherwise
//! collapses the two smallest. The list is re-sorted after every merge.
//! This is a heuristic: `None` means "try another value", not that no
//! two-bucket split of `factors` exists.

use tracing::trace;

use crate::types::{Buckets, Value};

/// every factor is expected to be <= `max_bucket`
pub fn group_factors(factors: &[Value], max_bucket: Value) -> Option<Buckets> {
    let mut working = factors.to_vec();
    working.sort_unstable();

    while working.len() > 2 {
        let smallest = working[0];
        let largest = working[working.len() - 1];
        if smallest * largest <= max_bucket {
            working.pop();
            working[0] = smallest * largest;
        } else {
            let second = working.remove(1);
            working[0] = smallest * second;
        }
        working.sort_unstable();
        trace!(?working, "merged");
    }

    let buckets = match *working.as_slice() {
        [] => Buckets::Single(1),
        [only] => Buckets::Single(only),
        [lo, hi] => Buckets::Pair(lo, hi),
        _ => unreachable!("reduced to at most two"),
    };
    (buckets.largest() <= max_bucket).then_some(buckets)
}
