//! Outward search for the nearest value that splits into two buckets.

use tracing::{debug, trace};

use crate::{
    error::SearchError,
    grouping::group_factors,
    prime::get_prime_factors,
    types::{Buckets, Offset, SearchConfig, SearchOutcome, Value},
};

/// Lazily yields `(candidate, target - candidate)` in proximity order:
/// the target itself, then for each delta `target - delta` before `target + delta`.
///
/// Stops after `window` deltas, candidates below 1 are never yielded.
#[derive(Debug, Clone)]
pub struct Candidates {
    target: Value,
    window: Value,
    delta: Value,
    above_pending: bool,
}

impl Iterator for Candidates {
    type Item = (Value, Offset);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.delta >= self.window {
                return None;
            }
            let delta = self.delta;
            if self.above_pending {
                self.above_pending = false;
                self.delta += 1;
                return Some((self.target + delta, -(delta as Offset)));
            }
            if delta == 0 {
                self.delta += 1;
                return Some((self.target, 0));
            }
            self.above_pending = true;
            match self.target.checked_sub(delta) {
                Some(below) if below >= 1 => return Some((below, delta as Offset)),
                _ => continue,
            }
        }
    }
}

pub fn candidates(target: Value, window: Value) -> Candidates {
    Candidates {
        target,
        window,
        delta: 0,
        above_pending: false,
    }
}

/// [`compute_bucket_pair_with`] for the reference domain: buckets up to 2048,
/// 3000 steps each way
pub fn compute_bucket_pair(target: i64) -> Result<SearchOutcome, SearchError> {
    compute_bucket_pair_with(target, &SearchConfig::default())
}

pub fn compute_bucket_pair_with(
    target: i64,
    config: &SearchConfig,
) -> Result<SearchOutcome, SearchError> {
    if target < 1 {
        return Err(SearchError::InvalidArgument { target });
    }
    let target = target as Value;
    if target <= config.max_bucket {
        debug!(target, "fits a single bucket");
        return Ok(SearchOutcome::Found(Buckets::Single(target)));
    }
    let limit = config.max_squared();
    if target > limit {
        return Err(SearchError::UnsupportedRange { target, limit });
    }

    let found = candidates(target, config.window).find_map(|(candidate, offset)| {
        let factors = get_prime_factors(candidate);
        // factors are ascending, no arrangement can hide a prime above the bound
        if factors.last().is_some_and(|&largest| largest > config.max_bucket) {
            trace!(candidate, "prime factor above bucket bound");
            return None;
        }
        let buckets = group_factors(&factors, config.max_bucket)?;
        debug!(target, candidate, offset, %buckets, "grouped");
        Some(buckets)
    });

    Ok(match found {
        Some(buckets) => SearchOutcome::Found(buckets),
        None => {
            debug!(target, window = config.window, "window exhausted");
            SearchOutcome::NoSolution
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{MAX_BUCKET_VALUE, SEARCH_WINDOW};
    use itertools::Itertools;
    use rand::{rngs::SmallRng, Rng, SeedableRng};

    const SEED: u64 = 0xfeebdaed_deadbeef;

    fn found(target: i64) -> Vec<Value> {
        match compute_bucket_pair(target) {
            Ok(SearchOutcome::Found(buckets)) => buckets.to_vec(),
            other => panic!("target={target} -> {other:?}"),
        }
    }

    #[test]
    fn candidate_order() {
        assert_eq!(
            candidates(10, 3).collect_vec(),
            vec![(10, 0), (9, 1), (11, -1), (8, 2), (12, -2)]
        );
        assert_eq!(
            candidates(2, 4).collect_vec(),
            vec![(2, 0), (1, 1), (3, -1), (4, -2), (5, -3)]
        );
        assert_eq!(candidates(10, 0).next(), None);
        assert_eq!(candidates(10_000, SEARCH_WINDOW).count(), 2 * 3000 - 1);
    }

    #[test]
    fn reference_scenarios() {
        assert_eq!(found(1), vec![1]);
        assert_eq!(found(2047), vec![2047]);
        assert_eq!(found(2048), vec![2048]);
        assert_eq!(found(2049), vec![3, 683]);
        assert_eq!(found(10_000), vec![5, 2000]);
        assert_eq!(found(1_000_000), vec![625, 1600]);
        assert_eq!(found(4_194_304), vec![2048, 2048]);
    }

    #[test]
    fn single_bucket_range() {
        for t in 1..=MAX_BUCKET_VALUE as i64 {
            assert_eq!(found(t), vec![t as Value]);
        }
    }

    #[test]
    fn rejects_out_of_domain() {
        assert_eq!(
            compute_bucket_pair(0),
            Err(SearchError::InvalidArgument { target: 0 })
        );
        assert_eq!(
            compute_bucket_pair(-5),
            Err(SearchError::InvalidArgument { target: -5 })
        );
        assert_eq!(
            compute_bucket_pair(4_194_305),
            Err(SearchError::UnsupportedRange {
                target: 4_194_305,
                limit: 4_194_304
            })
        );
    }

    #[test]
    fn below_wins_ties() {
        // 54 = 6 * 9 and 56 = 7 * 8 are both one away
        let config = SearchConfig::new(10, 10);
        assert_eq!(
            compute_bucket_pair_with(55, &config),
            Ok(SearchOutcome::Found(Buckets::Pair(6, 9)))
        );
    }

    #[test]
    fn nearest_miss_and_exhaustion() {
        // 97 is prime, 96 98 95 99 94 all fail before 100 = 10 * 10
        assert_eq!(
            compute_bucket_pair_with(97, &SearchConfig::new(10, 10)),
            Ok(SearchOutcome::Found(Buckets::Pair(10, 10)))
        );
        assert_eq!(
            compute_bucket_pair_with(97, &SearchConfig::new(10, 2)),
            Ok(SearchOutcome::NoSolution)
        );
    }

    #[test]
    fn large_prime_lands_on_first_groupable_neighbour() {
        let config = SearchConfig::default();
        let target = 4_194_301;
        let buckets = found(target);
        let product: Value = buckets.iter().product();
        let first_groupable = candidates(target as Value, config.window)
            .find(|&(candidate, _)| {
                let factors = get_prime_factors(candidate);
                factors.last().is_some_and(|&p| p <= config.max_bucket)
                    && group_factors(&factors, config.max_bucket).is_some()
            })
            .map(|(candidate, _)| candidate);
        assert_eq!(first_groupable, Some(product));
        assert_ne!(product, target as Value);
    }

    #[test]
    fn random_targets_respect_bounds() {
        let mut rng = SmallRng::seed_from_u64(SEED);
        for _ in 0..300 {
            // far enough above the single bucket range that only pairs can be hit
            let target = rng.random_range(10_000..=MAX_BUCKET_VALUE * MAX_BUCKET_VALUE);
            let exact = group_factors(&get_prime_factors(target), MAX_BUCKET_VALUE);
            match compute_bucket_pair(target as i64) {
                Ok(SearchOutcome::Found(buckets)) => {
                    let Buckets::Pair(lo, hi) = buckets else {
                        panic!("target={target} -> {buckets}");
                    };
                    assert!(lo <= hi && hi <= MAX_BUCKET_VALUE, "target={target} -> {buckets}");
                    assert!(buckets.product().abs_diff(target) < SEARCH_WINDOW);
                    if let Some(exact) = exact {
                        assert_eq!(buckets, exact, "target={target}");
                    }
                }
                Ok(SearchOutcome::NoSolution) => assert_eq!(exact, None),
                Err(err) => panic!("target={target} -> {err}"),
            }
        }
    }
}
