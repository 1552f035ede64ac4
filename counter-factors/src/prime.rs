//! Trial division and a small sieve, sized for values around `MAX_BUCKET_VALUE^2`.

use crate::types::Value;

/// ascending prime factors of `n` with multiplicity, empty for `n == 1`
///
/// The last element is the largest prime factor, which is what the search
/// filters candidates on. `n` must be >= 1
pub fn get_prime_factors(mut n: Value) -> Vec<Value> {
    debug_assert!(n >= 1, "1 is the smallest value with a factorization");
    let mut factors = Vec::new();
    let mut i = 2;
    while i * i <= n {
        if n % i == 0 {
            n /= i;
            factors.push(i);
        } else {
            i += 1;
        }
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}

/// all primes in `from..=to`, ascending
///
/// `None` if `to` can't be addressed by the sieve. The sieve holds one byte per
/// value up to `to`, callers bound `to` before asking.
pub fn primes_between(from: Value, to: Value) -> Option<Vec<Value>> {
    if to < 2 || from > to {
        return Some(vec![]);
    }
    let len = usize::try_from(to).ok().and_then(|to| to.checked_add(1))?;
    let mut sieve = vec![true; len];
    sieve[0] = false;
    sieve[1] = false;

    let mut i = 2;
    while i * i < len {
        if sieve[i] {
            for multiple in (i * i..len).step_by(i) {
                sieve[multiple] = false;
            }
        }
        i += 1;
    }

    Some(
        (from.max(2) as usize..len)
            .filter(|&i| sieve[i])
            .map(|i| i as Value)
            .collect(),
    )
}
