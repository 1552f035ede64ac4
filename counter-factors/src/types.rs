use std::fmt::Display;

use crate::consts;

pub type Value = u64;
/// signed distance `target - product`, what the batch report calls "off"
pub type Offset = i64;

/// explicit bounds for one search, see [`crate::search::compute_bucket_pair_with`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_bucket: Value,
    pub window: Value,
}

impl SearchConfig {
    pub const fn new(max_bucket: Value, window: Value) -> Self {
        Self { max_bucket, window }
    }

    /// largest target two buckets can reach
    pub const fn max_squared(&self) -> Value {
        self.max_bucket.saturating_mul(self.max_bucket)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(consts::MAX_BUCKET_VALUE, consts::SEARCH_WINDOW)
    }
}

/// one or two bucket values, the pair is always ascending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Buckets {
    Single(Value),
    Pair(Value, Value),
}

impl Buckets {
    pub const fn product(&self) -> Value {
        match *self {
            Buckets::Single(v) => v,
            Buckets::Pair(lo, hi) => lo * hi,
        }
    }

    pub const fn largest(&self) -> Value {
        match *self {
            Buckets::Single(v) => v,
            Buckets::Pair(_, hi) => hi,
        }
    }

    pub fn to_vec(&self) -> Vec<Value> {
        match *self {
            Buckets::Single(v) => vec![v],
            Buckets::Pair(lo, hi) => vec![lo, hi],
        }
    }
}

impl Display for Buckets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Buckets::Single(v) => write!(f, "[{v}]"),
            Buckets::Pair(lo, hi) => write!(f, "[{lo}, {hi}]"),
        }
    }
}

/// running out of window is a normal answer, not an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Buckets),
    NoSolution,
}
