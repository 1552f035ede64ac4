//! Batch evaluation of many targets and the one-line-per-target report.

use std::{collections::HashMap, fmt::Display};

use anyhow::{bail, Context};
use itertools::Itertools;
use rayon::prelude::*;

use crate::{
    error::SearchError,
    prime::primes_between,
    search::compute_bucket_pair_with,
    types::{Buckets, Offset, SearchConfig, SearchOutcome, Value},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    Solved { target: i64, buckets: Buckets },
    NoSolution { target: i64 },
    Failed { target: i64, error: SearchError },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    Exact,
    Approximate,
    NoSolution,
    Failed,
}

impl Report {
    pub fn evaluate(target: i64, config: &SearchConfig) -> Self {
        match compute_bucket_pair_with(target, config) {
            Ok(SearchOutcome::Found(buckets)) => Report::Solved { target, buckets },
            Ok(SearchOutcome::NoSolution) => Report::NoSolution { target },
            Err(error) => Report::Failed { target, error },
        }
    }

    /// `target - product`, only for solved targets
    pub fn offset(&self) -> Option<Offset> {
        match *self {
            Report::Solved { target, buckets } => Some(target - buckets.product() as Offset),
            _ => None,
        }
    }

    pub fn kind(&self) -> ReportKind {
        match self {
            Report::Solved { .. } if self.offset() == Some(0) => ReportKind::Exact,
            Report::Solved { .. } => ReportKind::Approximate,
            Report::NoSolution { .. } => ReportKind::NoSolution,
            Report::Failed { .. } => ReportKind::Failed,
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Report::Solved { target, buckets } => {
                let (f1, f2) = match buckets {
                    Buckets::Single(v) => (v, 1),
                    Buckets::Pair(lo, hi) => (lo, hi),
                };
                write!(
                    f,
                    "target {target:7} f1 {f1:4} f2 {f2:4} product {:7} off {}",
                    buckets.product(),
                    target - buckets.product() as Offset
                )
            }
            Report::NoSolution { target } => write!(f, "No solution found for {target}"),
            Report::Failed { target, error } => write!(f, "Error for {target}: {error}"),
        }
    }
}

/// one integer per line, blank lines and `#` comments are skipped
pub fn parse_targets(input: &str) -> anyhow::Result<Vec<i64>> {
    input
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.split('#').next().unwrap_or("").trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line_no, line)| {
            line.parse::<i64>()
                .with_context(|| format!("line {line_no}: '{line}' is not an integer"))
        })
        .collect()
}

/// every prime in `from..=to` as a target
///
/// Primes above `max_squared()` could only ever fail, so such ranges are rejected
/// before the sieve is built.
pub fn prime_targets(from: Value, to: Value, config: &SearchConfig) -> anyhow::Result<Vec<i64>> {
    let limit = config.max_squared();
    if to > limit {
        bail!("prime range must end at or below {limit}, got {to}");
    }
    primes_between(from, to)
        .with_context(|| format!("can't sieve primes up to {to}"))?
        .into_iter()
        .map(i64::try_from)
        .collect::<Result<Vec<i64>, _>>()
        .context("prime range exceeds i64")
}

/// every target is independent, reports come back in input order
pub fn run_batch(targets: &[i64], config: &SearchConfig) -> Vec<Report> {
    targets
        .par_iter()
        .map(|&target| Report::evaluate(target, config))
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub exact: usize,
    pub approximate: usize,
    pub no_solution: usize,
    pub failed: usize,
}

impl Summary {
    pub fn tally(reports: &[Report]) -> Self {
        let counts: HashMap<ReportKind, usize> = reports.iter().map(Report::kind).counts();
        let count = |kind: ReportKind| counts.get(&kind).copied().unwrap_or(0);
        Self {
            exact: count(ReportKind::Exact),
            approximate: count(ReportKind::Approximate),
            no_solution: count(ReportKind::NoSolution),
            failed: count(ReportKind::Failed),
        }
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "exact {} approximate {} no solution {} failed {}",
            self.exact, self.approximate, self.no_solution, self.failed
        )
    }
}
