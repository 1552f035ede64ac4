//! Splits a counter target above a single counter's range into two chained
//! counter targets whose product hits the target, or gets as close as a
//! bounded search around it allows.

pub mod consts;
pub mod error;
pub mod grouping;
pub mod prime;
pub mod report;
pub mod search;
pub mod types;

pub use error::SearchError;
pub use search::{compute_bucket_pair, compute_bucket_pair_with};
pub use types::{Buckets, SearchConfig, SearchOutcome};
