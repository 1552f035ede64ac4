use thiserror::Error;

use crate::types::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("target must be > 0, got {target}")]
    InvalidArgument { target: i64 },

    /// two buckets can't reach past `max_bucket^2`
    #[error("target must be <= {limit}, got {target}")]
    UnsupportedRange { target: Value, limit: Value },
}
