use crate::types::Value;

/// largest target a single counter can reach (2^11)
pub const MAX_BUCKET_VALUE: Value = 1 << 11;

/// how many steps the outward search takes on each side of the target
pub const SEARCH_WINDOW: Value = 3000;
