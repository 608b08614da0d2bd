use serde::{Deserialize, Serialize};

/// Offset/limit pagination shared by every list operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pagination {
    pub offset: u64,
    pub limit: u64,
}

/// Upper bound applied to any caller-supplied limit.
pub const MAX_PAGE_SIZE: u64 = 500;

const DEFAULT_PAGE_SIZE: u64 = 50;

impl Pagination {
    pub fn new(offset: u64, limit: u64) -> Self {
        Self {
            offset,
            limit: limit.clamp(1, MAX_PAGE_SIZE),
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}
