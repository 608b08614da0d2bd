use wd_core::Pagination;

use serde::Deserialize;

/// Common offset/limit query parameters for list endpoints.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub offset: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    50
}

impl ListQuery {
    /// Clamped pagination for the service layer.
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.offset, self.limit)
    }
}
