use serde::Serialize;

/// Acknowledgement body for delete endpoints.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

impl DeleteResponse {
    pub fn ok() -> Self {
        Self { deleted: true }
    }
}
