use super::client::{ApiClient, ApiError};
use crate::models::StatusSnapshot;

/// Anything that can produce a wall-eno status snapshot
#[allow(async_fn_in_trait)]
pub trait StatusSource {
    async fn fetch_status(&self) -> Result<StatusSnapshot, ApiError>;
}

impl ApiClient {
    /// Get the current wall-eno status
    pub async fn get_wall_eno_status(&self) -> Result<StatusSnapshot, ApiError> {
        self.get(self.status_path()).await
    }
}

impl StatusSource for ApiClient {
    async fn fetch_status(&self) -> Result<StatusSnapshot, ApiError> {
        self.get_wall_eno_status().await
    }
}
