//! Health Command

use super::{read_json, StylistApi};
use crate::error::ApiError;
use crate::models::HealthResponse;

impl StylistApi {
    /// `GET /` - the backend's banner message
    pub async fn health(&self) -> Result<String, ApiError> {
        let response = self.client.get(self.url("/")).send().await?;
        let body: HealthResponse = read_json(response).await?;
        Ok(body.message)
    }
}
