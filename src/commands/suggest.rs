//! Suggestion Commands

use super::{read_json, StylistApi};
use crate::error::ApiError;
use crate::models::SuggestionResult;

impl StylistApi {
    /// `GET /suggest/{user_id}?occasion=...`
    pub async fn suggest_outfit(&self, occasion: &str) -> Result<SuggestionResult, ApiError> {
        let url = self.url(&format!("/suggest/{}", self.config.user_id));
        log::info!("GET {} occasion={}", url, occasion);
        let response = self
            .client
            .get(&url)
            .query(&[("occasion", occasion)])
            .send()
            .await?;
        read_json(response).await
    }
}
