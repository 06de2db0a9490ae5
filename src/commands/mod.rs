//! Backend Command Wrappers
//!
//! HTTP bindings to the stylist backend, organized by endpoint group.

mod health;
mod suggest;
mod wardrobe;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::ErrorBody;

/// Thin client over the stylist REST API.
///
/// No timeout is configured; whatever the transport applies governs.
#[derive(Clone, Debug)]
pub struct StylistApi {
    client: Client,
    config: ApiConfig,
}

impl StylistApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        self.config.url(path)
    }
}

/// Decode a 2xx body as `T`, or turn anything else into `ApiError::Server`
/// carrying the `detail` field when the error body has one.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|body| body.detail);
        return Err(ApiError::Server {
            status: status.as_u16(),
            detail,
        });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
