//! Client Configuration
//!
//! Backend address and the fixed user/occasion this client acts for.
//! Values are baked in at build time since the wasm bundle has no process
//! environment to read from.

/// Backend used when `STYLIST_API_BASE_URL` is not set at build time
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_USER_ID: u32 = 1;
pub const DEFAULT_OCCASION: &str = "Casual";

/// Form defaults for the fields the tagger cannot infer from an image
pub const DEFAULT_MIN_TEMP: i32 = 15;
pub const DEFAULT_MAX_TEMP: i32 = 30;
pub const DEFAULT_CONDITION_TYPE: &str = "Any";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub user_id: u32,
    pub occasion: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_USER_ID, DEFAULT_OCCASION)
    }
}

impl ApiConfig {
    pub fn new(base_url: &str, user_id: u32, occasion: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            user_id,
            occasion: occasion.to_string(),
        }
    }

    /// Build from `STYLIST_API_BASE_URL`, `STYLIST_USER_ID` and
    /// `STYLIST_OCCASION` as seen by the compiler.
    pub fn from_build_env() -> Self {
        Self::from_overrides(
            option_env!("STYLIST_API_BASE_URL"),
            option_env!("STYLIST_USER_ID"),
            option_env!("STYLIST_OCCASION"),
        )
    }

    fn from_overrides(base_url: Option<&str>, user_id: Option<&str>, occasion: Option<&str>) -> Self {
        let user_id = match user_id.map(|raw| raw.trim().parse::<u32>()) {
            Some(Ok(id)) => id,
            Some(Err(_)) => {
                log::warn!("STYLIST_USER_ID is not a number, using {}", DEFAULT_USER_ID);
                DEFAULT_USER_ID
            }
            None => DEFAULT_USER_ID,
        };
        Self::new(
            base_url.filter(|s| !s.is_empty()).unwrap_or(DEFAULT_BASE_URL),
            user_id,
            occasion.filter(|s| !s.is_empty()).unwrap_or(DEFAULT_OCCASION),
        )
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
