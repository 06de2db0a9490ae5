//! Error Types
//!
//! Every failure ends up as one line of text in a status area; these types
//! keep the cause around until then.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, bad URL)
    #[error("{0}")]
    Transport(String),
    /// Non-2xx answer. `detail` is `None` when the body was not the usual
    /// `{"detail": ...}` JSON.
    #[error("server returned {status}")]
    Server { status: u16, detail: Option<String> },
    /// 2xx answer whose body did not have the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text shown to the user: the server's detail when there is one,
    /// `fallback` for a bare non-2xx, otherwise the underlying message.
    pub fn detail_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Server { detail: Some(detail), .. } if !detail.is_empty() => detail.clone(),
            ApiError::Server { .. } => fallback.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// Problems with the verify form caught before anything is sent
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("{field} must be a whole number, got \"{value}\"")]
    InvalidNumber { field: &'static str, value: String },
    #[error("no image selected")]
    NoFileSelected,
}

/// Anything that can end the submit flow
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl SubmitError {
    pub fn detail_or(&self, fallback: &str) -> String {
        match self {
            SubmitError::Form(err) => err.to_string(),
            SubmitError::Api(err) => err.detail_or(fallback),
        }
    }
}
