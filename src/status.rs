//! Status Messages
//!
//! The texts each flow writes into its status area. A new message always
//! replaces the previous one.

pub const SUGGEST_PENDING: &str = "Getting suggestion...";
pub const SUGGEST_ERROR_PREFIX: &str = "Error: ";
pub const SUGGEST_FALLBACK: &str = "Failed to get suggestion";

pub const TAG_PENDING: &str = "AI is analyzing your image...";
pub const TAG_SUCCESS: &str = "AI analysis complete. Please verify the details below.";
pub const TAG_ERROR_PREFIX: &str = "Error during AI analysis: ";
pub const TAG_FALLBACK: &str = "Failed to auto-tag";

pub const SUBMIT_PENDING: &str = "Adding item to wardrobe...";
pub const SUBMIT_ERROR_PREFIX: &str = "Error adding item: ";
pub const SUBMIT_FALLBACK: &str = "Failed to add item";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Error,
}

impl Tone {
    pub fn css_class(self) -> &'static str {
        match self {
            Tone::Info => "status",
            Tone::Success => "status success",
            Tone::Error => "status error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub tone: Tone,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self { tone: Tone::Info, text: text.into() }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { tone: Tone::Success, text: text.into() }
    }

    /// `prefix` + `detail`, e.g. `Error: No suitable outfit found.`
    pub fn error(prefix: &str, detail: &str) -> Self {
        Self { tone: Tone::Error, text: format!("{}{}", prefix, detail) }
    }
}
