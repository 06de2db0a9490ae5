//! Frontend Models
//!
//! Data structures matching the stylist backend payloads.

use serde::{Deserialize, Serialize};

/// Wardrobe entry submitted after the user has reviewed the AI tags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WardrobeItem {
    pub item_name: String,
    #[serde(rename = "Type")]
    pub item_type: String,
    pub color: String,
    pub color_family: String,
    pub style: String,
    pub pattern: String,
    pub min_temp: i32,
    pub max_temp: i32,
    pub condition_type: String,
}

/// Current weather reported alongside a suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    pub temperature: i32,
    pub condition: String,
}

/// One garment slot of a suggested outfit. The backend sends more fields
/// (Type, Style, ...); only the displayed ones are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClothingEntry {
    pub item_name: String,
    pub color: String,
}

/// Body of `GET /suggest/{user_id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionResult {
    pub current_weather: Weather,
    pub shirt: ClothingEntry,
    pub pants: ClothingEntry,
    pub shoes: ClothingEntry,
    #[serde(default)]
    pub top: Option<ClothingEntry>,
}

/// AI-suggested values for the verify form.
///
/// The tagger also emits default temperature bounds and a condition type;
/// those are optional here so older backends that send only the six text
/// fields still decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagResult {
    pub item_name: String,
    #[serde(rename = "Type")]
    pub item_type: String,
    pub color: String,
    pub color_family: String,
    pub style: String,
    pub pattern: String,
    #[serde(default)]
    pub min_temp: Option<i32>,
    #[serde(default)]
    pub max_temp: Option<i32>,
    #[serde(default)]
    pub condition_type: Option<String>,
}

/// Body of `POST /wardrobe/{user_id}/upload-and-tag`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TagResponse {
    pub tags: TagResult,
}

/// Body of `POST /wardrobe/{user_id}/add-verified`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DetailResponse {
    pub detail: String,
}

/// Error body convention shared by every endpoint
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

/// Body of `GET /`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}

/// Image picked by the user, already read into memory
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        let content_type = content_type.into();
        Self {
            name: name.into(),
            // Browsers report an empty type for unknown extensions
            content_type: if content_type.is_empty() {
                "application/octet-stream".to_string()
            } else {
                content_type
            },
            bytes,
        }
    }
}
