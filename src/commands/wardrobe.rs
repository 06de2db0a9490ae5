//! Wardrobe Commands
//!
//! Image tagging and verified-item upload. Both send the picked image as a
//! multipart part named `file`.

use reqwest::multipart::{Form, Part};

use super::{read_json, StylistApi};
use crate::error::ApiError;
use crate::models::{DetailResponse, SelectedFile, TagResponse, TagResult, WardrobeItem};

fn file_part(file: &SelectedFile) -> Part {
    Part::bytes(file.bytes.clone())
        .file_name(file.name.clone())
        .mime_str(&file.content_type)
        .unwrap_or_else(|_| Part::bytes(file.bytes.clone()).file_name(file.name.clone()))
}

impl StylistApi {
    /// `POST /wardrobe/{user_id}/upload-and-tag`
    pub async fn upload_and_tag(&self, file: &SelectedFile) -> Result<TagResult, ApiError> {
        let url = self.url(&format!("/wardrobe/{}/upload-and-tag", self.config.user_id));
        log::info!("POST {} ({}, {} bytes)", url, file.name, file.bytes.len());

        let form = Form::new().part("file", file_part(file));
        let response = self.client.post(&url).multipart(form).send().await?;
        let body: TagResponse = read_json(response).await?;
        Ok(body.tags)
    }

    /// `POST /wardrobe/{user_id}/add-verified`; the item travels as JSON text
    /// in the `item_data` part. Returns the server's confirmation.
    pub async fn add_verified_item(
        &self,
        file: &SelectedFile,
        item: &WardrobeItem,
    ) -> Result<String, ApiError> {
        let url = self.url(&format!("/wardrobe/{}/add-verified", self.config.user_id));
        log::info!("POST {} item={:?}", url, item.item_name);

        let item_data = serde_json::to_string(item).map_err(|e| ApiError::Decode(e.to_string()))?;
        let form = Form::new()
            .part("file", file_part(file))
            .text("item_data", item_data);
        let response = self.client.post(&url).multipart(form).send().await?;
        let body: DetailResponse = read_json(response).await?;
        Ok(body.detail)
    }
}
