//! UI Session State
//!
//! Plain state behind the upload/verify panel and the suggestion panel.
//! Components hold these in signals; every transition lives here so it can
//! be exercised without a browser.

use crate::config::{DEFAULT_CONDITION_TYPE, DEFAULT_MAX_TEMP, DEFAULT_MIN_TEMP};
use crate::error::{ApiError, FormError, SubmitError};
use crate::models::{SelectedFile, SuggestionResult, TagResult, WardrobeItem};
use crate::status::{self, StatusMessage};

/// Inputs of the verify form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    ItemName,
    Type,
    Color,
    ColorFamily,
    Style,
    Pattern,
    MinTemp,
    MaxTemp,
    ConditionType,
}

impl FormField {
    pub const ALL: [FormField; 9] = [
        FormField::ItemName,
        FormField::Type,
        FormField::Color,
        FormField::ColorFamily,
        FormField::Style,
        FormField::Pattern,
        FormField::MinTemp,
        FormField::MaxTemp,
        FormField::ConditionType,
    ];

    /// Element id, same as the backend field name
    pub fn id(self) -> &'static str {
        match self {
            FormField::ItemName => "ItemName",
            FormField::Type => "Type",
            FormField::Color => "Color",
            FormField::ColorFamily => "ColorFamily",
            FormField::Style => "Style",
            FormField::Pattern => "Pattern",
            FormField::MinTemp => "MinTemp",
            FormField::MaxTemp => "MaxTemp",
            FormField::ConditionType => "ConditionType",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::ItemName => "Item name",
            FormField::Type => "Type",
            FormField::Color => "Color",
            FormField::ColorFamily => "Color family",
            FormField::Style => "Style",
            FormField::Pattern => "Pattern",
            FormField::MinTemp => "Min temp (°C)",
            FormField::MaxTemp => "Max temp (°C)",
            FormField::ConditionType => "Condition",
        }
    }

    pub fn is_number(self) -> bool {
        matches!(self, FormField::MinTemp | FormField::MaxTemp)
    }
}

/// Raw text of the verify form
#[derive(Debug, Clone, PartialEq)]
pub struct VerifyForm {
    pub item_name: String,
    pub item_type: String,
    pub color: String,
    pub color_family: String,
    pub style: String,
    pub pattern: String,
    pub min_temp: String,
    pub max_temp: String,
    pub condition_type: String,
}

impl Default for VerifyForm {
    fn default() -> Self {
        Self {
            item_name: String::new(),
            item_type: String::new(),
            color: String::new(),
            color_family: String::new(),
            style: String::new(),
            pattern: String::new(),
            min_temp: DEFAULT_MIN_TEMP.to_string(),
            max_temp: DEFAULT_MAX_TEMP.to_string(),
            condition_type: DEFAULT_CONDITION_TYPE.to_string(),
        }
    }
}

impl VerifyForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::ItemName => &self.item_name,
            FormField::Type => &self.item_type,
            FormField::Color => &self.color,
            FormField::ColorFamily => &self.color_family,
            FormField::Style => &self.style,
            FormField::Pattern => &self.pattern,
            FormField::MinTemp => &self.min_temp,
            FormField::MaxTemp => &self.max_temp,
            FormField::ConditionType => &self.condition_type,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::ItemName => &mut self.item_name,
            FormField::Type => &mut self.item_type,
            FormField::Color => &mut self.color,
            FormField::ColorFamily => &mut self.color_family,
            FormField::Style => &mut self.style,
            FormField::Pattern => &mut self.pattern,
            FormField::MinTemp => &mut self.min_temp,
            FormField::MaxTemp => &mut self.max_temp,
            FormField::ConditionType => &mut self.condition_type,
        };
        *slot = value;
    }

    /// Prefill from the tagger. The six text fields are always overwritten;
    /// temperatures and condition only when the tagger sent them.
    pub fn apply_tags(&mut self, tags: &TagResult) {
        self.item_name = tags.item_name.clone();
        self.item_type = tags.item_type.clone();
        self.color = tags.color.clone();
        self.color_family = tags.color_family.clone();
        self.style = tags.style.clone();
        self.pattern = tags.pattern.clone();
        if let Some(min) = tags.min_temp {
            self.min_temp = min.to_string();
        }
        if let Some(max) = tags.max_temp {
            self.max_temp = max.to_string();
        }
        if let Some(condition) = &tags.condition_type {
            self.condition_type = condition.clone();
        }
    }

    /// Build the item to submit. Temperatures must be integers; no range
    /// check is done here, the backend owns that.
    pub fn to_item(&self) -> Result<WardrobeItem, FormError> {
        Ok(WardrobeItem {
            item_name: self.item_name.clone(),
            item_type: self.item_type.clone(),
            color: self.color.clone(),
            color_family: self.color_family.clone(),
            style: self.style.clone(),
            pattern: self.pattern.clone(),
            min_temp: parse_temp("MinTemp", &self.min_temp)?,
            max_temp: parse_temp("MaxTemp", &self.max_temp)?,
            condition_type: self.condition_type.clone(),
        })
    }
}

fn parse_temp(field: &'static str, raw: &str) -> Result<i32, FormError> {
    raw.trim().parse::<i32>().map_err(|_| FormError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

/// State of the upload / verify panel.
///
/// Owns the picked image between tagging and submission; at most one file
/// is held at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadSession {
    pub file: Option<SelectedFile>,
    pub preview_url: Option<String>,
    pub preview_visible: bool,
    pub form_visible: bool,
    pub submit_enabled: bool,
    pub status: Option<StatusMessage>,
    pub form: VerifyForm,
    /// Bumped whenever the file input must be cleared
    pub input_generation: u32,
}

impl Default for UploadSession {
    fn default() -> Self {
        Self {
            file: None,
            preview_url: None,
            preview_visible: false,
            form_visible: false,
            submit_enabled: true,
            status: None,
            form: VerifyForm::default(),
            input_generation: 0,
        }
    }
}

impl UploadSession {
    /// Hold a newly picked file and reveal preview and form.
    /// Returns the previous preview URL, which the caller should revoke.
    pub fn select_file(&mut self, file: SelectedFile, preview_url: Option<String>) -> Option<String> {
        self.file = Some(file);
        self.preview_visible = true;
        self.form_visible = true;
        std::mem::replace(&mut self.preview_url, preview_url)
    }

    pub fn begin_tagging(&mut self) {
        self.status = Some(StatusMessage::info(status::TAG_PENDING));
        self.submit_enabled = false;
    }

    pub fn finish_tagging(&mut self, result: Result<TagResult, ApiError>) {
        match result {
            Ok(tags) => {
                self.form.apply_tags(&tags);
                self.status = Some(StatusMessage::success(status::TAG_SUCCESS));
            }
            Err(err) => {
                self.status = Some(StatusMessage::error(
                    status::TAG_ERROR_PREFIX,
                    &err.detail_or(status::TAG_FALLBACK),
                ));
            }
        }
        self.submit_enabled = true;
    }

    /// Lock the submit control and gather what gets sent
    pub fn begin_submit(&mut self) -> Result<(SelectedFile, WardrobeItem), FormError> {
        self.submit_enabled = false;
        self.status = Some(StatusMessage::info(status::SUBMIT_PENDING));
        let file = self.file.clone().ok_or(FormError::NoFileSelected)?;
        let item = self.form.to_item()?;
        Ok((file, item))
    }

    /// On success the session goes back to empty: form and preview hidden,
    /// file dropped, file input cleared. On failure everything stays for a
    /// retry. Returns the preview URL to revoke, if one was released.
    pub fn finish_submit(&mut self, result: Result<String, SubmitError>) -> Option<String> {
        self.submit_enabled = true;
        match result {
            Ok(detail) => {
                self.status = Some(StatusMessage::success(detail));
                self.form_visible = false;
                self.preview_visible = false;
                self.file = None;
                self.form = VerifyForm::default();
                self.input_generation = self.input_generation.wrapping_add(1);
                self.preview_url.take()
            }
            Err(err) => {
                self.status = Some(StatusMessage::error(
                    status::SUBMIT_ERROR_PREFIX,
                    &err.detail_or(status::SUBMIT_FALLBACK),
                ));
                None
            }
        }
    }
}

/// What the suggestion area currently shows
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SuggestionPanel {
    #[default]
    Idle,
    Pending,
    Ready(SuggestionResult),
    Failed(StatusMessage),
}

impl SuggestionPanel {
    pub fn from_result(result: Result<SuggestionResult, ApiError>) -> Self {
        match result {
            Ok(outfit) => SuggestionPanel::Ready(outfit),
            Err(err) => SuggestionPanel::Failed(StatusMessage::error(
                status::SUGGEST_ERROR_PREFIX,
                &err.detail_or(status::SUGGEST_FALLBACK),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::Tone;

    fn blue_shirt_tags() -> TagResult {
        TagResult {
            item_name: "Blue Shirt".into(),
            item_type: "Shirt".into(),
            color: "Blue".into(),
            color_family: "Blue".into(),
            style: "Casual".into(),
            pattern: "Solid".into(),
            min_temp: None,
            max_temp: None,
            condition_type: None,
        }
    }

    fn photo() -> SelectedFile {
        SelectedFile::new("photo.jpg", "image/jpeg", vec![0xff, 0xd8])
    }

    fn tagged_session() -> UploadSession {
        let mut session = UploadSession::default();
        session.select_file(photo(), Some("blob:preview-1".into()));
        session.begin_tagging();
        session.finish_tagging(Ok(blue_shirt_tags()));
        session
    }

    #[test]
    fn test_form_defaults() {
        let form = VerifyForm::default();
        assert_eq!(form.get(FormField::MinTemp), "15");
        assert_eq!(form.get(FormField::MaxTemp), "30");
        assert_eq!(form.get(FormField::ConditionType), "Any");
        assert_eq!(form.get(FormField::ItemName), "");
    }

    #[test]
    fn test_field_ids_match_backend_names() {
        let ids: Vec<_> = FormField::ALL.iter().map(|f| f.id()).collect();
        assert_eq!(
            ids,
            ["ItemName", "Type", "Color", "ColorFamily", "Style", "Pattern", "MinTemp", "MaxTemp", "ConditionType"]
        );
        assert!(FormField::MinTemp.is_number());
        assert!(!FormField::Color.is_number());
    }

    #[test]
    fn test_set_then_get() {
        let mut form = VerifyForm::default();
        for field in FormField::ALL {
            form.set(field, format!("v-{}", field.id()));
        }
        for field in FormField::ALL {
            assert_eq!(form.get(field), format!("v-{}", field.id()));
        }
    }

    #[test]
    fn test_select_file_reveals_and_returns_old_preview() {
        let mut session = UploadSession::default();
        assert_eq!(session.select_file(photo(), Some("blob:1".into())), None);
        assert!(session.form_visible && session.preview_visible);
        assert_eq!(session.select_file(photo(), Some("blob:2".into())), Some("blob:1".into()));
        assert_eq!(session.preview_url.as_deref(), Some("blob:2"));
    }

    #[test]
    fn test_tagging_disables_then_reenables_submit() {
        let mut session = UploadSession::default();
        session.select_file(photo(), None);
        session.begin_tagging();
        assert!(!session.submit_enabled);
        assert_eq!(session.status, Some(StatusMessage::info("AI is analyzing your image...")));
        session.finish_tagging(Ok(blue_shirt_tags()));
        assert!(session.submit_enabled);
    }

    #[test]
    fn test_tagging_success_fills_six_fields() {
        let session = tagged_session();
        assert_eq!(session.form.get(FormField::ItemName), "Blue Shirt");
        assert_eq!(session.form.get(FormField::Type), "Shirt");
        assert_eq!(session.form.get(FormField::Color), "Blue");
        assert_eq!(session.form.get(FormField::ColorFamily), "Blue");
        assert_eq!(session.form.get(FormField::Style), "Casual");
        assert_eq!(session.form.get(FormField::Pattern), "Solid");
        assert_eq!(
            session.status,
            Some(StatusMessage::success("AI analysis complete. Please verify the details below."))
        );
    }

    #[test]
    fn test_tagging_applies_optional_defaults_when_sent() {
        let mut form = VerifyForm::default();
        form.apply_tags(&TagResult {
            min_temp: Some(5),
            max_temp: Some(18),
            condition_type: Some("Rain".into()),
            ..blue_shirt_tags()
        });
        assert_eq!(form.min_temp, "5");
        assert_eq!(form.max_temp, "18");
        assert_eq!(form.condition_type, "Rain");
    }

    #[test]
    fn test_tagging_failure_still_reenables_submit() {
        let mut session = UploadSession::default();
        session.select_file(photo(), None);
        session.begin_tagging();
        session.finish_tagging(Err(ApiError::Server { status: 500, detail: Some("model offline".into()) }));
        assert!(session.submit_enabled);
        let status = session.status.unwrap();
        assert_eq!(status.tone, Tone::Error);
        assert_eq!(status.text, "Error during AI analysis: model offline");
        assert_eq!(session.form, VerifyForm::default());
    }

    #[test]
    fn test_to_item_parses_temperatures() {
        let mut form = VerifyForm::default();
        form.apply_tags(&blue_shirt_tags());
        form.min_temp = " -5 ".into();
        let item = form.to_item().unwrap();
        assert_eq!(item.min_temp, -5);
        assert_eq!(item.max_temp, 30);
        assert_eq!(item.item_name, "Blue Shirt");
    }

    #[test]
    fn test_to_item_rejects_non_integer() {
        let mut form = VerifyForm::default();
        form.max_temp = "20.5".into();
        assert_eq!(
            form.to_item(),
            Err(FormError::InvalidNumber { field: "MaxTemp", value: "20.5".into() })
        );
    }

    #[test]
    fn test_submit_without_file() {
        let mut session = UploadSession::default();
        let err = session.begin_submit().unwrap_err();
        assert_eq!(err, FormError::NoFileSelected);
        assert!(!session.submit_enabled);
        session.finish_submit(Err(err.into()));
        assert!(session.submit_enabled);
        assert_eq!(session.status.unwrap().text, "Error adding item: no image selected");
    }

    #[test]
    fn test_submit_success_resets_session() {
        let mut session = tagged_session();
        let (file, item) = session.begin_submit().unwrap();
        assert_eq!(file.name, "photo.jpg");
        assert_eq!(item.item_name, "Blue Shirt");
        assert!(!session.submit_enabled);

        let revoked = session.finish_submit(Ok("Item 'Blue Shirt' added successfully".into()));
        assert_eq!(revoked.as_deref(), Some("blob:preview-1"));
        assert!(!session.form_visible);
        assert!(!session.preview_visible);
        assert!(session.file.is_none());
        assert_eq!(session.input_generation, 1);
        assert!(session.submit_enabled);
        assert_eq!(session.status, Some(StatusMessage::success("Item 'Blue Shirt' added successfully")));
    }

    #[test]
    fn test_submit_failure_keeps_form_for_retry() {
        let mut session = tagged_session();
        session.begin_submit().unwrap();
        let revoked = session.finish_submit(Err(ApiError::Server { status: 400, detail: None }.into()));
        assert_eq!(revoked, None);
        assert!(session.form_visible && session.preview_visible);
        assert!(session.file.is_some());
        assert_eq!(session.input_generation, 0);
        assert!(session.submit_enabled);
        assert_eq!(session.status.unwrap().text, "Error adding item: Failed to add item");
    }

    #[test]
    fn test_suggestion_panel_from_result() {
        let panel = SuggestionPanel::from_result(Err(ApiError::Server { status: 404, detail: Some("X".into()) }));
        assert_eq!(panel, SuggestionPanel::Failed(StatusMessage::error("Error: ", "X")));
        let panel = SuggestionPanel::from_result(Err(ApiError::Server { status: 500, detail: None }));
        match panel {
            SuggestionPanel::Failed(msg) => assert_eq!(msg.text, "Error: Failed to get suggestion"),
            other => panic!("unexpected panel {:?}", other),
        }
    }
}
