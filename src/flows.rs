//! Request Flows
//!
//! The three user-triggered flows. Each one moves its state to pending,
//! awaits one backend call and writes the outcome back. Nothing guards
//! against re-triggering while a call is in flight: both calls run and the
//! later response overwrites the earlier one.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::commands::StylistApi;
use crate::error::SubmitError;
use crate::models::SelectedFile;
use crate::outfit::outfit_lines;
use crate::session::{SuggestionPanel, UploadSession};

/// Somewhere an `UploadSession` lives between awaits
pub trait SessionStore {
    /// Apply `f` to the session. `None` if the store is gone (component unmounted).
    fn modify<R>(&self, f: impl FnOnce(&mut UploadSession) -> R) -> Option<R>;
}

impl SessionStore for RwSignal<UploadSession> {
    fn modify<R>(&self, f: impl FnOnce(&mut UploadSession) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl SessionStore for Rc<RefCell<UploadSession>> {
    fn modify<R>(&self, f: impl FnOnce(&mut UploadSession) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Suggest button: Pending, then Ready or Failed
pub async fn run_suggestion(api: &StylistApi, set_panel: impl Fn(SuggestionPanel)) {
    set_panel(SuggestionPanel::Pending);
    let occasion = api.config().occasion.clone();
    let result = api.suggest_outfit(&occasion).await;
    match &result {
        Ok(outfit) => log::info!("{} outfit: {}", occasion, outfit_lines(outfit).join(" | ")),
        Err(err) => log::warn!("suggestion failed: {:?}", err),
    }
    set_panel(SuggestionPanel::from_result(result));
}

/// File picked: send it to the tagger and prefill the form.
/// The submit control is re-enabled whatever the outcome.
pub async fn run_auto_tag(api: &StylistApi, store: &impl SessionStore, file: SelectedFile) {
    store.modify(|session| session.begin_tagging());
    let result = api.upload_and_tag(&file).await;
    match &result {
        Ok(tags) => log::info!("tagged {} as {} / {}", file.name, tags.item_type, tags.color),
        Err(err) => log::warn!("tagging {} failed: {:?}", file.name, err),
    }
    store.modify(|session| session.finish_tagging(result));
}

/// Verify form submitted: upload file + reviewed item.
/// Returns the preview URL released by a successful submit.
pub async fn run_submit(api: &StylistApi, store: &impl SessionStore) -> Option<String> {
    let prepared = store.modify(|session| session.begin_submit())?;
    let result = match prepared {
        Ok((file, item)) => api
            .add_verified_item(&file, &item)
            .await
            .map_err(SubmitError::from),
        Err(err) => Err(SubmitError::from(err)),
    };
    match &result {
        Ok(detail) => log::info!("item added: {}", detail),
        Err(err) => log::warn!("add item failed: {:?}", err),
    }
    store.modify(|session| session.finish_submit(result)).flatten()
}
