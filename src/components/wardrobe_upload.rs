//! Wardrobe Upload Component
//!
//! File picker, preview and the verify form. Picking a file starts AI
//! tagging; submitting the form adds the reviewed item.

use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::components::StatusLine;
use crate::context::use_app_context;
use crate::flows::{self, SessionStore};
use crate::models::SelectedFile;
use crate::session::{FormField, UploadSession};
use crate::status::{self, StatusMessage};

/// Copy the picked file into memory so it can be re-sent on submit
async fn read_file(file: &web_sys::File) -> Result<SelectedFile, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{:?}", e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(SelectedFile::new(file.name(), file.type_(), bytes))
}

fn revoke_preview(url: Option<String>) {
    if let Some(url) = url {
        if let Err(e) = web_sys::Url::revoke_object_url(&url) {
            log::warn!("could not revoke {}: {:?}", url, e);
        }
    }
}

#[component]
pub fn WardrobeUpload() -> impl IntoView {
    let ctx = use_app_context();
    let session = RwSignal::new(UploadSession::default());
    let file_input = NodeRef::<Input>::new();

    // A successful submit bumps the generation; clear the picker then
    let input_generation = Memo::new(move |_| session.with(|s| s.input_generation));
    Effect::new(move |_| {
        if input_generation.get() == 0 {
            return;
        }
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }
    });

    let on_file_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        let preview_url = web_sys::Url::create_object_url_with_blob(&file).ok();
        let api = ctx.api();

        spawn_local(async move {
            match read_file(&file).await {
                Ok(selected) => {
                    log::info!("picked {} ({} bytes)", selected.name, selected.bytes.len());
                    let stale = session
                        .modify(|s| s.select_file(selected.clone(), preview_url))
                        .flatten();
                    revoke_preview(stale);
                    flows::run_auto_tag(&api, &session, selected).await;
                }
                Err(err) => {
                    log::error!("could not read {}: {}", file.name(), err);
                    revoke_preview(preview_url);
                    session.update(|s| {
                        s.status = Some(StatusMessage::error(status::TAG_ERROR_PREFIX, &err));
                    });
                }
            }
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let api = ctx.api();
        spawn_local(async move {
            let released = flows::run_submit(&api, &session).await;
            revoke_preview(released);
        });
    };

    let status_message = Signal::derive(move || session.with(|s| s.status.clone()));

    view! {
        <section class="wardrobe-upload">
            <h2>"Add to wardrobe"</h2>
            <input
                id="image-upload"
                type="file"
                accept="image/*"
                node_ref=file_input
                on:change=on_file_change
            />

            <div
                id="preview-container"
                class=move || if session.with(|s| s.preview_visible) { "preview" } else { "preview hidden" }
            >
                <img
                    id="preview-image"
                    alt="Selected garment"
                    src=move || session.with(|s| s.preview_url.clone().unwrap_or_default())
                />
            </div>

            <div id="upload-status">
                <StatusLine status=status_message />
            </div>

            <form
                id="verify-form"
                class=move || if session.with(|s| s.form_visible) { "verify-form" } else { "verify-form hidden" }
                on:submit=on_submit
            >
                {FormField::ALL.into_iter().map(|field| view! {
                    <div class="form-row">
                        <label for=field.id()>{field.label()}</label>
                        <input
                            id=field.id()
                            type={if field.is_number() { "number" } else { "text" }}
                            required=true
                            prop:value=move || session.with(|s| s.form.get(field).to_string())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                session.update(|s| s.form.set(field, value));
                            }
                        />
                    </div>
                }).collect_view()}

                <button
                    id="submit-item-btn"
                    type="submit"
                    prop:disabled=move || session.with(|s| !s.submit_enabled)
                >
                    "Add to wardrobe"
                </button>
            </form>
        </section>
    }
}
