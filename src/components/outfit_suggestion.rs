//! Outfit Suggestion Component
//!
//! Suggest button plus the weather and garment lines it produces.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::StatusLine;
use crate::context::use_app_context;
use crate::flows;
use crate::outfit::{item_lines, weather_line};
use crate::session::SuggestionPanel;
use crate::status::{self, StatusMessage};

#[component]
pub fn OutfitSuggestion() -> impl IntoView {
    let ctx = use_app_context();
    let (panel, set_panel) = signal(SuggestionPanel::Idle);

    let suggest = move |_| {
        let api = ctx.api();
        spawn_local(async move {
            flows::run_suggestion(&api, move |next| set_panel.set(next)).await;
        });
    };

    let status_message = Signal::derive(move || match panel.get() {
        SuggestionPanel::Pending => Some(StatusMessage::info(status::SUGGEST_PENDING)),
        SuggestionPanel::Failed(msg) => Some(msg),
        SuggestionPanel::Idle | SuggestionPanel::Ready(_) => None,
    });

    view! {
        <section class="suggestion">
            <h2>"Today's outfit"</h2>
            <button id="suggestBtn" on:click=suggest>"Suggest an outfit"</button>

            <div id="outfit-result">
                <StatusLine status=status_message />
                {move || match panel.get() {
                    SuggestionPanel::Ready(outfit) => Some(view! {
                        <div class="outfit">
                            <p class="weather">{weather_line(&outfit)}</p>
                            {item_lines(&outfit).into_iter().map(|(label, text)| view! {
                                <div class="item">
                                    <strong>{label}":"</strong>" "{text}
                                </div>
                            }).collect_view()}
                        </div>
                    }),
                    _ => None,
                }}
            </div>
        </section>
    }
}
