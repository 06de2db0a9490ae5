//! Status Line Component
//!
//! One status message; a new message replaces the old one.

use leptos::prelude::*;

use crate::status::StatusMessage;

#[component]
pub fn StatusLine(#[prop(into)] status: Signal<Option<StatusMessage>>) -> impl IntoView {
    move || {
        status.get().map(|msg| {
            view! { <p class=msg.tone.css_class()>{msg.text}</p> }
        })
    }
}
