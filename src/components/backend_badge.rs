//! Backend Badge Component
//!
//! Pings the backend once on mount and shows whether it answered.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

#[component]
pub fn BackendBadge() -> impl IntoView {
    let ctx = use_app_context();
    let (online, set_online) = signal::<Option<bool>>(None);

    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            match api.health().await {
                Ok(message) => {
                    log::info!("backend says: {}", message);
                    set_online.set(Some(true));
                }
                Err(err) => {
                    log::warn!("backend unreachable: {}", err);
                    set_online.set(Some(false));
                }
            }
        });
    });

    view! {
        <span class=move || match online.get() {
            None => "backend-badge",
            Some(true) => "backend-badge online",
            Some(false) => "backend-badge offline",
        }>
            {move || match online.get() {
                None => "Connecting...",
                Some(true) => "Backend online",
                Some(false) => "Backend offline",
            }}
        </span>
    }
}
