//! Stylist Frontend App
//!
//! Root component: outfit suggestion on top, wardrobe upload below.

use leptos::prelude::*;

use crate::commands::StylistApi;
use crate::components::{BackendBadge, OutfitSuggestion, WardrobeUpload};
use crate::config::ApiConfig;
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_build_env();
    log::info!(
        "backend {} as user {} (occasion {})",
        config.base_url,
        config.user_id,
        config.occasion
    );
    provide_context(AppContext::new(StylistApi::new(config)));

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"AI Stylist"</h1>
                <BackendBadge />
            </header>

            <main class="main-content">
                <OutfitSuggestion />
                <WardrobeUpload />
            </main>
        </div>
    }
}
