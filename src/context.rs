//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::commands::StylistApi;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Backend client; the wasm client is not `Send`, so it lives in local storage
    api: StoredValue<StylistApi, LocalStorage>,
}

impl AppContext {
    pub fn new(api: StylistApi) -> Self {
        Self {
            api: StoredValue::new_local(api),
        }
    }

    /// Clone of the backend client, ready to move into a task
    pub fn api(&self) -> StylistApi {
        self.api.get_value()
    }
}

/// Get the app context, panicking if `App` did not provide it
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
