//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::commands::HttpItemsApi;
use crate::store::AppStore;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The list mirror
    pub store: AppStore,
    /// HTTP client, kept in local storage because it never leaves the UI thread
    api: StoredValue<HttpItemsApi, LocalStorage>,
}

impl AppContext {
    pub fn new(store: AppStore, api: HttpItemsApi) -> Self {
        Self {
            store,
            api: StoredValue::new_local(api),
        }
    }

    /// Owned client handle for use inside `spawn_local`
    pub fn api(&self) -> HttpItemsApi {
        self.api.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
