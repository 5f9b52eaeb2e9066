//! Shopping List Frontend App
//!
//! Main application component.

use leptos::logging::error;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands::HttpItemsApi;
use crate::components::{ItemList, ListActions, NewItemForm};
use crate::context::AppContext;
use crate::controller;
use crate::view_model::ViewModel;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(ViewModel::new(Vec::new()));

    let api = match HttpItemsApi::from_location() {
        Ok(api) => api,
        Err(e) => {
            error!("API endpoint unavailable: {}", e);
            return view! { <p class="fatal">"Shopping list unavailable"</p> }.into_any();
        }
    };

    let ctx = AppContext::new(store, api);
    provide_context(ctx);

    // Initial load; failures are only logged
    let initial_api = ctx.api();
    spawn_local(async move {
        controller::load_items(&initial_api, &store).await;
    });

    view! {
        <main class="container">
            <h1>"Shopping List"</h1>
            <NewItemForm />
            <ItemList />
            <ListActions />
        </main>
    }
    .into_any()
}
