//! Item List Component
//!
//! Rebuilds the whole list from the store on every change.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::context::use_app_context;
use crate::render::render;

#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_app_context().store;
    let view_state = Memo::new(move |_| render(&store.get()));

    view! {
        <ul id="items-list" class="items-list">
            {move || {
                view_state
                    .get()
                    .rows
                    .into_iter()
                    .map(|row| view! { <ItemRow row=row /> })
                    .collect_view()
            }}
        </ul>
        <p id="empty-state" class="empty-state" class:hidden=move || !view_state.get().show_empty_state>
            "Your list is empty"
        </p>
    }
}
