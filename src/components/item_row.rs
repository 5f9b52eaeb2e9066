//! Item Row Component
//!
//! Individual item in the list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::controller;
use crate::render::RenderedRow;

/// A single item row. The markup is pre-escaped by `render`.
#[component]
pub fn ItemRow(row: RenderedRow) -> impl IntoView {
    let ctx = use_app_context();
    let id = row.id;

    view! {
        <li
            class=row.class
            inner_html=row.markup
            // The checkbox lives inside the markup; its change event bubbles here
            on:change=move |_| {
                let api = ctx.api();
                let store = ctx.store;
                let id = id.clone();
                spawn_local(async move {
                    controller::toggle_item(&api, &store, &id).await;
                });
            }
        ></li>
    }
}
