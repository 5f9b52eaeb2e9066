//! List Actions Component
//!
//! Refresh, "clear checked" and "clear all" controls.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::controller;
use crate::models::ClearMode;
use crate::render::render;

#[component]
pub fn ListActions() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let show_clear_checked = Memo::new(move |_| render(&store.get()).show_clear_checked);
    let show_clear_all = Memo::new(move |_| render(&store.get()).show_clear_all);

    let refresh = move |_| {
        let api = ctx.api();
        spawn_local(async move {
            controller::load_items(&api, &store).await;
        });
    };

    let clear = move |mode: ClearMode, confirmed: bool| {
        let api = ctx.api();
        spawn_local(async move {
            controller::clear_items(&api, &store, mode, confirmed).await;
        });
    };

    view! {
        <div class="list-actions">
            <button id="refresh-btn" class="refresh-btn" on:click=refresh>"Refresh"</button>
            <div
                id="clear-checked-btn"
                style:display=move || if show_clear_checked.get() { "block" } else { "none" }
            >
                <button class="clear-btn" on:click=move |_| clear(ClearMode::Checked, false)>
                    "Clear checked"
                </button>
            </div>
            <div
                id="clear-all-btn"
                style:display=move || if show_clear_all.get() { "block" } else { "none" }
            >
                // The inline ✓ is the confirmation
                <DeleteConfirmButton
                    button_class="clear-btn danger"
                    label="Clear all"
                    prompt="Clear all items?"
                    on_confirm=move |_| clear(ClearMode::All, true)
                />
            </div>
        </div>
    }
}
