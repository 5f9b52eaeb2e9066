//! New Item Form Component
//!
//! Text input plus submit button for adding items.

use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::controller;
use crate::view_model::{MutationPhase, ViewModelStoreFields};

/// Form for creating new items
#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let input_ref: NodeRef<Input> = NodeRef::new();

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(input) = input_ref.get() else { return };
        let raw = input.value();
        let api = ctx.api();

        spawn_local(async move {
            if controller::add_item(&api, &store, &raw).await == MutationPhase::Committed {
                input.set_value("");
                let _ = input.focus();
            }
        });
    };

    view! {
        <form id="add-form" class="new-item-form" on:submit=create_item>
            <div class="new-item-row">
                <input
                    id="item-input"
                    type="text"
                    placeholder="Add an item..."
                    autocomplete="off"
                    node_ref=input_ref
                />
                <button type="submit" disabled=move || store.is_submitting().get()>"Add"</button>
            </div>
        </form>
    }
}
