//! Delete Confirm Button Component
//!
//! Inline confirmation for destructive actions.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows `label` initially. When clicked, shows `prompt` with ✓/✗ buttons;
/// `on_confirm` runs only after ✓.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] label: String,
    #[prop(into)] prompt: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);

    view! {
        <Show when=move || !confirm_delete.get()>
            <button
                class=button_class.clone()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirm_delete.set(true);
                }
            >
                {label.clone()}
            </button>
        </Show>
        <Show when=move || confirm_delete.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
