//! Client Controller
//!
//! Keeps the local mirror in step with the server. Toggle is optimistic and
//! rolled back on failure; add and clear only touch the mirror once the server
//! has answered. Failures are logged and never retried.

use leptos::logging::error;

use crate::commands::ItemsApi;
use crate::models::ClearMode;
use crate::view_model::{MutationPhase, ViewModel};

/// Somewhere the view model lives: the reactive store in the app, a `RefCell`
/// in tests.
pub trait StateCell {
    fn update_state<R>(&self, f: impl FnOnce(&mut ViewModel) -> R) -> R;
}

/// Fetch the whole list and replace the mirror. Used on startup and refresh.
pub async fn load_items(api: &impl ItemsApi, state: &impl StateCell) -> MutationPhase {
    let result = api.list_items().await;
    match &result {
        Ok(items) => state.update_state(|vm| vm.replace_items(items.clone())),
        Err(e) => error!("Fetch error: {}", e),
    }
    MutationPhase::Pending.settle(&result)
}

/// Returns `Committed` when the caller should clear its input field.
pub async fn add_item(api: &impl ItemsApi, state: &impl StateCell, raw: &str) -> MutationPhase {
    let Some(text) = state.update_state(|vm| vm.begin_add(raw)) else {
        return MutationPhase::Idle;
    };

    let result = api.create_item(&text).await;
    if let Err(e) = &result {
        error!("Add error: {}", e);
    }
    state.update_state(|vm| vm.finish_add(&result));
    MutationPhase::Pending.settle(&result)
}

pub async fn toggle_item(api: &impl ItemsApi, state: &impl StateCell, id: &str) -> MutationPhase {
    // Optimistic: the view re-renders before the request goes out
    let flipped = state.update_state(|vm| vm.flip(id));

    let result = api.toggle_item(id).await;
    match &result {
        Ok(item) => state.update_state(|vm| vm.replace_item(item.clone())),
        Err(e) => {
            error!("Toggle error: {}", e);
            if flipped {
                state.update_state(|vm| {
                    vm.flip(id);
                });
            }
        }
    }
    MutationPhase::Pending.settle(&result)
}

/// `confirmed` is the answer to the "Clear all items?" prompt; it only
/// matters for `ClearMode::All`.
pub async fn clear_items(
    api: &impl ItemsApi,
    state: &impl StateCell,
    mode: ClearMode,
    confirmed: bool,
) -> MutationPhase {
    if mode == ClearMode::All && !confirmed {
        return MutationPhase::Idle;
    }

    let result = api.clear_items(mode).await;
    match &result {
        Ok(_) => state.update_state(|vm| vm.apply_clear(mode)),
        Err(e) => error!("Clear error: {}", e),
    }
    MutationPhase::Pending.settle(&result)
}
