//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::controller::StateCell;
use crate::view_model::ViewModel;

/// Type alias for the store
pub type AppStore = Store<ViewModel>;

impl StateCell for AppStore {
    fn update_state<R>(&self, f: impl FnOnce(&mut ViewModel) -> R) -> R {
        // Dropping the guard notifies subscribers, which re-renders the list
        let mut guard = self.write();
        f(&mut *guard)
    }
}
