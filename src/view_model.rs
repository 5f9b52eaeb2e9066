//! Client View Model
//!
//! The local mirror of the list plus the add-in-flight flag. Every mutation
//! the controller makes goes through these methods, so the transitions can be
//! tested without a browser.

use reactive_stores::Store;
use crate::models::{ClearMode, Item};

/// Lifecycle of one mutating user action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationPhase {
    /// Nothing sent (guard rejected the action)
    Idle,
    /// Request outstanding
    Pending,
    /// Server confirmed; local state reflects it
    Committed,
    /// Request failed; local state is back to what it was before
    RolledBack,
}

impl MutationPhase {
    /// Resolve a pending action from its request result.
    pub fn settle<T, E>(self, result: &Result<T, E>) -> Self {
        match (self, result) {
            (MutationPhase::Pending, Ok(_)) => MutationPhase::Committed,
            (MutationPhase::Pending, Err(_)) => MutationPhase::RolledBack,
            (other, _) => other,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ViewModel {
    /// Items in server insertion order
    pub items: Vec<Item>,
    /// An add request is outstanding
    pub is_submitting: bool,
}

impl ViewModel {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            is_submitting: false,
        }
    }

    pub fn replace_items(&mut self, items: Vec<Item>) {
        self.items = items;
    }

    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn has_checked(&self) -> bool {
        self.items.iter().any(|item| item.checked)
    }

    /// Start an add. Returns the trimmed text to send, or `None` when the
    /// text is blank or another add is still in flight.
    pub fn begin_add(&mut self, raw: &str) -> Option<String> {
        let text = raw.trim();
        if text.is_empty() || self.is_submitting {
            return None;
        }
        self.is_submitting = true;
        Some(text.to_string())
    }

    /// The item is appended only once the server has returned it.
    pub fn finish_add<E>(&mut self, result: &Result<Item, E>) {
        if let Ok(item) = result {
            self.items.push(item.clone());
        }
        self.is_submitting = false;
    }

    /// Flip `checked` locally. Returns false if the id isn't mirrored.
    pub fn flip(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.checked = !item.checked;
                true
            }
            None => false,
        }
    }

    /// Adopt the server's copy of one item
    pub fn replace_item(&mut self, updated: Item) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == updated.id) {
            *item = updated;
        }
    }

    pub fn apply_clear(&mut self, mode: ClearMode) {
        match mode {
            ClearMode::Checked => self.items.retain(|item| !item.checked),
            ClearMode::All => self.items.clear(),
        }
    }
}
