//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod item_list;
mod item_row;
mod list_actions;
mod new_item_form;

pub use delete_confirm_button::DeleteConfirmButton;
pub use item_list::ItemList;
pub use item_row::ItemRow;
pub use list_actions::ListActions;
pub use new_item_form::NewItemForm;
