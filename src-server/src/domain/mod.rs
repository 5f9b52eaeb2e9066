//! Domain Layer
//!
//! Contains the list entities and core abstractions.
//! No I/O happens here.

mod entity;
mod item;

pub use entity::{Entity, DomainError, DomainResult};
pub use item::{ClearMode, Item, ItemList};
