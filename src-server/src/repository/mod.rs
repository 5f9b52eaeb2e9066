//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod db;
mod memory;
mod rest;
mod list_repo;


pub use traits::{KvStore, ListStore};
pub use db::SqliteKvStore;
pub use memory::MemoryKvStore;
pub use rest::RestKvStore;
pub use list_repo::{KvListStore, DEFAULT_LIST_KEY};
