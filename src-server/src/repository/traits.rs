//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Implementations can use SQLite, a REST key-value service, in-memory, etc.

use async_trait::async_trait;
use crate::domain::{DomainResult, ItemList};

/// Opaque key-value collaborator.
///
/// Assumed strongly consistent per key. No cross-key transactions.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Read the value stored under `key`, `None` if absent
    async fn get(&self, key: &str) -> DomainResult<Option<String>>;

    /// Replace the value stored under `key`
    async fn set(&self, key: &str, value: &str) -> DomainResult<()>;
}

/// Whole-list persistence.
///
/// Every gateway operation is one `load`, an in-memory change and at most one
/// `save`. Nothing here makes that sequence atomic.
#[async_trait]
pub trait ListStore: Send + Sync {
    /// Load the list; an absent value is an empty list
    async fn load(&self) -> DomainResult<ItemList>;

    /// Replace the stored list in full
    async fn save(&self, list: &ItemList) -> DomainResult<()>;
}
