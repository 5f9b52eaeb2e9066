//! List Repository
//!
//! Stores the whole `ItemList` as one JSON array under a single key.

use async_trait::async_trait;
use crate::domain::{DomainResult, ItemList};
use super::traits::{KvStore, ListStore};

/// Key used when none is configured
pub const DEFAULT_LIST_KEY: &str = "shopping_items";

pub struct KvListStore<S> {
    kv: S,
    key: String,
}

impl<S: KvStore> KvListStore<S> {
    pub fn new(kv: S, key: impl Into<String>) -> Self {
        Self { kv, key: key.into() }
    }

    pub fn with_default_key(kv: S) -> Self {
        Self::new(kv, DEFAULT_LIST_KEY)
    }

    #[cfg(test)]
    pub(crate) fn key(&self) -> &str {
        &self.key
    }

    #[cfg(test)]
    pub(crate) fn kv(&self) -> &S {
        &self.kv
    }
}

#[async_trait]
impl<S: KvStore> ListStore for KvListStore<S> {
    async fn load(&self) -> DomainResult<ItemList> {
        match self.kv.get(&self.key).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(ItemList::new()),
        }
    }

    async fn save(&self, list: &ItemList) -> DomainResult<()> {
        let raw = serde_json::to_string(list)?;
        self.kv.set(&self.key, &raw).await?;
        tracing::debug!(key = %self.key, items = list.len(), "list saved");
        Ok(())
    }
}
