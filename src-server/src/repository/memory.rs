//! In-memory key-value store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::DomainResult;
use super::traits::KvStore;

#[derive(Clone, Default)]
pub struct MemoryKvStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KvStore for MemoryKvStore {
    async fn get(&self, key: &str) -> DomainResult<Option<String>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        self.entries.lock().await.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
