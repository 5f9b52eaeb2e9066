//! Item Commands
//!
//! Frontend bindings for the `/api/items` endpoint.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{ClearMode, ClearResponse, ErrorBody, Item};
use super::api_url;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct AddItemArgs<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct IdArgs<'a> {
    id: &'a str,
}

#[derive(Serialize)]
struct ClearArgs {
    mode: ClearMode,
}

// ========================
// Commands
// ========================

/// Server operations the controller depends on
#[async_trait(?Send)]
pub trait ItemsApi {
    async fn list_items(&self) -> Result<Vec<Item>, String>;
    async fn create_item(&self, text: &str) -> Result<Item, String>;
    async fn toggle_item(&self, id: &str) -> Result<Item, String>;
    async fn clear_items(&self, mode: ClearMode) -> Result<ClearResponse, String>;
}

#[derive(Clone)]
pub struct HttpItemsApi {
    client: reqwest::Client,
    url: String,
}

impl HttpItemsApi {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Endpoint resolved from the page origin or the build-time override
    pub fn from_location() -> Result<Self, String> {
        Ok(Self::new(api_url()?))
    }

    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T, String> {
        let response = request.send().await.map_err(|e| e.to_string())?;
        let status = response.status();
        if !status.is_success() {
            let reason = match response.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => status.canonical_reason().unwrap_or("request failed").to_string(),
            };
            return Err(format!("{}: {}", status.as_u16(), reason));
        }
        response.json::<T>().await.map_err(|e| format!("Response error: {}", e))
    }
}

#[async_trait(?Send)]
impl ItemsApi for HttpItemsApi {
    async fn list_items(&self) -> Result<Vec<Item>, String> {
        self.send(self.client.get(&self.url)).await
    }

    async fn create_item(&self, text: &str) -> Result<Item, String> {
        self.send(self.client.post(&self.url).json(&AddItemArgs { text })).await
    }

    async fn toggle_item(&self, id: &str) -> Result<Item, String> {
        self.send(self.client.patch(&self.url).json(&IdArgs { id })).await
    }

    async fn clear_items(&self, mode: ClearMode) -> Result<ClearResponse, String> {
        self.send(self.client.delete(&self.url).json(&ClearArgs { mode })).await
    }
}
