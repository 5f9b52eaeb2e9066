//! REST Key-Value Store
//!
//! Talks to a Redis-over-REST service (Vercel KV / Upstash protocol):
//! `GET {url}/get/{key}` and `POST {url}/set/{key}` with a bearer token,
//! both answering `{"result": ...}` or `{"error": "..."}`.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Deserialize;

use crate::domain::{DomainError, DomainResult};
use super::traits::KvStore;

#[derive(Debug, Deserialize)]
struct KvResponse {
    #[serde(default)]
    result: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Clone)]
pub struct RestKvStore {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl RestKvStore {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
            token: token.into(),
        }
    }

    fn command_url(&self, command: &str, key: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            command,
            utf8_percent_encode(key, NON_ALPHANUMERIC)
        )
    }

    async fn decode(response: reqwest::Response) -> DomainResult<Option<serde_json::Value>> {
        let status = response.status();
        let body: KvResponse = response.json().await?;
        if let Some(err) = body.error {
            return Err(DomainError::Internal(format!("kv service ({}): {}", status, err)));
        }
        if !status.is_success() {
            return Err(DomainError::Internal(format!("kv service returned {}", status)));
        }
        Ok(body.result)
    }
}

#[async_trait]
impl KvStore for RestKvStore {
    async fn get(&self, key: &str) -> DomainResult<Option<String>> {
        let response = self
            .client
            .get(self.command_url("get", key))
            .bearer_auth(&self.token)
            .send()
            .await?;

        match Self::decode(response).await? {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(serde_json::Value::String(raw)) => Ok(Some(raw)),
            // Values written by other clients may come back already decoded
            Some(other) => Ok(Some(other.to_string())),
        }
    }

    async fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        let response = self
            .client
            .post(self.command_url("set", key))
            .bearer_auth(&self.token)
            .body(value.to_string())
            .send()
            .await?;

        Self::decode(response).await?;
        Ok(())
    }
}
