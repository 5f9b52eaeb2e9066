//! Server configuration from environment variables.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context};

use crate::repository::DEFAULT_LIST_KEY;

const DEFAULT_BIND: &str = "0.0.0.0:3000";
const DEFAULT_SQLITE_PATH: &str = "shopping_list.db";

/// Which key-value backend holds the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    Sqlite { path: PathBuf },
    Rest { url: String, token: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub backend: StoreBackend,
    pub list_key: String,
    pub log_json: bool,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable source; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind_raw = var("SHOPPING_LIST_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw
            .parse::<SocketAddr>()
            .with_context(|| format!("invalid SHOPPING_LIST_BIND: {}", bind_raw))?;

        let backend = match var("SHOPPING_LIST_STORE").as_deref().unwrap_or("memory") {
            "memory" => StoreBackend::Memory,
            "sqlite" => StoreBackend::Sqlite {
                path: PathBuf::from(
                    var("SHOPPING_LIST_SQLITE_PATH").unwrap_or_else(|| DEFAULT_SQLITE_PATH.to_string()),
                ),
            },
            "rest" => StoreBackend::Rest {
                url: var("KV_REST_API_URL").ok_or_else(|| anyhow!("KV_REST_API_URL is required for the rest store"))?,
                token: var("KV_REST_API_TOKEN").ok_or_else(|| anyhow!("KV_REST_API_TOKEN is required for the rest store"))?,
            },
            other => bail!("unknown SHOPPING_LIST_STORE: {} (expected memory, sqlite or rest)", other),
        };

        let list_key = var("SHOPPING_LIST_KEY").unwrap_or_else(|| DEFAULT_LIST_KEY.to_string());

        let log_json = matches!(
            var("SHOPPING_LIST_LOG_JSON").as_deref(),
            Some("1" | "true" | "TRUE" | "yes" | "YES")
        );

        Ok(Self {
            bind,
            backend,
            list_key,
            log_json,
        })
    }
}
