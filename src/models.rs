//! Frontend Models
//!
//! Data structures matching the server's JSON contract.

use serde::{Deserialize, Serialize};

/// Item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub text: String,
    pub checked: bool,
    pub created_at: i64,
}

/// Which items a clear request removes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClearMode {
    Checked,
    All,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearResponse {
    pub cleared: ClearMode,
}

/// Error body returned by the server on 4xx/5xx
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
