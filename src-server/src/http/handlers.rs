//! Handlers for `/api/items`
//!
//! Thin adapters: decode the body, run the operation, pick the status code.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::commands::{self, AddItemRequest, ClearItemsRequest, ToggleItemRequest};
use super::error::ApiError;
use super::AppState;

/// Missing or undecodable bodies fall back to `{}` and let validation decide.
fn parse_body<T: DeserializeOwned + Default>(body: &Bytes) -> T {
    if body.is_empty() {
        return T::default();
    }
    serde_json::from_slice(body).unwrap_or_else(|err| {
        tracing::debug!(%err, "unreadable request body, treating as empty");
        T::default()
    })
}

pub async fn list_items(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let items = commands::list_items(state.store.as_ref()).await?;
    Ok(Json(items))
}

pub async fn add_item(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let req: AddItemRequest = parse_body(&body?);
    let item = commands::add_item(state.store.as_ref(), req).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn toggle_item(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let req: ToggleItemRequest = parse_body(&body?);
    let item = commands::toggle_item(state.store.as_ref(), req).await?;
    Ok(Json(item))
}

pub async fn clear_items(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let req: ClearItemsRequest = parse_body(&body?);
    let resp = commands::clear_items(state.store.as_ref(), req).await?;
    Ok(Json(resp))
}

pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
