//! HTTP Layer
//!
//! One route, `/api/items`, dispatched by method.

mod error;
mod handlers;
mod middleware;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::repository::ListStore;

pub use error::ApiError;
pub use middleware::ALLOWED_METHODS;

pub const ITEMS_PATH: &str = "/api/items";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ListStore>,
}

impl AppState {
    pub fn new(store: impl ListStore + 'static) -> Self {
        Self { store: Arc::new(store) }
    }
}

pub fn build_router(state: AppState) -> Router {
    let items = get(handlers::list_items)
        .post(handlers::add_item)
        .patch(handlers::toggle_item)
        .delete(handlers::clear_items)
        .options(handlers::preflight)
        .fallback(handlers::method_not_allowed);

    Router::new()
        .route(ITEMS_PATH, items)
        .layer(axum::middleware::from_fn(middleware::cors_headers))
        .layer(axum::middleware::from_fn(middleware::request_tracing))
        .with_state(state)
}
