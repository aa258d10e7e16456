//! HTTP route handlers for the menu server.
//!
//! # Route Structure
//!
//! ```text
//! GET    /                            - Welcome message
//! GET    /health                      - Health check (added in main)
//!
//! # Items
//! GET    /api/items?include_deleted=bool - List items
//! POST   /api/items                   - Create item (requires API token)
//! PUT    /api/items/{id}              - Partial update
//! DELETE /api/items/{id}              - Soft delete (requires API token)
//! ```

pub mod home;
pub mod items;

use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

/// Create the item API router.
pub fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(items::index).post(items::create))
        .route("/{id}", put(items::update).delete(items::remove))
}

/// Create all routes for the menu server.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Welcome message
        .route("/", get(home::home))
        // Item routes
        .nest("/api/items", item_routes())
}
