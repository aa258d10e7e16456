//! Welcome route.

use axum::Json;
use serde::Serialize;

/// Response for the API root.
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

/// Greet callers at the API root.
pub async fn home() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the menu API",
    })
}
