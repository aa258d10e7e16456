//! Authentication extractor for token-gated routes.
//!
//! Create and delete require the static API token; list and update do not.
//! The `Authorization` header value is compared verbatim against the
//! configured secret - there is no `Bearer ` prefix handling, and the
//! comparison is plain string equality (not constant-time).

use axum::{extract::FromRequestParts, http::header, http::request::Parts};
use secrecy::ExposeSecret;

use crate::error::AppError;
use crate::state::AppState;

/// Extractor that requires the static API token.
///
/// Rejects with 401 when the `Authorization` header is missing or does not
/// match the configured secret. Rejection happens before the handler body
/// runs, so a failed check never touches the store.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     _auth: RequireApiToken,
///     State(state): State<AppState>,
/// ) -> impl IntoResponse {
///     // only reached with a valid token
/// }
/// ```
pub struct RequireApiToken;

impl FromRequestParts<AppState> for RequireApiToken {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("missing Authorization header".to_string()))?;

        if token != state.config().api_token.expose_secret() {
            return Err(AppError::Unauthorized("invalid API token".to_string()));
        }

        Ok(Self)
    }
}
