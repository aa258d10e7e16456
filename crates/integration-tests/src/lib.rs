//! Integration tests for the menu API.
//!
//! # Approach
//!
//! These tests assemble the real router - routes, extractors, state, and
//! the in-memory store - and drive it in-process with
//! `tower::ServiceExt::oneshot`. No sockets are bound and no external
//! services are required.
//!
//! # Test Categories
//!
//! - `welcome` - The root welcome route
//! - `auth` - Token gating of the mutating endpoints
//! - `items_api` - The CRUD surface: listing, creation, partial update,
//!   soft delete, and name uniqueness

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use secrecy::SecretString;
use serde_json::Value;
use tower::ServiceExt;

use menu_api_server::config::MenuConfig;
use menu_api_server::routes;
use menu_api_server::state::AppState;
use menu_api_server::store::InMemoryItemStore;

/// The API token every test app is configured with.
pub const TEST_TOKEN: &str = "vN3qX7kT1zR8mW5u";

/// Build a router backed by a fresh, empty in-memory store.
///
/// Each call returns an independent app; tests never share state.
#[must_use]
pub fn test_app() -> Router {
    let config = MenuConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        api_token: SecretString::from(TEST_TOKEN),
        sentry_dsn: None,
        sentry_environment: None,
    };

    let state = AppState::new(config, Arc::new(InMemoryItemStore::new()));
    routes::routes().with_state(state)
}

/// Send a request through the app and return status plus the parsed body.
///
/// JSON bodies come back as their parsed `Value`; plain-text error bodies
/// come back as `Value::String`; empty bodies as `Value::Null`.
///
/// # Panics
///
/// Panics if the request cannot be driven or the body cannot be read -
/// both indicate a broken test setup, not an application error.
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, body)
}

/// Build a GET request.
///
/// # Panics
///
/// Panics on a malformed URI.
#[must_use]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

/// Build a POST request with a JSON body and an optional raw
/// `Authorization` header value.
///
/// # Panics
///
/// Panics on a malformed URI or unserializable body.
#[must_use]
pub fn post_json(uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    json_request("POST", uri, token, body)
}

/// Build a PUT request with a JSON body (no token; update is not gated).
///
/// # Panics
///
/// Panics on a malformed URI or unserializable body.
#[must_use]
pub fn put_json(uri: &str, body: &Value) -> Request<Body> {
    json_request("PUT", uri, None, body)
}

/// Build a DELETE request with an optional raw `Authorization` header
/// value.
///
/// # Panics
///
/// Panics on a malformed URI.
#[must_use]
pub fn delete(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("DELETE").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, token);
    }
    builder
        .body(Body::empty())
        .expect("failed to build request")
}

fn json_request(method: &str, uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, token);
    }
    builder
        .body(Body::from(
            serde_json::to_vec(body).expect("failed to serialize body"),
        ))
        .expect("failed to build request")
}
