//! HTTP middleware and extractors for the menu server.

pub mod auth;

pub use auth::RequireApiToken;
