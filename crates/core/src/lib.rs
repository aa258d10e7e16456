//! Menu API Core - Shared types library.
//!
//! This crate provides the domain types used across the menu API components:
//! - `server` - The HTTP service exposing the menu CRUD surface
//! - `integration-tests` - End-to-end tests against the assembled router
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP, no storage access.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - The `Item` record, its `ItemId`, and the `Category` enum

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
