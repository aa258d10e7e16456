//! Menu item CRUD handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use menu_api_core::{Category, Item, ItemId};

use crate::error::{AppError, Result};
use crate::middleware::auth::RequireApiToken;
use crate::state::AppState;
use crate::store::{ItemPatch, NewItem};

/// Query parameters for the item listing.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub include_deleted: bool,
}

/// Request body for creating an item.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    pub name: String,
    pub category: Category,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default = "default_available")]
    pub is_available: bool,
}

const fn default_available() -> bool {
    true
}

/// Request body for partially updating an item.
///
/// Fields absent from the payload are left untouched; fields present with a
/// falsy value (`"isAvailable": false`, `"price": 0`) are applied.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    pub name: Option<String>,
    pub category: Option<Category>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    pub is_available: Option<bool>,
}

impl From<UpdateItemRequest> for ItemPatch {
    fn from(body: UpdateItemRequest) -> Self {
        Self {
            name: body.name,
            category: body.category,
            price: body.price,
            is_available: body.is_available,
        }
    }
}

/// List menu items in insertion order.
///
/// Soft-deleted items are excluded unless `include_deleted=true`.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Item>>> {
    let items = state.store().list(query.include_deleted)?;
    Ok(Json(items))
}

/// Create a menu item. Requires the API token.
///
/// # Errors
///
/// Returns 401 for a missing or invalid token and 409 when a non-deleted
/// item already holds the normalized name.
pub async fn create(
    _auth: RequireApiToken,
    State(state): State<AppState>,
    Json(body): Json<CreateItemRequest>,
) -> Result<(StatusCode, Json<Item>)> {
    let item = state.store().create(NewItem {
        name: body.name,
        category: body.category,
        price: body.price,
        is_available: body.is_available,
    })?;

    tracing::info!(id = %item.id, name = %item.name, "item created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// Apply a partial update to an item.
///
/// # Errors
///
/// Returns 404 for an unknown ID and 400 when the item is soft-deleted.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateItemRequest>,
) -> Result<Json<Item>> {
    let id = parse_id(&id)?;
    let item = state.store().update(id, body.into())?;
    Ok(Json(item))
}

/// Soft-delete an item. Requires the API token.
///
/// Returns the deleted record; it stays queryable via
/// `include_deleted=true`.
///
/// # Errors
///
/// Returns 401 for a missing or invalid token and 404 for an unknown ID.
pub async fn remove(
    _auth: RequireApiToken,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Item>> {
    let id = parse_id(&id)?;
    let item = state.store().soft_delete(id)?;

    tracing::info!(id = %item.id, "item soft-deleted");
    Ok(Json(item))
}

/// Parse a path segment as an [`ItemId`].
///
/// Anything that is not a well-formed ID cannot name an item, so it maps to
/// the same 404 an unknown ID gets.
fn parse_id(raw: &str) -> Result<ItemId> {
    raw.parse()
        .map_err(|_| AppError::NotFound("Item not found".to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_defaults_availability() {
        let body: CreateItemRequest =
            serde_json::from_str(r#"{"name":"Burger","category":"main","price":9.5}"#).unwrap();
        assert!(body.is_available);
        assert_eq!(body.price, Decimal::new(95, 1));
    }

    #[test]
    fn test_create_request_explicit_availability() {
        let body: CreateItemRequest = serde_json::from_str(
            r#"{"name":"Burger","category":"main","price":9.5,"isAvailable":false}"#,
        )
        .unwrap();
        assert!(!body.is_available);
    }

    #[test]
    fn test_create_request_rejects_bad_category() {
        let result = serde_json::from_str::<CreateItemRequest>(
            r#"{"name":"Burger","category":"entree","price":9.5}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_update_request_distinguishes_absent_from_falsy() {
        let absent: UpdateItemRequest = serde_json::from_str("{}").unwrap();
        assert!(absent.is_available.is_none());
        assert!(absent.price.is_none());

        let falsy: UpdateItemRequest =
            serde_json::from_str(r#"{"isAvailable":false,"price":0}"#).unwrap();
        assert_eq!(falsy.is_available, Some(false));
        assert_eq!(falsy.price, Some(Decimal::ZERO));
    }

    #[test]
    fn test_update_request_partial_fields() {
        let body: UpdateItemRequest = serde_json::from_str(r#"{"price":10.5}"#).unwrap();
        let patch = ItemPatch::from(body);

        assert_eq!(patch.price, Some(Decimal::new(105, 1)));
        assert!(patch.name.is_none());
        assert!(patch.category.is_none());
        assert!(patch.is_available.is_none());
    }

    #[test]
    fn test_list_query_defaults_to_hiding_deleted() {
        let query: ListQuery = serde_json::from_str("{}").unwrap();
        assert!(!query.include_deleted);
    }

    #[test]
    fn test_parse_id_rejects_garbage() {
        let err = parse_id("not-a-uuid").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let id = ItemId::generate();
        assert_eq!(parse_id(&id.to_string()).unwrap(), id);
    }
}
