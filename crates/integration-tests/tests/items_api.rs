//! Tests for the item CRUD surface.

use axum::http::StatusCode;
use menu_api_integration_tests::{TEST_TOKEN, delete, get, post_json, put_json, send, test_app};
use serde_json::{Value, json};

async fn create_item(app: &axum::Router, body: &Value) -> Value {
    let (status, created) = send(app, post_json("/api/items", Some(TEST_TOKEN), body)).await;
    assert_eq!(status, StatusCode::CREATED);
    created
}

fn item_uri(item: &Value) -> String {
    let id = item["id"].as_str().expect("item has a string id");
    format!("/api/items/{id}")
}

#[tokio::test]
async fn create_returns_full_record() {
    let app = test_app();

    let created = create_item(
        &app,
        &json!({"name": "Burger", "category": "main", "price": 9.5}),
    )
    .await;

    assert!(created["id"].is_string());
    assert_eq!(created["name"], "Burger");
    assert_eq!(created["category"], "main");
    assert_eq!(created["price"], 9.5);
    assert_eq!(created["isAvailable"], true);
    assert_eq!(created["isDeleted"], false);
    // Fresh records carry identical creation and update stamps
    assert_eq!(created["createdAt"], created["updatedAt"]);
}

#[tokio::test]
async fn create_defaults_availability_to_true() {
    let app = test_app();

    let created = create_item(
        &app,
        &json!({"name": "Lemonade", "category": "drink", "price": 3.0}),
    )
    .await;
    assert_eq!(created["isAvailable"], true);

    let unavailable = create_item(
        &app,
        &json!({"name": "Cider", "category": "drink", "price": 4.0, "isAvailable": false}),
    )
    .await;
    assert_eq!(unavailable["isAvailable"], false);
}

#[tokio::test]
async fn create_rejects_duplicate_name() {
    let app = test_app();

    create_item(
        &app,
        &json!({"name": "Burger", "category": "main", "price": 9.5}),
    )
    .await;

    // Same name again
    let (status, _) = send(
        &app,
        post_json(
            "/api/items",
            Some(TEST_TOKEN),
            &json!({"name": "Burger", "category": "main", "price": 9.5}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Case and surrounding whitespace do not make it a different name
    let (status, _) = send(
        &app,
        post_json(
            "/api/items",
            Some(TEST_TOKEN),
            &json!({"name": "  BURGER ", "category": "side", "price": 1.0}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn create_rejects_unknown_category() {
    let app = test_app();

    let (status, _) = send(
        &app,
        post_json(
            "/api/items",
            Some(TEST_TOKEN),
            &json!({"name": "Burger", "category": "entree", "price": 9.5}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn list_is_in_creation_order() {
    let app = test_app();

    for (name, category, price) in [
        ("Soup", "side", 4.5),
        ("Steak", "main", 22.0),
        ("Tiramisu", "dessert", 6.5),
    ] {
        create_item(
            &app,
            &json!({"name": name, "category": category, "price": price}),
        )
        .await;
    }

    let (status, body) = send(&app, get("/api/items")).await;
    assert_eq!(status, StatusCode::OK);

    let names: Vec<&str> = body
        .as_array()
        .expect("listing is an array")
        .iter()
        .map(|item| item["name"].as_str().expect("name is a string"))
        .collect();
    assert_eq!(names, vec!["Soup", "Steak", "Tiramisu"]);
}

#[tokio::test]
async fn update_touches_only_provided_fields() {
    let app = test_app();

    let created = create_item(
        &app,
        &json!({"name": "Burger", "category": "main", "price": 9.5}),
    )
    .await;

    let (status, updated) = send(&app, put_json(&item_uri(&created), &json!({"price": 10.5}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["price"], 10.5);
    assert_eq!(updated["name"], "Burger");
    assert_eq!(updated["category"], "main");
    assert_eq!(updated["isAvailable"], true);
    assert_eq!(updated["createdAt"], created["createdAt"]);
}

#[tokio::test]
async fn update_applies_explicit_false() {
    let app = test_app();

    let created = create_item(
        &app,
        &json!({"name": "Burger", "category": "main", "price": 9.5}),
    )
    .await;

    let (status, updated) = send(
        &app,
        put_json(&item_uri(&created), &json!({"isAvailable": false})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["isAvailable"], false);
    assert_eq!(updated["price"], 9.5);
}

#[tokio::test]
async fn update_unknown_id_is_404() {
    let app = test_app();

    let (status, _) = send(
        &app,
        put_json(
            "/api/items/00000000-0000-4000-8000-000000000000",
            &json!({"price": 1.0}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // A malformed ID cannot name an item either
    let (status, _) = send(&app, put_json("/api/items/not-a-real-id", &json!({"price": 1.0}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_marks_item_and_keeps_it_queryable() {
    let app = test_app();

    let created = create_item(
        &app,
        &json!({"name": "Burger", "category": "main", "price": 9.5}),
    )
    .await;
    let uri = item_uri(&created);

    let (status, deleted) = send(&app, delete(&uri, Some(TEST_TOKEN))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["isDeleted"], true);
    assert_eq!(deleted["id"], created["id"]);

    // Gone from the default listing
    let (_, visible) = send(&app, get("/api/items")).await;
    assert_eq!(visible.as_array().map(Vec::len), Some(0));

    // Still there when deleted records are requested
    let (_, all) = send(&app, get("/api/items?include_deleted=true")).await;
    let all = all.as_array().expect("listing is an array");
    assert_eq!(all.len(), 1);
    assert_eq!(all.first().expect("one item")["isDeleted"], true);
}

#[tokio::test]
async fn delete_unknown_id_is_404() {
    let app = test_app();

    let (status, _) = send(
        &app,
        delete(
            "/api/items/00000000-0000-4000-8000-000000000000",
            Some(TEST_TOKEN),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn repeated_delete_is_a_noop_success() {
    let app = test_app();

    let created = create_item(
        &app,
        &json!({"name": "Burger", "category": "main", "price": 9.5}),
    )
    .await;
    let uri = item_uri(&created);

    let (status, first) = send(&app, delete(&uri, Some(TEST_TOKEN))).await;
    assert_eq!(status, StatusCode::OK);

    // The record is frozen: no further timestamp bump
    let (status, second) = send(&app, delete(&uri, Some(TEST_TOKEN))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["updatedAt"], first["updatedAt"]);
}

#[tokio::test]
async fn deleted_item_rejects_updates() {
    let app = test_app();

    let created = create_item(
        &app,
        &json!({"name": "Burger", "category": "main", "price": 9.5}),
    )
    .await;
    let uri = item_uri(&created);

    send(&app, delete(&uri, Some(TEST_TOKEN))).await;

    let (status, _) = send(&app, put_json(&uri, &json!({"price": 12.0}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn deleted_name_can_be_reused() {
    let app = test_app();

    let created = create_item(
        &app,
        &json!({"name": "Burger", "category": "main", "price": 9.5}),
    )
    .await;
    send(&app, delete(&item_uri(&created), Some(TEST_TOKEN))).await;

    let replacement = create_item(
        &app,
        &json!({"name": "burger", "category": "main", "price": 11.0}),
    )
    .await;
    assert_ne!(replacement["id"], created["id"]);
}

/// The end-to-end scenario: create, duplicate, update, delete, visibility.
#[tokio::test]
async fn full_item_lifecycle() {
    let app = test_app();

    // Create succeeds with a generated id
    let created = create_item(
        &app,
        &json!({"name": "Burger", "category": "main", "price": 9.5}),
    )
    .await;
    assert_eq!(created["isDeleted"], false);

    // Same name again conflicts
    let (status, _) = send(
        &app,
        post_json(
            "/api/items",
            Some(TEST_TOKEN),
            &json!({"name": "Burger", "category": "main", "price": 9.5}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Update the price without a token
    let uri = item_uri(&created);
    let (status, updated) = send(&app, put_json(&uri, &json!({"price": 10.5}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["price"], 10.5);
    assert_eq!(updated["name"], "Burger");
    assert_eq!(updated["createdAt"], created["createdAt"]);

    // Delete with a valid token
    let (status, deleted) = send(&app, delete(&uri, Some(TEST_TOKEN))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["isDeleted"], true);

    // Hidden from the default listing, present with include_deleted
    let (_, visible) = send(&app, get("/api/items")).await;
    assert_eq!(visible.as_array().map(Vec::len), Some(0));
    let (_, all) = send(&app, get("/api/items?include_deleted=true")).await;
    assert_eq!(all.as_array().map(Vec::len), Some(1));

    // The deleted record is frozen
    let (status, _) = send(&app, put_json(&uri, &json!({"price": 1.0}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
