//! HTTP-level integration tests for `/api/v1/categories`.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, create, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: POST creates a category with defaults
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_category_with_defaults(pool: PgPool) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/categories",
        json!({ "name": "  Drama  " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["name"], "Drama", "name should be trimmed");
    assert_eq!(data["is_active"], true);
    assert!(data["description"].is_null());
    assert!(data["deleted_at"].is_null());
    assert_eq!(data["id"].as_str().unwrap().len(), 36);

    let id = data["id"].as_str().unwrap();
    let response = get(build_test_app(pool), &format!("/api/v1/categories/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["name"], "Drama");
}

// ---------------------------------------------------------------------------
// Test: invalid input returns 422 with per-field messages
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_category_validation(pool: PgPool) {
    let response = post_json(build_test_app(pool.clone()), "/api/v1/categories", json!({})).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "The given data was invalid.");
    assert_eq!(json["errors"]["name"], json!(["The name field is required."]));

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/categories",
        json!({ "name": "a".repeat(256), "is_active": "a" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(
        json["errors"]["name"],
        json!(["The name may not be greater than 255 characters."])
    );
    assert_eq!(
        json["errors"]["is_active"],
        json!(["The is active field must be true or false."])
    );

    assert_eq!(common::count_rows(&pool, "categories").await, 0);
}

// ---------------------------------------------------------------------------
// Test: PUT updates fields and clears description on explicit null
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_category(pool: PgPool) {
    let category = create(
        &pool,
        "categories",
        json!({ "name": "test", "description": "first", "is_active": false }),
    )
    .await;
    let id = category["id"].as_str().unwrap();
    assert_eq!(category["is_active"], false);

    let response = put_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/categories/{id}"),
        json!({ "name": "renamed", "is_active": true }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "renamed");
    assert_eq!(json["data"]["is_active"], true);
    assert_eq!(json["data"]["description"], "first", "omitted description is kept");

    let response = put_json(
        build_test_app(pool),
        &format!("/api/v1/categories/{id}"),
        json!({ "name": "renamed", "description": "" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["data"]["description"].is_null());
}

// ---------------------------------------------------------------------------
// Test: DELETE soft-deletes and hides the category
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_category(pool: PgPool) {
    let category = create(&pool, "categories", json!({ "name": "doomed" })).await;
    let uri = format!("/api/v1/categories/{}", category["id"].as_str().unwrap());

    let response = delete(build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");

    let response = delete(build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = put_json(build_test_app(pool.clone()), &uri, json!({ "name": "back" })).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(build_test_app(pool.clone()), "/api/v1/categories").await;
    assert!(body_json(response).await["data"].as_array().unwrap().is_empty());

    let response = get(build_test_app(pool), "/api/v1/categories?include_deleted=true").await;
    let json = body_json(response).await;
    let all = json["data"].as_array().unwrap();
    assert_eq!(all.len(), 1);
    assert!(all[0]["deleted_at"].is_string());
}

// ---------------------------------------------------------------------------
// Test: GET unknown id returns 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_unknown_category(pool: PgPool) {
    let id = uuid::Uuid::new_v4();
    let response = get(build_test_app(pool), &format!("/api/v1/categories/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"],
        format!("Category with id {id} not found")
    );
}

// ---------------------------------------------------------------------------
// Test: PUT unknown id returns 404 even with an invalid body
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_unknown_category_is_not_found_before_validation(pool: PgPool) {
    let id = uuid::Uuid::new_v4();
    let response = put_json(
        build_test_app(pool),
        &format!("/api/v1/categories/{id}"),
        json!({ "name": "" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}
