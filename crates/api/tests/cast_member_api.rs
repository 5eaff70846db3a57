//! HTTP-level integration tests for `/api/v1/cast_members`.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, create, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: POST accepts both member types, string or integer
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_cast_members(pool: PgPool) {
    let director = create(&pool, "cast_members", json!({ "name": "Ana", "type": 0 })).await;
    assert_eq!(director["type"], 0);
    assert_eq!(director["name"], "Ana");

    let actor = create(&pool, "cast_members", json!({ "name": "Bia", "type": "1" })).await;
    assert_eq!(actor["type"], 1);

    let response = get(build_test_app(pool), "/api/v1/cast_members").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Test: type must be a known member type
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_cast_member_validation(pool: PgPool) {
    let response = post_json(build_test_app(pool.clone()), "/api/v1/cast_members", json!({})).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["errors"]["name"], json!(["The name field is required."]));
    assert_eq!(json["errors"]["type"], json!(["The type field is required."]));

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/cast_members",
        json!({ "name": "n", "type": 2 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body_json(response).await["errors"]["type"],
        json!(["The selected type is invalid."])
    );

    assert_eq!(common::count_rows(&pool, "cast_members").await, 0);
}

// ---------------------------------------------------------------------------
// Test: PUT then DELETE
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_and_delete_cast_member(pool: PgPool) {
    let member = create(&pool, "cast_members", json!({ "name": "Ana", "type": 0 })).await;
    let uri = format!("/api/v1/cast_members/{}", member["id"].as_str().unwrap());

    let response = put_json(
        build_test_app(pool.clone()),
        &uri,
        json!({ "name": "Ana Maria", "type": 1 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Ana Maria");
    assert_eq!(json["data"]["type"], 1);

    let response = delete(build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(build_test_app(pool), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
