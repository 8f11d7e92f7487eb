//! HTTP-level integration tests for the `/api/folders` resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, post_untyped, put_json, seeded_app};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_folders(pool: PgPool) {
    let app = seeded_app(&pool).await;
    let response = get(app, "/api/folders").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(
        json,
        json!([
            {"id": 100, "name": "Archive"},
            {"id": 101, "name": "Drafts"},
            {"id": 102, "name": "Personal"},
            {"id": 103, "name": "Work"}
        ])
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_folder_returns_single_object(pool: PgPool) {
    let app = seeded_app(&pool).await;
    let response = get(app, "/api/folders/101").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"id": 101, "name": "Drafts"}));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_missing_folder_returns_404(pool: PgPool) {
    let app = seeded_app(&pool).await;
    let response = get(app, "/api/folders/9999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["message"],
        "Folder with id 9999 not found"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_folder(pool: PgPool) {
    let app = seeded_app(&pool).await;
    let response = post_json(app.clone(), "/api/folders", json!({"name": "Recipes"})).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response.headers()["location"].to_str().unwrap().to_string();
    let created = body_json(response).await;
    assert_eq!(created["name"], "Recipes");
    assert_eq!(location, format!("/api/folders/{}", created["id"]));

    let fetched = body_json(get(app, &location).await).await;
    assert_eq!(fetched, created);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_folder_without_name_returns_400(pool: PgPool) {
    let app = seeded_app(&pool).await;
    let response = post_json(app, "/api/folders", json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["message"],
        "Missing `name` in request body"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_folder(pool: PgPool) {
    let app = seeded_app(&pool).await;
    let response = put_json(app.clone(), "/api/folders/103", json!({"name": "Office"})).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"id": 103, "name": "Office"}));

    // The new name shows up on notes filed in the folder.
    let note = body_json(get(app, "/api/notes/1005").await).await;
    assert_eq!(note["folderName"], "Office");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_folder_validation_and_missing(pool: PgPool) {
    let app = seeded_app(&pool).await;

    let response = put_json(app.clone(), "/api/folders/100", json!({"name": ""})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = put_json(app, "/api/folders/9999", json!({"name": "Nope"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_folder_always_204(pool: PgPool) {
    let app = seeded_app(&pool).await;

    let response = delete(app.clone(), "/api/folders/100").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete(app.clone(), "/api/folders/100").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Notes from the deleted folder remain, unfiled.
    let note = body_json(get(app, "/api/notes/1000").await).await;
    assert_eq!(note["folderId"], serde_json::Value::Null);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_folder_without_content_type_reports_missing_name(pool: PgPool) {
    let app = seeded_app(&pool).await;
    let response = post_untyped(app.clone(), "/api/folders", "").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["status"], 400);
    assert_eq!(json["message"], "Missing `name` in request body");

    // Nothing was written.
    let json = body_json(get(app, "/api/folders").await).await;
    assert_eq!(json.as_array().unwrap().len(), 4);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_folder_with_wrongly_typed_name_returns_json_400(pool: PgPool) {
    let app = seeded_app(&pool).await;
    let response = post_json(app, "/api/folders", json!({"name": 5})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["status"], 400);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["message"].as_str().unwrap().contains("name"));
}
