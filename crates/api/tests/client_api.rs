//! HTTP-level integration tests for the client endpoints, including the
//! ownership reconciliation paths.

mod common;

use axum::http::StatusCode;
use common::{body_json, body_text, delete, get, post_json, put_json};
use serde_json::json;

fn horse_value(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "owner": "test",
        "consumptionList": []
    })
}

#[tokio::test]
async fn get_all_clients_returns_empty_list() {
    let app = common::build_test_app();
    let response = get(app, "/clients/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn add_new_client_returns_201() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/clients/",
        json!({"name": "Einstaller", "ownsHorse": []}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert!(!created["id"].as_str().unwrap().is_empty());
    assert_eq!(created["name"], "Einstaller");
    assert_eq!(created["ownsHorse"], json!([]));
}

#[tokio::test]
async fn add_new_client_with_empty_name_returns_400() {
    let app = common::build_test_app();
    let response = post_json(app, "/clients/", json!({"name": "", "ownsHorse": []})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = body_json(response).await;
    assert_eq!(error["errorMessage"], "Name must not be empty");
    assert_eq!(error["fieldName"], "name");
}

#[tokio::test]
async fn delete_client_returns_204() {
    let app = common::build_test_app();
    let created = body_json(
        post_json(app.clone(), "/clients/", json!({"name": "Name", "ownsHorse": []})).await,
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let response = delete(app, &format!("/clients/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn delete_unknown_client_returns_404() {
    let app = common::build_test_app();
    let response = delete(app, "/clients/1").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn put_client_with_existing_id_returns_200() {
    let app = common::build_test_app();
    let created = body_json(
        post_json(app.clone(), "/clients/", json!({"name": "Name", "ownsHorse": []})).await,
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let response = put_json(
        app,
        "/clients/",
        json!({"id": id, "name": "Lord Voldemort", "ownsHorse": []}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["id"], *id);
    assert_eq!(updated["name"], "Lord Voldemort");
}

#[tokio::test]
async fn put_client_with_unknown_id_returns_201() {
    let app = common::build_test_app();
    let response = put_json(
        app,
        "/clients/",
        json!({"id": "6b5a9ae3-4edf-4c5f-9095-3e6f031cb732", "name": "Client", "ownsHorse": []}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn put_client_with_empty_name_returns_400() {
    let app = common::build_test_app();
    let response = put_json(app, "/clients/", json!({"id": "1", "name": "", "ownsHorse": []})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn put_client_with_duplicate_owned_horse_returns_400() {
    let app = common::build_test_app();
    let horse = horse_value("b88bc0b4-0638-488a-8b3d-3990dd61bd3c", "test");
    let response = put_json(
        app,
        "/clients/",
        json!({
            "id": "6b5a9ae3-4edf-4c5f-9095-3e6f031cb732",
            "name": "Client",
            "ownsHorse": [horse.clone(), horse]
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_text(response).await,
        "A horse can only be owned by one person"
    );
}

#[tokio::test]
async fn put_client_with_horse_owned_by_another_client_returns_400() {
    let app = common::build_test_app();
    let horse = horse_value("h1", "Hansi");

    // First client takes ownership of the horse.
    post_json(
        app.clone(),
        "/clients/",
        json!({"name": "First", "ownsHorse": [horse.clone()]}),
    )
    .await;

    // A different client claims the same horse value.
    let response = put_json(
        app,
        "/clients/",
        json!({"id": "other-client", "name": "Second", "ownsHorse": [horse]}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_text(response).await,
        "One or more horses are already owned"
    );
}

#[tokio::test]
async fn resubmitting_owned_horse_under_same_client_succeeds() {
    let app = common::build_test_app();
    let horse = horse_value("h1", "Hansi");

    let created = body_json(
        post_json(
            app.clone(),
            "/clients/",
            json!({"name": "Owner", "ownsHorse": [horse.clone()]}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_str().unwrap();

    // Unchanged re-save must not trip the conflict scan.
    let response = put_json(
        app,
        "/clients/",
        json!({"id": id, "name": "Owner", "ownsHorse": [horse]}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
}
