// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User registration and listing tests.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_create_user_returns_id_and_username() {
    let (app, _state) = common::create_test_app();

    let (status, json) = common::post_form(&app, "/api/users", "username=fcc_test").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["username"], "fcc_test");
    let id = json["id"].as_str().unwrap();
    assert_eq!(id.len(), 24);
    assert_eq!(json.as_object().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_users_in_registration_order() {
    let (app, _state) = common::create_test_app();

    let alice = common::create_user(&app, "alice").await;
    let bob = common::create_user(&app, "bob").await;

    let (status, json) = common::get_json(&app, "/api/users").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!([
            { "id": alice, "username": "alice" },
            { "id": bob, "username": "bob" },
        ])
    );
}

#[tokio::test]
async fn test_list_users_empty() {
    let (app, _state) = common::create_test_app();

    let (status, json) = common::get_json(&app, "/api/users").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));
}

#[tokio::test]
async fn test_usernames_are_trimmed() {
    let (app, _state) = common::create_test_app();

    let (status, json) = common::post_form(&app, "/api/users", "username=+carol+").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["username"], "carol");
}

#[tokio::test]
async fn test_long_username_is_accepted() {
    let (app, _state) = common::create_test_app();
    let username = "a".repeat(101);

    let (status, json) =
        common::post_form(&app, "/api/users", &format!("username={}", username)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["username"], username);
}

#[tokio::test]
async fn test_missing_username_is_rejected() {
    let (app, state) = common::create_test_app();

    for body in ["", "username=", "username=+++", "name=dave"] {
        let (status, json) = common::post_form(&app, "/api/users", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "body {:?}", body);
        assert!(json["error"].as_str().unwrap().contains("username"));
    }

    assert!(state.db.list_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_wrong_content_type_is_json_error() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/users")
                .header(header::CONTENT_TYPE, "text/plain")
                .body(Body::from("username=erin"))
                .unwrap(),
        )
        .await
        .unwrap();

    let (status, json) = common::read_json(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
}
