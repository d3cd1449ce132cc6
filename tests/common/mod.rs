// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use exercise_tracker::config::{Config, DatabaseUri};
use exercise_tracker::db::Db;
use exercise_tracker::routes::create_router;
use exercise_tracker::AppState;
use std::sync::Arc;
use tower::ServiceExt;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a Firestore connection against the emulator.
#[allow(dead_code)]
pub async fn test_firestore_db() -> Db {
    Db::connect(&DatabaseUri::Firestore {
        project_id: "test-project".to_string(),
    })
    .await
    .expect("Failed to connect to Firestore emulator")
}

/// Create a test app backed by a fresh in-memory store.
#[allow(dead_code)]
pub fn create_test_app() -> (Router, Arc<AppState>) {
    create_test_app_with_config(Config::test_default())
}

#[allow(dead_code)]
pub fn create_test_app_with_config(config: Config) -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config,
        db: Db::new_memory(),
    });

    (create_router(state.clone()), state)
}

/// POST an urlencoded form and return status plus parsed JSON body.
#[allow(dead_code)]
pub async fn post_form(app: &Router, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    read_json(response).await
}

/// GET a path and return status plus parsed JSON body.
#[allow(dead_code)]
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    read_json(response).await
}

#[allow(dead_code)]
pub async fn read_json(response: axum::response::Response) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or_else(|e| {
        panic!(
            "response is not JSON ({}): {}",
            e,
            String::from_utf8_lossy(&body)
        )
    });
    (status, json)
}

/// Register a user and return its ID.
#[allow(dead_code)]
pub async fn create_user(app: &Router, username: &str) -> String {
    let (status, json) = post_form(app, "/api/users", &format!("username={}", username)).await;
    assert_eq!(status, StatusCode::OK, "{}", json);
    json["id"].as_str().unwrap().to_string()
}

/// Log an exercise and assert it succeeded.
#[allow(dead_code)]
pub async fn add_exercise(app: &Router, user_id: &str, description: &str, duration: u32, date: &str) {
    let (status, json) = post_form(
        app,
        &format!("/api/users/{}/exercises", user_id),
        &format!(
            "description={}&duration={}&date={}",
            description, duration, date
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", json);
}
