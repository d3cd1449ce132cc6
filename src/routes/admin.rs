// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Administrative routes.

use crate::error::Result;
use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/resetall", get(reset_all))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export, export_to = "bindings/"))]
pub struct MessageResponse {
    pub message: String,
}

/// Wipe all users and exercises.
async fn reset_all(State(state): State<Arc<AppState>>) -> Result<Json<MessageResponse>> {
    let deleted = state.db.reset_all().await?;
    tracing::warn!(deleted, "Database reset");

    Ok(Json(MessageResponse {
        message: "Database reset, done!".to_string(),
    }))
}
