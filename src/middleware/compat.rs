// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error status compatibility.
//!
//! Older clients of this API expect every response, including
//! `{"error": ...}` bodies, to arrive with 200 OK. With
//! `ERROR_STATUS_CODES=false` error statuses are rewritten to 200; the body
//! is left untouched.

use crate::AppState;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

pub async fn legacy_error_status(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let mut response = next.run(req).await;

    let status = response.status();
    if !state.config.error_status_codes && (status.is_client_error() || status.is_server_error())
    {
        tracing::debug!(original = %status, "Rewriting error status to 200");
        *response.status_mut() = StatusCode::OK;
    }

    response
}
