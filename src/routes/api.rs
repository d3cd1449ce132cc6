// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes for users, exercises and logs.

use crate::db::new_document_id;
use crate::error::{AppError, Result};
use crate::models::{Exercise, ExerciseResponse, User, UserResponse};
use crate::services::{build_log, ExerciseLog, LogQuery};
use crate::time_utils::{now_rfc3339_micros, parse_calendar_date, today_utc};
use crate::AppState;
use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Path, Query, State,
    },
    routing::{get, post},
    Form, Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

/// API routes (no authentication).
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route("/api/users/{id}/exercises", post(create_exercise))
        .route("/api/users/{id}/logs", get(get_logs))
}

// ─── Users ───────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
struct CreateUserForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "username is required"))]
    username: String,
}

/// List every registered user.
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<UserResponse>>> {
    let users = state.db.list_users().await?;
    tracing::debug!(count = users.len(), "Listing users");

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Register a new user.
async fn create_user(
    State(state): State<Arc<AppState>>,
    form: std::result::Result<Form<CreateUserForm>, FormRejection>,
) -> Result<Json<UserResponse>> {
    let Form(mut form) = form?;
    form.username = form.username.trim().to_string();
    form.validate()?;

    let user = User {
        id: new_document_id()?,
        username: form.username,
        created_at: now_rfc3339_micros(),
    };
    state.db.create_user(&user).await?;

    tracing::info!(user_id = %user.id, username = %user.username, "User created");

    Ok(Json(user.into()))
}

// ─── Exercises ───────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
struct CreateExerciseForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "description is required"))]
    description: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "duration is required"))]
    duration: String,
    /// Defaults to today when absent or blank
    #[serde(default)]
    date: Option<String>,
}

/// A validated exercise submission.
#[derive(Debug, PartialEq, Eq)]
struct NewExercise {
    description: String,
    duration: u32,
    date: Option<NaiveDate>,
}

impl CreateExerciseForm {
    fn into_new_exercise(mut self) -> Result<NewExercise> {
        self.description = self.description.trim().to_string();
        self.duration = self.duration.trim().to_string();
        self.validate()?;

        let duration = match self.duration.parse::<u32>() {
            Ok(minutes) if minutes > 0 => minutes,
            _ => {
                return Err(AppError::BadRequest(format!(
                    "duration must be a positive whole number of minutes, got {:?}",
                    self.duration
                )))
            }
        };

        let date = match self.date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_calendar_date(raw).ok_or_else(|| {
                AppError::BadRequest(format!("date {:?} is not a valid date", raw))
            })?),
        };

        Ok(NewExercise {
            description: self.description,
            duration,
            date,
        })
    }
}

/// Log an exercise for a user.
async fn create_exercise(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    form: std::result::Result<Form<CreateExerciseForm>, FormRejection>,
) -> Result<Json<ExerciseResponse>> {
    let Form(form) = form?;
    let new_exercise = form.into_new_exercise()?;

    let user = state
        .db
        .get_user(&user_id)
        .await?
        .ok_or_else(|| AppError::user_not_found(&user_id))?;

    let exercise = Exercise {
        id: new_document_id()?,
        user_id: user.id.clone(),
        description: new_exercise.description,
        duration: new_exercise.duration,
        date: new_exercise.date.unwrap_or_else(today_utc),
        created_at: now_rfc3339_micros(),
    };
    state.db.create_exercise(&exercise).await?;

    tracing::info!(
        user_id = %user.id,
        exercise_id = %exercise.id,
        date = %exercise.date,
        duration = exercise.duration,
        "Exercise created"
    );

    Ok(Json(ExerciseResponse {
        id: user.id,
        username: user.username,
        date: exercise.date,
        duration: exercise.duration,
        description: exercise.description,
    }))
}

// ─── Logs ────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct LogParams {
    /// Earliest date to include
    from: Option<String>,
    /// Latest date to include
    to: Option<String>,
    /// Maximum number of entries
    limit: Option<String>,
}

/// Get a user's exercise log.
async fn get_logs(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    params: std::result::Result<Query<LogParams>, QueryRejection>,
) -> Result<Json<ExerciseLog>> {
    let Query(params) = params?;
    let query = LogQuery::parse(
        params.from.as_deref(),
        params.to.as_deref(),
        params.limit.as_deref(),
    )?;

    tracing::debug!(
        user_id = %user_id,
        from = ?query.from,
        to = ?query.to,
        limit = ?query.limit,
        "Fetching exercise log"
    );

    let (user, exercises) = tokio::try_join!(
        state.db.get_user(&user_id),
        state.db.get_exercises_for_user(&user_id),
    )?;
    let user = user.ok_or_else(|| AppError::user_not_found(&user_id))?;

    Ok(Json(build_log(&user, exercises, &query)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(description: &str, duration: &str, date: Option<&str>) -> CreateExerciseForm {
        CreateExerciseForm {
            description: description.to_string(),
            duration: duration.to_string(),
            date: date.map(str::to_string),
        }
    }

    #[test]
    fn test_exercise_form_trims_and_parses() {
        let new = form("  pushups ", " 15 ", Some("2023-03-01"))
            .into_new_exercise()
            .unwrap();

        assert_eq!(
            new,
            NewExercise {
                description: "pushups".to_string(),
                duration: 15,
                date: NaiveDate::from_ymd_opt(2023, 3, 1),
            }
        );
    }

    #[test]
    fn test_exercise_form_blank_date_means_default() {
        assert_eq!(form("run", "30", None).into_new_exercise().unwrap().date, None);
        assert_eq!(form("run", "30", Some(" ")).into_new_exercise().unwrap().date, None);
    }

    #[test]
    fn test_exercise_form_rejects_bad_fields() {
        let cases = [
            form("", "30", None),
            form("   ", "30", None),
            form("run", "", None),
            form("run", "0", None),
            form("run", "-5", None),
            form("run", "half an hour", None),
            form("run", "30", Some("someday")),
        ];

        for case in cases {
            let err = case.into_new_exercise().unwrap_err();
            assert!(matches!(err, AppError::BadRequest(_)));
        }
    }

    #[test]
    fn test_exercise_form_accepts_long_description() {
        let description = "d".repeat(501);
        let new = form(&description, "10", None).into_new_exercise().unwrap();
        assert_eq!(new.description, description);
    }

    #[test]
    fn test_user_form_validation() {
        let ok = CreateUserForm {
            username: "alice".to_string(),
        };
        assert!(ok.validate().is_ok());

        let empty = CreateUserForm {
            username: String::new(),
        };
        assert!(empty.validate().is_err());

        let long = CreateUserForm {
            username: "x".repeat(1000),
        };
        assert!(long.validate().is_ok());
    }
}
