// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Exercise log queries.
//!
//! Turns a user's stored exercises into the `/logs` response: newest first,
//! optionally bounded by `from`/`to` (inclusive) and truncated to `limit`.
//!
//! `count` is the user's total number of exercises and is taken before any
//! filtering, so it can exceed `log.len()`. Existing clients depend on this.

use crate::error::{AppError, Result};
use crate::models::{Exercise, User};
use crate::time_utils::parse_calendar_date;
use chrono::NaiveDate;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Parsed `from`/`to`/`limit` parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<usize>,
}

impl LogQuery {
    /// Parse raw query-string values. Empty strings count as absent.
    pub fn parse(from: Option<&str>, to: Option<&str>, limit: Option<&str>) -> Result<Self> {
        Ok(Self {
            from: parse_bound("from", from)?,
            to: parse_bound("to", to)?,
            limit: non_empty(limit).map(parse_limit).transpose()?,
        })
    }
}

/// Digit strings too large for `usize` saturate rather than fail.
fn parse_limit(raw: &str) -> Result<usize> {
    if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(raw.parse::<usize>().unwrap_or(usize::MAX));
    }
    Err(AppError::BadRequest(format!(
        "Invalid 'limit' parameter: {:?} is not a non-negative integer",
        raw
    )))
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_bound(name: &str, raw: Option<&str>) -> Result<Option<NaiveDate>> {
    non_empty(raw)
        .map(|value| {
            parse_calendar_date(value).ok_or_else(|| {
                AppError::BadRequest(format!(
                    "Invalid '{}' parameter: {:?} is not a date",
                    name, value
                ))
            })
        })
        .transpose()
}

/// One line of a user's log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export, export_to = "bindings/"))]
pub struct LogEntry {
    pub description: String,
    pub duration: u32,
    #[serde(serialize_with = "crate::time_utils::serialize_calendar_date")]
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub date: NaiveDate,
}

/// Response for `GET /api/users/{id}/logs`.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export, export_to = "bindings/"))]
pub struct ExerciseLog {
    pub id: String,
    pub username: String,
    /// Total exercises for the user, ignoring from/to/limit
    pub count: usize,
    pub log: Vec<LogEntry>,
}

/// Build the log view for `user` from their exercises.
///
/// `exercises` must all belong to `user`; their order is only used to break
/// ties between entries on the same date.
pub fn build_log(user: &User, exercises: Vec<Exercise>, query: &LogQuery) -> ExerciseLog {
    let count = exercises.len();

    let mut log: Vec<LogEntry> = exercises
        .into_iter()
        .map(|e| LogEntry {
            description: e.description,
            duration: e.duration,
            date: e.date,
        })
        .collect();

    // Stable, so same-day entries keep their input order.
    log.sort_by(|a, b| b.date.cmp(&a.date));

    if let Some(from) = query.from {
        log.retain(|entry| entry.date >= from);
    }
    if let Some(to) = query.to {
        log.retain(|entry| entry.date <= to);
    }
    if let Some(limit) = query.limit {
        log.truncate(limit);
    }

    ExerciseLog {
        id: user.id.clone(),
        username: user.username.clone(),
        count,
        log,
    }
}
