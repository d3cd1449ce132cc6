// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Exercise entry model for storage and API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Stored exercise record in the `exercises` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Store-assigned identifier (also used as document ID)
    pub id: String,
    /// Owning user ID (not enforced by the store)
    pub user_id: String,
    /// What was done
    pub description: String,
    /// Duration in minutes
    pub duration: u32,
    /// Calendar date of the exercise, stored as `YYYY-MM-DD`
    pub date: NaiveDate,
    /// When the record was written (RFC3339, UTC); orders a user's entries
    pub created_at: String,
}

/// Response for a newly logged exercise.
///
/// `id` is the owning user's ID, not the exercise's.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export, export_to = "bindings/"))]
pub struct ExerciseResponse {
    pub id: String,
    pub username: String,
    #[serde(serialize_with = "crate::time_utils::serialize_calendar_date")]
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub date: NaiveDate,
    pub duration: u32,
    pub description: String,
}
