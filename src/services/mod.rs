// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod log_query;

pub use log_query::{build_log, ExerciseLog, LogEntry, LogQuery};
