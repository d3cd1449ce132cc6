// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Middleware modules (security headers, error status compatibility).

pub mod compat;
pub mod security;

pub use compat::legacy_error_status;
