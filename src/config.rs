// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! Read once at startup. A `.env` file in the working directory is honored
//! for local development.

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STATIC_DIR: &str = "public";

/// Where exercise data lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseUri {
    /// In-process store, lost on restart.
    Memory,
    /// Google Cloud Firestore in the given project.
    Firestore { project_id: String },
}

impl FromStr for DatabaseUri {
    type Err = ConfigError;

    /// Accepts `memory://` or `firestore://<project-id>`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        let invalid = || ConfigError::Invalid("DATABASE_URI", raw.to_string());

        let (scheme, rest) = raw.split_once("://").ok_or_else(invalid)?;
        match scheme {
            "memory" if rest.is_empty() => Ok(Self::Memory),
            "firestore" if !rest.is_empty() && !rest.contains('/') => Ok(Self::Firestore {
                project_id: rest.to_string(),
            }),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for DatabaseUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => write!(f, "memory://"),
            Self::Firestore { project_id } => write!(f, "firestore://{}", project_id),
        }
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Database connection string
    pub database_uri: DatabaseUri,
    /// Server port
    pub port: u16,
    /// Directory served for unmatched GET paths
    pub static_dir: PathBuf,
    /// Use 4xx/5xx statuses for errors. When false every error is sent
    /// with 200, which older clients of this API expect.
    pub error_status_codes: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_uri = var("DATABASE_URI")
            .ok_or(ConfigError::Missing("DATABASE_URI"))?
            .parse()?;

        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT", raw))?,
            None => DEFAULT_PORT,
        };

        let error_status_codes = match var("ERROR_STATUS_CODES") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid("ERROR_STATUS_CODES", raw))?,
            None => true,
        };

        Ok(Self {
            database_uri,
            port,
            static_dir: var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            error_status_codes,
        })
    }

    /// Config for tests: in-memory store, status codes on.
    pub fn test_default() -> Self {
        Self {
            database_uri: DatabaseUri::Memory,
            port: 0,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            error_status_codes: true,
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}
