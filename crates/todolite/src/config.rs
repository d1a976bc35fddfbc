//! Application configuration loaded from environment variables.

use std::env;

use axum::http::{HeaderName, HeaderValue, Method};
use thiserror::Error;

/// Errors raised while loading configuration.
///
/// Any of these aborts startup before the server binds its listener.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("SQLITE_DB must be set to the database file path")]
    DatabasePathUnset,

    #[error("Invalid origin in ALLOWED_ORIGINS: {0}")]
    InvalidOrigin(String),

    #[error("Invalid method in ALLOWED_METHODS: {0}")]
    InvalidMethod(String),

    #[error("Invalid header in ALLOWED_HEADERS: {0}")]
    InvalidHeader(String),
}

/// Application configuration.
///
/// CORS allow-lists are parsed into typed values at load time; `None`
/// means the corresponding check allows anything.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the SQLite database file (required).
    pub sqlite_path: String,
    /// CORS origin allow-list. None allows any origin.
    pub allowed_origins: Option<Vec<HeaderValue>>,
    /// CORS method allow-list. None allows any method.
    pub allowed_methods: Option<Vec<Method>>,
    /// CORS request header allow-list. None allows any header.
    pub allowed_headers: Option<Vec<HeaderName>>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SQLITE_DB` - Path to the SQLite database file (required)
    /// - `ALLOWED_ORIGINS` - Comma-separated CORS origins (default: allow all)
    /// - `ALLOWED_METHODS` - Comma-separated CORS methods (default: allow all)
    /// - `ALLOWED_HEADERS` - Comma-separated CORS request headers (default: allow all)
    pub fn from_env() -> Result<Self, ConfigError> {
        let sqlite_path = env::var("SQLITE_DB").map_err(|_| ConfigError::DatabasePathUnset)?;

        Ok(Self {
            sqlite_path,
            allowed_origins: parse_list(env::var("ALLOWED_ORIGINS").ok(), |entry| {
                HeaderValue::from_str(entry)
                    .map_err(|_| ConfigError::InvalidOrigin(entry.to_string()))
            })?,
            allowed_methods: parse_list(env::var("ALLOWED_METHODS").ok(), |entry| {
                entry
                    .to_ascii_uppercase()
                    .parse::<Method>()
                    .map_err(|_| ConfigError::InvalidMethod(entry.to_string()))
            })?,
            allowed_headers: parse_list(env::var("ALLOWED_HEADERS").ok(), |entry| {
                entry
                    .parse::<HeaderName>()
                    .map_err(|_| ConfigError::InvalidHeader(entry.to_string()))
            })?,
        })
    }
}

/// Parse a comma-separated allow-list.
///
/// Unset, blank, or `*` all mean allow-all and yield None. Entries are
/// trimmed and empty entries are skipped.
fn parse_list<T>(
    raw: Option<String>,
    parse: impl Fn(&str) -> Result<T, ConfigError>,
) -> Result<Option<Vec<T>>, ConfigError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    if raw.trim().is_empty() || raw.trim() == "*" {
        return Ok(None);
    }

    let entries = raw
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(parse)
        .collect::<Result<Vec<T>, ConfigError>>()?;

    Ok(if entries.is_empty() {
        None
    } else {
        Some(entries)
    })
}
