//! Runtime configuration for the catalog binary
//!
//! Values are loaded from:
//! 1. `.env` file in the current directory or parent directories (if present)
//! 2. System environment variables
//!
//! Environment variables take precedence over .env file values. A missing
//! `.env` is ignored; one that cannot be read or parsed is a config error. The library
//! operations never read configuration themselves; the binary builds its
//! services from a `CatalogConfig`.

use std::path::PathBuf;

use url::Url;

use crate::errors::{SharedError, SharedResult};

/// Public planets listing used when nothing else is configured
pub const DEFAULT_PLANETS_URL: &str = "https://swapi.dev/api/planets/";

pub const PLANETS_URL_VAR: &str = "CATALOG_PLANETS_URL";
pub const LOG_LEVEL_VAR: &str = "CATALOG_LOG_LEVEL";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub planets_url: String,
    pub log_level: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            planets_url: DEFAULT_PLANETS_URL.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl CatalogConfig {
    /// Load configuration from `.env` and the process environment
    pub fn from_env() -> SharedResult<Self> {
        apply_dotenv(dotenvy::dotenv())?;
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> SharedResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let planets_url = match lookup(PLANETS_URL_VAR) {
            Some(raw) => Self::parse_planets_url(&raw)?,
            None => defaults.planets_url,
        };

        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(raw) => Self::parse_log_level(&raw)?,
            None => defaults.log_level,
        };

        Ok(Self { planets_url, log_level })
    }

    fn parse_planets_url(raw: &str) -> SharedResult<String> {
        let invalid = || SharedError::InvalidConfig {
            field: PLANETS_URL_VAR.to_string(),
            value: raw.to_string(),
        };

        let url = Url::parse(raw.trim()).map_err(|_| invalid())?;
        match url.scheme() {
            "http" | "https" => Ok(url.to_string()),
            _ => Err(invalid()),
        }
    }

    fn parse_log_level(raw: &str) -> SharedResult<String> {
        let level = raw.trim().to_lowercase();
        if LOG_LEVELS.contains(&level.as_str()) {
            Ok(level)
        } else {
            Err(SharedError::InvalidConfig {
                field: LOG_LEVEL_VAR.to_string(),
                value: raw.to_string(),
            })
        }
    }
}

pub const DOTENV_FIELD: &str = ".env";

/// Accept the outcome of loading `.env`, ignoring only a missing file
fn apply_dotenv(loaded: Result<PathBuf, dotenvy::Error>) -> SharedResult<()> {
    match loaded {
        Ok(_) => Ok(()),
        Err(err) if err.not_found() => Ok(()),
        Err(err) => Err(SharedError::InvalidConfig {
            field: DOTENV_FIELD.to_string(),
            value: err.to_string(),
        }),
    }
}
