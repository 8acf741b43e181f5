// ABOUTME: Environment-based configuration for the Foodbridge server
// ABOUTME: Reads port, host, catalog path, reference date, and deployment environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodbridge Contributors

//! Environment-only configuration
//!
//! Nothing is read from config files. Every setting has a default except the
//! catalog path, whose absence means the server starts with an empty catalog.

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use foodbridge_core::constants::{defaults, env_config, ports};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::info;

/// Deployment environment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (default)
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// HTTP bind host
    pub host: String,
    /// JSON catalog snapshot to load at startup
    pub catalog_path: Option<PathBuf>,
    /// Fixed "today" for age derivation; the current UTC date when absent
    pub reference_date: Option<NaiveDate>,
    /// Deployment environment
    pub environment: Environment,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: ports::DEFAULT_HTTP_PORT,
            host: defaults::HOST.to_owned(),
            catalog_path: None,
            reference_date: None,
            environment: Environment::Development,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `HTTP_PORT` is not a valid port or
    /// `FOODBRIDGE_REFERENCE_DATE` is not a `YYYY-MM-DD` date
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let http_port = match env::var(env_config::HTTP_PORT) {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid {} value: {raw}", env_config::HTTP_PORT))?,
            Err(_) => ports::DEFAULT_HTTP_PORT,
        };

        let reference_date = non_empty_var(env_config::REFERENCE_DATE)
            .map(|raw| {
                NaiveDate::parse_from_str(&raw, "%Y-%m-%d").with_context(|| {
                    format!("Invalid {} value: {raw}", env_config::REFERENCE_DATE)
                })
            })
            .transpose()?;

        Ok(Self {
            http_port,
            host: non_empty_var(env_config::HOST).unwrap_or_else(|| defaults::HOST.to_owned()),
            catalog_path: non_empty_var(env_config::CATALOG_PATH).map(PathBuf::from),
            reference_date,
            environment: Environment::from_str_or_default(
                &env::var(env_config::ENVIRONMENT).unwrap_or_default(),
            ),
        })
    }

    /// Date used as "today" when deriving buyer ages
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Utc::now().date_naive())
    }

    /// `host:port` the HTTP server binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// One-line description for the startup log
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Foodbridge configuration: environment={}, bind={}, catalog={}, reference_date={}",
            self.environment,
            self.bind_address(),
            self.catalog_path
                .as_ref()
                .map_or_else(|| "(empty)".to_owned(), |path| path.display().to_string()),
            self.reference_date
                .map_or_else(|| "today".to_owned(), |date| date.to_string()),
        )
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}
