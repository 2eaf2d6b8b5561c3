//! Environment variable overrides
//!
//! Recognized variables: `CASEWORK_HOST`, `CASEWORK_PORT`, `CASEWORK_WORKERS`,
//! `DATABASE_URL`, `DATABASE_MAX_CONNECTIONS`, `JWT_SECRET`, `JWT_EXPIRATION`,
//! `CASEWORK_LOG_LEVEL`, `CASEWORK_LOG_JSON`.

use super::models::*;
use crate::utils::error::{CaseworkError, Result};
use std::env;
use std::str::FromStr;
use tracing::debug;

impl CaseworkConfig {
    /// Overlay values from the process environment
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|key| env::var(key).ok())
    }

    /// Overlay values from an arbitrary key lookup
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        debug!("Applying configuration overrides from environment");

        if let Some(host) = lookup("CASEWORK_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("CASEWORK_PORT") {
            self.server.port = parse_var("CASEWORK_PORT", &port)?;
        }
        if let Some(workers) = lookup("CASEWORK_WORKERS") {
            self.server.workers = Some(parse_var("CASEWORK_WORKERS", &workers)?);
        }

        if let Some(url) = lookup("DATABASE_URL") {
            self.storage.database.url = url;
        }
        if let Some(max_conn) = lookup("DATABASE_MAX_CONNECTIONS") {
            self.storage.database.max_connections =
                parse_var("DATABASE_MAX_CONNECTIONS", &max_conn)?;
        }

        if let Some(secret) = lookup("JWT_SECRET") {
            self.auth.jwt_secret = secret;
        }
        if let Some(exp) = lookup("JWT_EXPIRATION") {
            self.auth.jwt_expiration = parse_var("JWT_EXPIRATION", &exp)?;
        }

        if let Some(level) = lookup("CASEWORK_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(json) = lookup("CASEWORK_LOG_JSON") {
            self.logging.json = parse_var("CASEWORK_LOG_JSON", &json)?;
        }

        Ok(())
    }
}

fn parse_var<T>(name: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| CaseworkError::Config(format!("Invalid {}: {}", name, e)))
}
