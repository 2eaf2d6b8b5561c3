//! Configuration management for the casework service
//!
//! This module handles loading, validation, and management of all service configuration.

pub mod loader;
pub mod models;

pub use models::*;

use crate::utils::error::{CaseworkError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the service
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Service configuration
    pub casework: CaseworkConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| CaseworkError::Config(format!("Failed to read config file: {}", e)))?;

        let casework: CaseworkConfig = serde_yaml::from_str(&content)
            .map_err(|e| CaseworkError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { casework };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables on top of defaults
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let casework = CaseworkConfig::from_env()?;
        let config = Self { casework };

        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides to an already loaded configuration
    pub fn with_env_overrides(mut self) -> Result<Self> {
        self.casework.apply_env_overrides()?;
        self.validate()?;
        Ok(self)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.casework.server
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.casework.storage
    }

    /// Get auth configuration
    pub fn auth(&self) -> &AuthConfig {
        &self.casework.auth
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.casework.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.casework
            .server
            .validate()
            .map_err(|e| CaseworkError::Config(format!("Server config error: {}", e)))?;

        self.casework
            .storage
            .validate()
            .map_err(|e| CaseworkError::Config(format!("Storage config error: {}", e)))?;

        self.casework
            .auth
            .validate()
            .map_err(|e| CaseworkError::Config(format!("Auth config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.casework)
            .map_err(|e| CaseworkError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
