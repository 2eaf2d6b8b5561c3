//! Top-level service configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Service configuration as read from `config/casework.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CaseworkConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CaseworkConfig {
    /// Defaults overlaid with environment variables
    pub fn from_env() -> crate::utils::error::Result<Self> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }
}
