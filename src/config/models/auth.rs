//! Authentication configuration

use super::*;
use rand::distributions::Alphanumeric;
use rand::{Rng, thread_rng};
use serde::{Deserialize, Serialize};

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// JWT secret
    #[serde(default = "generate_secure_jwt_secret")]
    pub jwt_secret: String,
    /// JWT expiration in seconds
    #[serde(default = "default_jwt_expiration")]
    pub jwt_expiration: u64,
    /// Token issuer
    #[serde(default = "default_issuer")]
    pub issuer: String,
    /// Login brute-force protection
    #[serde(default)]
    pub login_limit: LoginLimitConfig,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: generate_secure_jwt_secret(),
            jwt_expiration: default_jwt_expiration(),
            issuer: default_issuer(),
            login_limit: LoginLimitConfig::default(),
        }
    }
}

impl AuthConfig {
    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.jwt_secret.len() < 32 {
            return Err("JWT secret must be at least 32 characters long for security".to_string());
        }

        if self.jwt_secret == "your-secret-key" || self.jwt_secret == "change-me" {
            return Err("JWT secret must not use default values. Please generate a secure random secret.".to_string());
        }

        if self.jwt_secret.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(
                "JWT secret should contain mixed case letters, numbers, and special characters"
                    .to_string(),
            );
        }

        if self.jwt_expiration < 300 {
            return Err("JWT expiration should be at least 5 minutes (300 seconds)".to_string());
        }

        if self.jwt_expiration > 86400 * 7 {
            return Err("JWT expiration should not exceed 7 days".to_string());
        }

        if self.issuer.is_empty() {
            return Err("JWT issuer cannot be empty".to_string());
        }

        self.login_limit.validate()
    }
}

/// Failed-login lockout settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginLimitConfig {
    /// Failed attempts tolerated inside one window
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Window for counting failures (seconds)
    #[serde(default = "default_window_secs")]
    pub window_secs: u64,
    /// First lockout duration (seconds), doubled on each repeat
    #[serde(default = "default_lockout_secs")]
    pub base_lockout_secs: u64,
}

impl Default for LoginLimitConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            window_secs: default_window_secs(),
            base_lockout_secs: default_lockout_secs(),
        }
    }
}

impl LoginLimitConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_attempts == 0 {
            return Err("Login max_attempts cannot be 0".to_string());
        }
        if self.window_secs == 0 {
            return Err("Login window_secs cannot be 0".to_string());
        }
        Ok(())
    }
}

fn default_issuer() -> String {
    "casework-rs".to_string()
}

fn default_max_attempts() -> u32 {
    5
}

fn default_window_secs() -> u64 {
    300
}

fn default_lockout_secs() -> u64 {
    60
}

/// Generate a secure random JWT secret
fn generate_secure_jwt_secret() -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}
