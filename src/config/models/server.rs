//! Server configuration

use super::*;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Worker threads; one per CPU when unset
    pub workers: Option<usize>,
    /// Client request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// JSON body limit in bytes
    #[serde(default = "default_max_body_size")]
    pub max_body_size: usize,
    #[serde(default)]
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
            timeout: default_timeout(),
            max_body_size: default_max_body_size(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(num_cpus::get)
    }

    pub fn validate(&self) -> Result<(), String> {
        let zero_field = [
            ("port", self.port == 0),
            ("timeout", self.timeout == 0),
            ("max_body_size", self.max_body_size == 0),
            ("workers", self.workers == Some(0)),
        ]
        .into_iter()
        .find_map(|(name, is_zero)| is_zero.then_some(name));

        match zero_field {
            Some(name) => Err(format!("server.{} must be greater than 0", name)),
            None => self.cors.validate(),
        }
    }
}

/// Cross-origin access for the browser frontend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Frontend origins; empty or `*` admits any origin
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    #[serde(default = "default_cors_methods")]
    pub allowed_methods: Vec<String>,
    #[serde(default = "default_cors_headers")]
    pub allowed_headers: Vec<String>,
    /// Response headers readable by the frontend
    #[serde(default = "default_cors_expose_headers")]
    pub expose_headers: Vec<String>,
    /// Preflight cache lifetime in seconds
    #[serde(default = "default_cors_max_age")]
    pub max_age: u32,
    #[serde(default)]
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: vec![],
            allowed_methods: default_cors_methods(),
            allowed_headers: default_cors_headers(),
            expose_headers: default_cors_expose_headers(),
            max_age: default_cors_max_age(),
            allow_credentials: false,
        }
    }
}

impl CorsConfig {
    pub fn allows_all_origins(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.enabled {
            return Ok(());
        }

        if self.allows_all_origins() && self.allow_credentials {
            return Err(
                "CORS credentials require explicit allowed_origins, not a wildcard".to_string(),
            );
        }

        if let Some(origin) = self
            .allowed_origins
            .iter()
            .find(|o| *o != "*" && !o.starts_with("http://") && !o.starts_with("https://"))
        {
            return Err(format!("CORS origin must include a scheme: {}", origin));
        }

        if self.allows_all_origins() {
            warn!("CORS admits any origin; set allowed_origins to the frontend URL");
        }
        Ok(())
    }
}

// No endpoint deletes records; closures are rejected and employees deactivated via POST
fn default_cors_methods() -> Vec<String> {
    ["GET", "POST", "PUT", "OPTIONS"]
        .iter()
        .map(|m| m.to_string())
        .collect()
}

fn default_cors_headers() -> Vec<String> {
    ["authorization", "content-type", "x-request-id"]
        .iter()
        .map(|h| h.to_string())
        .collect()
}

fn default_cors_expose_headers() -> Vec<String> {
    vec!["x-request-id".to_string()]
}

fn default_cors_max_age() -> u32 {
    3600
}
