//! Configuration data models
//!
//! This module defines all configuration structures used throughout the service.

#![allow(missing_docs)]

pub mod auth;
pub mod casework;
pub mod logging;
pub mod server;
pub mod storage;

// Re-export all configuration types
pub use auth::*;
pub use casework::*;
pub use logging::*;
pub use server::*;
pub use storage::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

/// Default timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    2 * 1024 * 1024 // 2MB, forms are small JSON documents
}

pub fn default_max_connections() -> u32 {
    10
}

pub fn default_connection_timeout() -> u64 {
    5
}

pub fn default_database_url() -> String {
    "sqlite://data/casework.db?mode=rwc".to_string()
}

pub fn default_jwt_expiration() -> u64 {
    8 * 3600 // one working day
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_true() -> bool {
    true
}
