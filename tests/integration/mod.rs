//! Integration tests for casework-rs
//!
//! These tests run the real storage layer against in-memory SQLite.

pub mod access_policy_tests;
pub mod closure_workflow_tests;
pub mod config_tests;
pub mod database_tests;
pub mod http_tests;
