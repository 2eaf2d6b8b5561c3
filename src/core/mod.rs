//! Core domain types for casework
//!
//! Plain data records shared by storage, services and the HTTP layer.

pub mod models;
