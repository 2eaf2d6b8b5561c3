//! Error handling for the casework service
//!
//! This module defines the crate-wide error type and its HTTP mapping.

#![allow(missing_docs)]

mod helpers;
mod response;
mod types;

pub use response::ErrorResponse;
pub use types::{CaseworkError, Result};
