//! Common test utilities for casework-rs
//!
//! ```rust,ignore
//! use crate::common::{TestDatabase, fixtures::CaseFactory};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let db = TestDatabase::new().await;
//!     let org = db.seed_org().await;
//!     let case = CaseFactory::assigned_to(&org.sdw).insert(db.db()).await;
//! }
//! ```

pub mod database;
pub mod fixtures;

// Re-export commonly used items
pub use database::TestDatabase;
pub use fixtures::{CaseFactory, EmployeeFactory, Org, TEST_PASSWORD};

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err and return the error
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
