//! JWT token handling
//!
//! Access tokens identify an employee; the role claim is informational only,
//! since every request re-reads the employee record.

mod handler;
pub mod types;


pub use types::{Claims, JwtHandler};
