//! Case access policy
//!
//! Decides whether an employee may read or mutate a case, following the
//! head → supervisor → sdw chain of command. The decision itself is a pure
//! function ([`CaseAccessPolicy::evaluate`]); [`CaseAccessGuard`] performs the
//! record lookups it needs and turns denials into errors.

mod directory;
mod guard;
mod policy;
mod types;

pub use directory::AccessDirectory;
#[cfg(test)]
pub use directory::MockAccessDirectory;
pub use guard::{AccessOutcome, AuthorizedCase, CaseAccessGuard};
pub use policy::CaseAccessPolicy;
pub use types::{AccessDecision, AccessIntent, DenialReason};
