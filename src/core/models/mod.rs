//! Domain models
//!
//! Employees and SPUs describe the organization; sponsored members (cases)
//! and their forms describe the casework.

pub mod case;
pub mod closure;
pub mod employee;
pub mod intervention;
pub mod progress_report;
pub mod spu;


pub use case::{CaseScope, NewSponsoredMember, SponsoredMember, SponsoredMemberUpdate};
pub use closure::{CaseClosure, ClosureStatus};
pub use employee::{Employee, NewEmployee, Role};
pub use intervention::{Intervention, InterventionKind, InterventionUpdate, NewIntervention};
pub use progress_report::{NewProgressReport, ProgressReport, ProgressReportUpdate};
pub use spu::Spu;
