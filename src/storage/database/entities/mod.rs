/// Case closure request entity module
pub mod case_closure;
/// Employee entity module
pub mod employee;
/// Intervention entity module
pub mod intervention;
/// Progress report entity module
pub mod progress_report;
/// Sponsored member (case) entity module
pub mod sponsored_member;
/// Sub-project unit entity module
pub mod spu;

pub use case_closure::Entity as CaseClosure;
pub use employee::Entity as Employee;
pub use intervention::Entity as Intervention;
pub use progress_report::Entity as ProgressReport;
pub use sponsored_member::Entity as SponsoredMember;
pub use spu::Entity as Spu;
