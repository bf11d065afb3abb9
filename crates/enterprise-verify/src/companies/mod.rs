//! Company registry: stores verified companies, merges risk assessments into their
//! records, and tracks reviewer decisions.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    CompanyId, CompanyRecord, CompanySubmission, CompanyUpdate, ReviewStatus, UnknownReviewStatus,
};
pub use repository::{CompanyRepository, Registration, RepositoryError};
pub use router::company_router;
pub use service::{required_name, CompanyServiceError, CompanyVerificationService};
