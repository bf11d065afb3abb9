use super::domain::{CompanyId, CompanyRecord};

/// Storage abstraction so the service can be exercised without a backing store.
pub trait CompanyRepository: Send + Sync {
    /// Store `record` unless a matching company is already on file. The duplicate check and
    /// the write must happen atomically.
    fn register(&self, record: CompanyRecord) -> Result<Registration, RepositoryError>;
    fn update(&self, record: CompanyRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &CompanyId) -> Result<Option<CompanyRecord>, RepositoryError>;
    /// First stored company that `CompanyRecord::matches` the given name or website.
    fn find_duplicate(
        &self,
        name: &str,
        website: &str,
    ) -> Result<Option<CompanyRecord>, RepositoryError>;
    /// All companies in registration order.
    fn list(&self) -> Result<Vec<CompanyRecord>, RepositoryError>;
}

/// Outcome of `CompanyRepository::register`.
#[derive(Debug, Clone, PartialEq)]
pub enum Registration {
    Inserted(CompanyRecord),
    Existing(CompanyRecord),
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
