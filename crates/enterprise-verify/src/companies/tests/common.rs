use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::response::Response;
use serde_json::Value;

use crate::companies::domain::{CompanyId, CompanyRecord, CompanySubmission};
use crate::companies::repository::{CompanyRepository, Registration, RepositoryError};
use crate::companies::{company_router, CompanyVerificationService};
use crate::verification::VerificationConfig;

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<Vec<CompanyRecord>>>,
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

impl CompanyRepository for MemoryRepository {
    fn register(&self, record: CompanyRecord) -> Result<Registration, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.iter().any(|stored| stored.id == record.id) {
            return Err(RepositoryError::Conflict);
        }
        if let Some(existing) = guard
            .iter()
            .find(|stored| stored.matches(&record.name, &record.website))
        {
            return Ok(Registration::Existing(existing.clone()));
        }
        guard.push(record.clone());
        Ok(Registration::Inserted(record))
    }

    fn update(&self, record: CompanyRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        match guard.iter_mut().find(|stored| stored.id == record.id) {
            Some(stored) => {
                *stored = record;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn fetch(&self, id: &CompanyId) -> Result<Option<CompanyRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().find(|stored| &stored.id == id).cloned())
    }

    fn find_duplicate(
        &self,
        name: &str,
        website: &str,
    ) -> Result<Option<CompanyRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .find(|stored| stored.matches(name, website))
            .cloned())
    }

    fn list(&self) -> Result<Vec<CompanyRecord>, RepositoryError> {
        Ok(self.records.lock().expect("repository mutex poisoned").clone())
    }
}

/// Memory store whose duplicate lookup blocks briefly, like a round trip to a real database.
#[derive(Default)]
pub(super) struct SlowLookupRepository {
    pub(super) inner: MemoryRepository,
}

impl CompanyRepository for SlowLookupRepository {
    fn register(&self, record: CompanyRecord) -> Result<Registration, RepositoryError> {
        self.inner.register(record)
    }

    fn update(&self, record: CompanyRecord) -> Result<(), RepositoryError> {
        self.inner.update(record)
    }

    fn fetch(&self, id: &CompanyId) -> Result<Option<CompanyRecord>, RepositoryError> {
        self.inner.fetch(id)
    }

    fn find_duplicate(
        &self,
        name: &str,
        website: &str,
    ) -> Result<Option<CompanyRecord>, RepositoryError> {
        std::thread::sleep(Duration::from_millis(3));
        self.inner.find_duplicate(name, website)
    }

    fn list(&self) -> Result<Vec<CompanyRecord>, RepositoryError> {
        self.inner.list()
    }
}

pub(super) struct UnavailableRepository;

impl CompanyRepository for UnavailableRepository {
    fn register(&self, _record: CompanyRecord) -> Result<Registration, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn update(&self, _record: CompanyRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn fetch(&self, _id: &CompanyId) -> Result<Option<CompanyRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn find_duplicate(
        &self,
        _name: &str,
        _website: &str,
    ) -> Result<Option<CompanyRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn list(&self) -> Result<Vec<CompanyRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }
}

pub(super) fn service_with(
    repository: Arc<MemoryRepository>,
) -> CompanyVerificationService<MemoryRepository> {
    CompanyVerificationService::new(repository, VerificationConfig::instant())
}

pub(super) fn submission(name: &str, website: &str) -> CompanySubmission {
    CompanySubmission {
        name: name.to_string(),
        website: website.to_string(),
    }
}

pub(super) fn router_with(repository: Arc<MemoryRepository>) -> axum::Router {
    company_router(Arc::new(service_with(repository)))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
