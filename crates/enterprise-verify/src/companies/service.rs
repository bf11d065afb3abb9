use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use super::domain::{CompanyId, CompanyRecord, CompanySubmission, CompanyUpdate, ReviewStatus};
use super::repository::{CompanyRepository, Registration, RepositoryError};
use crate::verification::{RiskEngine, VerificationConfig};

/// Service composing the company repository and the risk engine.
pub struct CompanyVerificationService<R> {
    repository: Arc<R>,
    engine: Arc<RiskEngine>,
}

impl<R> CompanyVerificationService<R>
where
    R: CompanyRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: VerificationConfig) -> Self {
        Self::with_engine(repository, RiskEngine::new(config))
    }

    pub fn with_engine(repository: Arc<R>, engine: RiskEngine) -> Self {
        Self {
            repository,
            engine: Arc::new(engine),
        }
    }

    /// Register and score a company. A company already on file is returned as stored.
    pub async fn verify(
        &self,
        submission: CompanySubmission,
    ) -> Result<CompanyRecord, CompanyServiceError> {
        let name = required_name(&submission.name)?;
        let website = submission.website.trim().to_string();

        if let Some(existing) = self.repository.find_duplicate(&name, &website)? {
            debug!(company_id = %existing.id, "returning previously verified company");
            return Ok(existing);
        }

        let mut record = CompanyRecord::new(CompanyId::generate(), name, website, Utc::now());
        let assessment = self.engine.assess(&record.identity()).await;
        record.apply_assessment(assessment);

        // Another request may have registered the same company while we were scoring.
        let stored = match self.repository.register(record)? {
            Registration::Inserted(stored) => stored,
            Registration::Existing(existing) => {
                debug!(company_id = %existing.id, "company registered concurrently");
                return Ok(existing);
            }
        };
        info!(
            company_id = %stored.id,
            risk_score = ?stored.risk_score,
            "company verified"
        );
        Ok(stored)
    }

    /// Record a reviewer decision. Only approvals and rejections are accepted.
    pub fn review(
        &self,
        company_id: &CompanyId,
        status: &str,
    ) -> Result<CompanyRecord, CompanyServiceError> {
        let mut record = self.get(company_id)?;

        let status = status
            .parse::<ReviewStatus>()
            .ok()
            .filter(|status| status.is_decision())
            .ok_or_else(|| CompanyServiceError::InvalidReviewStatus(status.to_string()))?;

        record.review_status = status;
        record.reviewed_at = Some(Utc::now());
        self.repository.update(record.clone())?;
        Ok(record)
    }

    /// Re-run the engine against the stored identity. Any prior review is discarded.
    pub async fn reverify(
        &self,
        company_id: &CompanyId,
    ) -> Result<CompanyRecord, CompanyServiceError> {
        let mut record = self.get(company_id)?;
        let mut scored = record.identity();
        let mut assessment = self.engine.assess(&scored).await;

        // Re-read so edits made during the wait are not overwritten, and score again if the
        // identity changed underneath us.
        loop {
            record = self.get(company_id)?;
            let current = record.identity();
            if current == scored {
                break;
            }
            debug!(company_id = %record.id, "identity changed during reverification");
            assessment = self.engine.assess(&current).await;
            scored = current;
        }

        record.apply_assessment(assessment);
        record.reset_review();
        self.repository.update(record.clone())?;
        Ok(record)
    }

    /// Apply a partial edit. Changing the website invalidates the assessment and review.
    pub fn update(
        &self,
        company_id: &CompanyId,
        update: CompanyUpdate,
    ) -> Result<CompanyRecord, CompanyServiceError> {
        let mut record = self.get(company_id)?;

        if let Some(name) = update.name {
            record.name = required_name(&name)?;
        }

        if let Some(website) = update.website {
            let website = website.trim().to_string();
            if website != record.website {
                record.website = website;
                record.clear_assessment();
                record.reset_review();
            }
        }

        self.repository.update(record.clone())?;
        Ok(record)
    }

    pub fn list(&self) -> Result<Vec<CompanyRecord>, CompanyServiceError> {
        Ok(self.repository.list()?)
    }

    pub fn get(&self, company_id: &CompanyId) -> Result<CompanyRecord, CompanyServiceError> {
        let record = self
            .repository
            .fetch(company_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

/// Trimmed company name, rejecting blank input.
pub fn required_name(raw: &str) -> Result<String, CompanyServiceError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(CompanyServiceError::EmptyName);
    }
    Ok(name.to_string())
}

/// Error raised by the company verification service.
#[derive(Debug, thiserror::Error)]
pub enum CompanyServiceError {
    #[error("company name must not be empty")]
    EmptyName,
    #[error("invalid review status '{0}', expected 'approved' or 'rejected'")]
    InvalidReviewStatus(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
