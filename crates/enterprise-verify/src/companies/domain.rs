use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::verification::domain::deserialize_optional_text;
use crate::verification::{CompanyIdentity, RiskAssessment, RiskLevel, VerificationReport};

/// Identifier wrapper for registered companies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyId(pub String);

impl CompanyId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Request payload for registering and verifying a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanySubmission {
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub website: String,
}

/// Partial edit of a registered company; absent fields stay untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

/// Human review decision recorded against a verified company.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ReviewStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Only approvals and rejections can be recorded by a reviewer.
    pub const fn is_decision(self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}

impl FromStr for ReviewStatus {
    type Err = UnknownReviewStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(UnknownReviewStatus(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown review status '{0}'")]
pub struct UnknownReviewStatus(pub String);

/// Stored company with its latest assessment and review metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub id: CompanyId,
    pub name: String,
    pub website: String,
    pub verified: bool,
    pub risk_score: Option<u8>,
    pub risk_level: Option<RiskLevel>,
    pub report_data: Option<VerificationReport>,
    pub review_status: ReviewStatus,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl CompanyRecord {
    pub fn new(id: CompanyId, name: String, website: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            website,
            verified: false,
            risk_score: None,
            risk_level: None,
            report_data: None,
            review_status: ReviewStatus::Pending,
            reviewed_at: None,
            created_at,
        }
    }

    pub fn identity(&self) -> CompanyIdentity {
        CompanyIdentity::new(self.name.clone(), self.website.clone())
    }

    pub fn apply_assessment(&mut self, assessment: RiskAssessment) {
        self.risk_score = Some(assessment.risk_score);
        self.risk_level = Some(assessment.risk_level);
        self.report_data = Some(assessment.report_data);
        self.verified = assessment.verified;
    }

    pub fn clear_assessment(&mut self) {
        self.verified = false;
        self.risk_score = None;
        self.risk_level = None;
        self.report_data = None;
    }

    pub fn reset_review(&mut self) {
        self.review_status = ReviewStatus::Pending;
        self.reviewed_at = None;
    }

    /// Same name (ignoring case), or same non-empty website (ignoring case).
    pub fn matches(&self, name: &str, website: &str) -> bool {
        if self.name.to_lowercase() == name.to_lowercase() {
            return true;
        }
        !self.website.is_empty()
            && !website.is_empty()
            && self.website.to_lowercase() == website.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, website: &str) -> CompanyRecord {
        CompanyRecord::new(
            CompanyId("c-1".to_string()),
            name.to_string(),
            website.to_string(),
            Utc::now(),
        )
    }

    #[test]
    fn duplicate_matching_ignores_case_and_blank_websites() {
        let stored = record("Acme Corporation", "acme-corp.com");
        assert!(stored.matches("ACME corporation", "other.com"));
        assert!(stored.matches("Acme Holdings", "ACME-CORP.COM"));
        assert!(!stored.matches("Acme Holdings", ""));

        let without_site = record("Initech", "");
        assert!(!without_site.matches("Initrode", ""));
    }

    #[test]
    fn review_status_parses_labels() {
        assert_eq!("Approved".parse::<ReviewStatus>(), Ok(ReviewStatus::Approved));
        assert_eq!(" rejected ".parse::<ReviewStatus>(), Ok(ReviewStatus::Rejected));
        assert!(!ReviewStatus::Pending.is_decision());
        assert_eq!(
            "escalated".parse::<ReviewStatus>(),
            Err(UnknownReviewStatus("escalated".to_string()))
        );
    }

    #[test]
    fn submission_accepts_missing_website() {
        let submission: CompanySubmission =
            serde_json::from_str(r#"{"name":"Tyrell"}"#).expect("submission parses");
        assert_eq!(submission.website, "");
    }
}
