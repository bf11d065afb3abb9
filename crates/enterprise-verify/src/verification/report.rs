use super::domain::{CompanyIdentity, FindingStatus, RiskLevel};
use super::signals::{SignalOutcome, SignalScore};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Providers credited on every report, whether or not they produced a finding.
pub const REPORT_SOURCES: [&str; 6] = [
    "OpenCorporates",
    "LinkedIn",
    "DomainTools",
    "SSL Labs",
    "Hunter.io",
    "Twilio",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub source: String,
    pub status: FindingStatus,
    pub details: String,
}

impl From<&SignalOutcome> for Finding {
    fn from(outcome: &SignalOutcome) -> Self {
        Self {
            source: outcome.category.provider().to_string(),
            status: outcome.status,
            details: outcome.details.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchDetails {
    pub name_match: bool,
    pub website_match: bool,
    pub email_verified: bool,
    pub phone_verified: bool,
}

/// Evidence report attached to an assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReport {
    pub summary: String,
    pub sources: Vec<String>,
    pub findings: Vec<Finding>,
    pub match_details: MatchDetails,
    pub generated_at: DateTime<Utc>,
}

impl VerificationReport {
    pub fn assemble(
        identity: &CompanyIdentity,
        level: RiskLevel,
        score: &SignalScore,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            summary: summary_line(&identity.name, level),
            sources: REPORT_SOURCES.iter().map(|source| source.to_string()).collect(),
            findings: score.outcomes.iter().map(Finding::from).collect(),
            match_details: MatchDetails {
                // Name and website matching are simulated.
                name_match: true,
                website_match: true,
                email_verified: score.email_verified,
                phone_verified: score.phone_verified,
            },
            generated_at,
        }
    }

    pub fn count_status(&self, status: FindingStatus) -> usize {
        self.findings
            .iter()
            .filter(|finding| finding.status == status)
            .count()
    }
}

pub fn summary_line(company_name: &str, level: RiskLevel) -> String {
    format!(
        "Verification for {} completed with Risk Level: {}.",
        company_name,
        level.headline()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verification::domain::ReputationTier;
    use crate::verification::signals::score_signals;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn summary_uses_uppercase_level() {
        assert_eq!(
            summary_line("Acme Corporation", RiskLevel::Low),
            "Verification for Acme Corporation completed with Risk Level: LOW."
        );
    }

    #[test]
    fn report_lists_fixed_sources_and_provider_findings() {
        let identity = CompanyIdentity::new("Umbrella Corp", "umbrella.com");
        let score = score_signals(&identity, ReputationTier::LesserKnown);
        let report = VerificationReport::assemble(&identity, RiskLevel::Low, &score, fixed_time());

        assert_eq!(report.sources, REPORT_SOURCES.to_vec());
        let providers: Vec<&str> = report
            .findings
            .iter()
            .map(|finding| finding.source.as_str())
            .collect();
        assert_eq!(
            providers,
            vec![
                "DomainTools",
                "SSL Labs",
                "OpenCorporates",
                "Hunter.io",
                "Twilio Lookup"
            ]
        );
        assert!(report.match_details.name_match && report.match_details.website_match);
        assert_eq!(report.count_status(FindingStatus::Pass), 5);
    }

    #[test]
    fn report_serializes_timestamp_as_iso_8601() {
        let identity = CompanyIdentity::new("Oscorp", "");
        let score = score_signals(&identity, ReputationTier::LesserKnown);
        let report = VerificationReport::assemble(&identity, RiskLevel::Low, &score, fixed_time());

        let value = serde_json::to_value(&report).expect("report serializes");
        assert_eq!(value["generated_at"], "2025-03-14T09:30:00Z");
        assert_eq!(value["findings"][0]["status"], "Pass");
        assert_eq!(value["match_details"]["email_verified"], true);
    }
}
