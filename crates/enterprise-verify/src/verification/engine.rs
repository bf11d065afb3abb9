use super::config::VerificationConfig;
use super::domain::{CompanyIdentity, ReputationTier, RiskLevel};
use super::report::VerificationReport;
use super::signals::score_signals;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Stateless scorer that maps a company identity onto a risk assessment.
#[derive(Debug, Clone, Default)]
pub struct RiskEngine {
    config: VerificationConfig,
}

impl RiskEngine {
    pub fn new(config: VerificationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &VerificationConfig {
        &self.config
    }

    /// Waits out the simulated provider latency, then scores the identity.
    ///
    /// Dropping the future during the wait produces nothing and leaves no state behind.
    pub async fn assess(&self, identity: &CompanyIdentity) -> RiskAssessment {
        if !self.config.latency.is_zero() {
            tokio::time::sleep(self.config.latency).await;
        }
        self.evaluate(identity, Utc::now())
    }

    /// Scores the identity without any delay, stamping the report with `generated_at`.
    pub fn evaluate(
        &self,
        identity: &CompanyIdentity,
        generated_at: DateTime<Utc>,
    ) -> RiskAssessment {
        let tier = ReputationTier::classify(identity);
        let score = score_signals(identity, tier);
        let risk_level = RiskLevel::from_score(score.risk_score);

        debug!(
            company = %identity.name,
            tier = tier.label(),
            raw_total = score.raw_total,
            risk_score = score.risk_score,
            risk_level = risk_level.label(),
            "company assessed"
        );

        let report_data = VerificationReport::assemble(identity, risk_level, &score, generated_at);

        RiskAssessment {
            risk_score: score.risk_score,
            risk_level,
            report_data,
            verified: true,
        }
    }
}

/// Engine output, shaped for merging into a company record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub report_data: VerificationReport,
    pub verified: bool,
}
