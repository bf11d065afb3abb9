//! Company reputation scoring.
//!
//! An identity is bucketed into a reputation tier by keyword matching, each simulated
//! provider signal contributes a fixed penalty for that tier, and the clamped total is
//! mapped onto a risk level and an evidence report.

mod config;
pub mod domain;
mod engine;
pub mod reputation;
pub mod report;
pub mod signals;

pub use config::{VerificationConfig, DEFAULT_LATENCY};
pub use domain::{
    CompanyIdentity, FindingStatus, ReputationTier, RiskLevel, SignalCategory, MAX_RISK_SCORE,
};
pub use engine::{RiskAssessment, RiskEngine};
pub use reputation::{LESSER_KNOWN_TERMS, SUSPICIOUS_TERMS, WELL_KNOWN_TERMS};
pub use report::{Finding, MatchDetails, VerificationReport, REPORT_SOURCES};
pub use signals::{score_signals, signal_rule, SignalOutcome, SignalRule, SignalScore};
