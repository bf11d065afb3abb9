use serde::{Deserialize, Deserializer, Serialize};

/// Company identity handed to the risk engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyIdentity {
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub website: String,
}

impl CompanyIdentity {
    pub fn new(name: impl Into<String>, website: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            website: website.into(),
        }
    }

    /// Builds an identity where an absent website collapses to the empty string.
    pub fn with_optional_website(name: impl Into<String>, website: Option<String>) -> Self {
        Self::new(name, website.unwrap_or_default())
    }
}

/// Accepts a missing or `null` text field as the empty string.
pub fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// Coarse reputation bucket derived from keyword matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReputationTier {
    WellKnown,
    LesserKnown,
    Suspicious,
    Unknown,
}

impl ReputationTier {
    /// Tiers in classification priority order.
    pub const fn ordered() -> [Self; 4] {
        [
            Self::WellKnown,
            Self::LesserKnown,
            Self::Suspicious,
            Self::Unknown,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::WellKnown => "Well Known",
            Self::LesserKnown => "Lesser Known",
            Self::Suspicious => "Suspicious",
            Self::Unknown => "Unknown",
        }
    }

    /// Established tiers have verifiable contact channels.
    pub const fn is_established(self) -> bool {
        matches!(self, Self::WellKnown | Self::LesserKnown)
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::WellKnown => 0,
            Self::LesserKnown => 1,
            Self::Suspicious => 2,
            Self::Unknown => 3,
        }
    }
}

/// Simulated verification signal families, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalCategory {
    DomainAge,
    Ssl,
    Registration,
    Email,
    Phone,
}

impl SignalCategory {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::DomainAge,
            Self::Ssl,
            Self::Registration,
            Self::Email,
            Self::Phone,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::DomainAge => "Domain Age",
            Self::Ssl => "SSL Certificate",
            Self::Registration => "Registration Database",
            Self::Email => "Email Verification",
            Self::Phone => "Phone Verification",
        }
    }

    /// Name of the simulated provider credited in findings.
    pub const fn provider(self) -> &'static str {
        match self {
            Self::DomainAge => "DomainTools",
            Self::Ssl => "SSL Labs",
            Self::Registration => "OpenCorporates",
            Self::Email => "Hunter.io",
            Self::Phone => "Twilio Lookup",
        }
    }

    /// Largest penalty a single category may contribute.
    pub const fn max_weight(self) -> u8 {
        match self {
            Self::DomainAge => 30,
            Self::Ssl => 20,
            Self::Registration => 50,
            Self::Email | Self::Phone => 10,
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::DomainAge => 0,
            Self::Ssl => 1,
            Self::Registration => 2,
            Self::Email => 3,
            Self::Phone => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FindingStatus {
    Pass,
    Warning,
    Fail,
}

impl FindingStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pass => "Pass",
            Self::Warning => "Warning",
            Self::Fail => "Fail",
        }
    }
}

pub const MAX_RISK_SCORE: u8 = 100;

const MEDIUM_THRESHOLD: u8 = 30;
const HIGH_THRESHOLD: u8 = 60;
const CRITICAL_THRESHOLD: u8 = 85;

/// Discrete risk band derived from the clamped score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Bands are closed below and open above.
    pub const fn from_score(score: u8) -> Self {
        if score < MEDIUM_THRESHOLD {
            Self::Low
        } else if score < HIGH_THRESHOLD {
            Self::Medium
        } else if score < CRITICAL_THRESHOLD {
            Self::High
        } else {
            Self::Critical
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    pub const fn headline(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}
