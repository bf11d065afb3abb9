use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1500);

/// Engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationConfig {
    /// Simulated processing delay before an assessment is returned.
    pub latency: Duration,
}

impl VerificationConfig {
    pub const fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    /// No simulated delay; assessments resolve immediately.
    pub const fn instant() -> Self {
        Self::with_latency(Duration::ZERO)
    }
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self::with_latency(DEFAULT_LATENCY)
    }
}
