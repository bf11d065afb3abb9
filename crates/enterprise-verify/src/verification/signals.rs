use super::domain::FindingStatus::{Fail, Pass, Warning};
use super::domain::{
    CompanyIdentity, FindingStatus, ReputationTier, SignalCategory, MAX_RISK_SCORE,
};

/// One cell of the tier × category table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalRule {
    pub status: FindingStatus,
    pub penalty: u8,
    /// Detail text; `{name}` and `{website}` are substituted from the identity.
    pub template: &'static str,
}

const fn rule(status: FindingStatus, penalty: u8, template: &'static str) -> SignalRule {
    SignalRule {
        status,
        penalty,
        template,
    }
}

/// Rows follow `SignalCategory::ordered`, columns follow `ReputationTier::ordered`.
static SIGNAL_TABLE: [[SignalRule; 4]; 5] = [
    [
        rule(Pass, 0, "Domain registered > 10 years ago."),
        rule(Pass, 0, "Domain registered > 3 years ago."),
        rule(Warning, 30, "Domain registered < 6 months ago."),
        rule(Warning, 25, "Domain registered < 1 year ago."),
    ],
    [
        rule(Pass, 0, "Valid EV SSL certificate found with A+ rating."),
        rule(Pass, 0, "Valid SSL certificate found."),
        rule(Fail, 20, "No valid SSL certificate found."),
        rule(Warning, 10, "Basic SSL certificate found (not EV)."),
    ],
    [
        rule(
            Pass,
            0,
            "Company '{name}' verified in multiple international registries.",
        ),
        rule(Pass, 15, "Company '{name}' found in registry."),
        rule(Fail, 50, "Company '{name}' NOT found in any registry."),
        rule(Fail, 40, "Company '{name}' NOT found in registry."),
    ],
    [
        rule(
            Pass,
            0,
            "Corporate email domain verified for {website}. Multiple valid patterns found.",
        ),
        rule(Pass, 5, "Corporate email domain verified for {website}."),
        rule(
            Warning,
            10,
            "No valid corporate email patterns found for {website}.",
        ),
        rule(
            Warning,
            10,
            "Limited corporate email verification for {website}.",
        ),
    ],
    [
        rule(
            Pass,
            0,
            "Official phone number verified with multiple contact points.",
        ),
        rule(Pass, 5, "Official phone number verified."),
        rule(Warning, 10, "No official phone number found."),
        rule(Warning, 10, "Phone number verification incomplete."),
    ],
];

pub fn signal_rule(category: SignalCategory, tier: ReputationTier) -> &'static SignalRule {
    &SIGNAL_TABLE[category.index()][tier.index()]
}

impl SignalRule {
    pub fn render(&self, identity: &CompanyIdentity) -> String {
        self.template
            .replace("{name}", &identity.name)
            .replace("{website}", &identity.website)
    }
}

/// Result of evaluating a single category for an identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalOutcome {
    pub category: SignalCategory,
    pub status: FindingStatus,
    pub penalty: u8,
    pub details: String,
}

/// All five outcomes plus the accumulated score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalScore {
    pub outcomes: Vec<SignalOutcome>,
    /// Sum of penalties before clamping.
    pub raw_total: u16,
    /// `raw_total` clamped to `MAX_RISK_SCORE`.
    pub risk_score: u8,
    pub email_verified: bool,
    pub phone_verified: bool,
}

pub fn score_signals(identity: &CompanyIdentity, tier: ReputationTier) -> SignalScore {
    let outcomes: Vec<SignalOutcome> = SignalCategory::ordered()
        .into_iter()
        .map(|category| {
            let rule = signal_rule(category, tier);
            SignalOutcome {
                category,
                status: rule.status,
                penalty: rule.penalty,
                details: rule.render(identity),
            }
        })
        .collect();

    let raw_total: u16 = outcomes
        .iter()
        .map(|outcome| u16::from(outcome.penalty))
        .sum();
    let risk_score = clamp_score(raw_total);

    SignalScore {
        outcomes,
        raw_total,
        risk_score,
        email_verified: tier.is_established(),
        phone_verified: tier.is_established(),
    }
}

pub(crate) fn clamp_score(raw_total: u16) -> u8 {
    // Lossless: the value is at most MAX_RISK_SCORE after `min`.
    raw_total.min(u16::from(MAX_RISK_SCORE)) as u8
}
