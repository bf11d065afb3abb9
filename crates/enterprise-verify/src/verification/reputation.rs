use super::domain::{CompanyIdentity, ReputationTier};

/// Household-name companies.
pub const WELL_KNOWN_TERMS: &[&str] = &[
    "google",
    "facebook",
    "meta",
    "microsoft",
    "apple",
    "amazon",
    "netflix",
    "twitter",
    "linkedin",
    "instagram",
    "youtube",
    "tesla",
    "nvidia",
    "intel",
    "ibm",
    "oracle",
    "salesforce",
];

/// Legitimate but less established companies.
pub const LESSER_KNOWN_TERMS: &[&str] = &[
    "acme",
    "globex",
    "initech",
    "umbrella",
    "cyberdyne",
    "weyland",
    "tyrell",
    "oscorp",
    "stark",
    "wayne",
];

/// Keywords that flag throwaway or fraudulent identities.
pub const SUSPICIOUS_TERMS: &[&str] = &[
    "scam", "fake", "phishing", "fraud", "test123", "xyz", "temp",
];

impl ReputationTier {
    /// Vocabulary matched for this tier; `Unknown` is the fallback and has none.
    pub const fn vocabulary(self) -> &'static [&'static str] {
        match self {
            Self::WellKnown => WELL_KNOWN_TERMS,
            Self::LesserKnown => LESSER_KNOWN_TERMS,
            Self::Suspicious => SUSPICIOUS_TERMS,
            Self::Unknown => &[],
        }
    }

    /// First tier (in priority order) whose vocabulary appears in the name or website.
    ///
    /// Matching is plain substring containment, so a legitimate name that happens to
    /// contain a suspicious keyword lands in the suspicious tier.
    pub fn classify(identity: &CompanyIdentity) -> Self {
        let name = identity.name.to_lowercase();
        let website = identity.website.to_lowercase();

        Self::ordered()
            .into_iter()
            .find(|tier| {
                tier.vocabulary()
                    .iter()
                    .any(|term| name.contains(term) || website.contains(term))
            })
            .unwrap_or(Self::Unknown)
    }

    /// The vocabulary term that decided the classification, if any.
    pub fn matched_term(self, identity: &CompanyIdentity) -> Option<&'static str> {
        let name = identity.name.to_lowercase();
        let website = identity.website.to_lowercase();
        self.vocabulary()
            .iter()
            .copied()
            .find(|term| name.contains(term) || website.contains(term))
    }
}
