use crate::infra::InMemoryCompanyRepository;
use clap::Args;
use enterprise_verify::companies::{required_name, CompanySubmission, CompanyVerificationService};
use enterprise_verify::config::AppConfig;
use enterprise_verify::error::AppError;
use enterprise_verify::verification::{
    CompanyIdentity, ReputationTier, RiskAssessment, RiskEngine, VerificationConfig,
};
use std::sync::Arc;
use std::time::Duration;

/// Companies used for stakeholder demos, one or more per reputation tier.
pub(crate) const DEMO_COMPANIES: [(&str, &str); 7] = [
    ("Google", "google.com"),
    ("Facebook", "facebook.com"),
    ("Microsoft", "microsoft.com"),
    ("Acme Corporation", "acme-corp.com"),
    ("Globex Industries", "globex.com"),
    ("Fake Scam Inc", "fakescam123.xyz"),
    ("Test Phishing Co", "phishing-test.com"),
];

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Company name to score
    #[arg(long)]
    pub(crate) name: String,
    /// Company website (optional)
    #[arg(long)]
    pub(crate) website: Option<String>,
    /// Override the simulated verification latency in milliseconds
    #[arg(long)]
    pub(crate) latency_ms: Option<u64>,
    /// Print the assessment as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the simulated verification latency in milliseconds
    #[arg(long)]
    pub(crate) latency_ms: Option<u64>,
}

fn verification_config(latency_ms: Option<u64>) -> Result<VerificationConfig, AppError> {
    let mut config = AppConfig::load()?.verification;
    if let Some(latency_ms) = latency_ms {
        config.latency = Duration::from_millis(latency_ms);
    }
    Ok(config)
}

pub(crate) async fn run_assessment(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        name,
        website,
        latency_ms,
        json,
    } = args;

    let name = required_name(&name)?;
    let engine = RiskEngine::new(verification_config(latency_ms)?);
    let identity = CompanyIdentity::with_optional_website(name, website);
    let assessment = engine.assess(&identity).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        render_assessment(&identity, &assessment);
    }

    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = verification_config(args.latency_ms)?;
    let repository = Arc::new(InMemoryCompanyRepository::default());
    let service = CompanyVerificationService::new(repository, config);

    println!("Enterprise verification demo");
    println!(
        "Simulated provider latency: {} ms per company\n",
        config.latency.as_millis()
    );

    for (name, website) in DEMO_COMPANIES {
        let record = service
            .verify(CompanySubmission {
                name: name.to_string(),
                website: website.to_string(),
            })
            .await?;
        let tier = ReputationTier::classify(&record.identity());
        let level = record
            .risk_level
            .map(|level| level.headline())
            .unwrap_or("UNSCORED");
        println!(
            "- {:<20} {:<20} tier {:<12} score {:>3}  level {}",
            record.name,
            record.website,
            tier.label(),
            record.risk_score.unwrap_or_default(),
            level
        );
    }

    println!("\n{} companies registered", service.list()?.len());
    Ok(())
}

pub(crate) fn render_assessment(identity: &CompanyIdentity, assessment: &RiskAssessment) {
    let report = &assessment.report_data;
    let tier = ReputationTier::classify(identity);

    println!("{}", report.summary);
    if identity.website.is_empty() {
        println!("Website: (none provided)");
    } else {
        println!("Website: {}", identity.website);
    }

    match tier.matched_term(identity) {
        Some(term) => println!("Reputation tier: {} (matched '{}')", tier.label(), term),
        None => println!("Reputation tier: {}", tier.label()),
    }
    println!(
        "Risk score: {}/100 ({})",
        assessment.risk_score,
        assessment.risk_level.headline()
    );

    println!("\nFindings");
    for finding in &report.findings {
        println!(
            "- [{}] {}: {}",
            finding.status.label(),
            finding.source,
            finding.details
        );
    }

    let details = &report.match_details;
    println!("\nMatch details");
    println!("- name match: {}", details.name_match);
    println!("- website match: {}", details.website_match);
    println!("- email verified: {}", details.email_verified);
    println!("- phone verified: {}", details.phone_verified);

    println!("\nSources consulted: {}", report.sources.join(", "));
    println!("Generated at: {}", report.generated_at.to_rfc3339());
}

#[cfg(test)]
mod tests {
    use super::*;
    use enterprise_verify::companies::CompanyServiceError;
    use enterprise_verify::verification::RiskLevel;

    #[test]
    fn demo_companies_cover_low_and_critical_bands() {
        let engine = RiskEngine::new(VerificationConfig::instant());
        let levels: Vec<RiskLevel> = DEMO_COMPANIES
            .iter()
            .map(|(name, website)| {
                engine
                    .evaluate(&CompanyIdentity::new(*name, *website), chrono::Utc::now())
                    .risk_level
            })
            .collect();

        assert_eq!(&levels[..5], &[RiskLevel::Low; 5]);
        assert_eq!(&levels[5..], &[RiskLevel::Critical; 2]);
    }

    #[tokio::test]
    async fn assessment_rejects_blank_name() {
        let result = run_assessment(AssessArgs {
            name: "   ".to_string(),
            website: Some("blank.com".to_string()),
            latency_ms: Some(0),
            json: true,
        })
        .await;

        assert!(matches!(
            result,
            Err(AppError::Registry(CompanyServiceError::EmptyName))
        ));
    }

    #[tokio::test]
    async fn demo_runs_without_latency() {
        run_demo(DemoArgs {
            latency_ms: Some(0),
        })
        .await
        .expect("demo completes");
    }
}
