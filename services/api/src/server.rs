use crate::cli::ServeArgs;
use crate::infra::{cors_layer, ApiGuard, AppState, InMemoryCompanyRepository};
use crate::routes::with_company_routes;
use axum_prometheus::PrometheusMetricLayer;
use enterprise_verify::companies::CompanyVerificationService;
use enterprise_verify::config::AppConfig;
use enterprise_verify::error::AppError;
use enterprise_verify::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(latency_ms) = args.latency_ms.take() {
        config.verification.latency = Duration::from_millis(latency_ms);
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryCompanyRepository::default());
    let service = Arc::new(CompanyVerificationService::new(
        repository,
        config.verification,
    ));

    let guard = ApiGuard::new(config.api.api_token.clone());
    if guard.is_open() {
        warn!("APP_API_TOKEN is not set; company routes accept unauthenticated requests");
    }

    let app = with_company_routes(service, guard, app_state)
        .layer(cors_layer(&config.api))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        latency_ms = config.verification.latency.as_millis() as u64,
        "enterprise verification api ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
