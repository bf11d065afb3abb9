use crate::infra::{require_api_token, ApiGuard, AppState};
use axum::http::{header, StatusCode};
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use enterprise_verify::companies::{company_router, CompanyRepository, CompanyVerificationService};
use serde_json::json;
use std::sync::Arc;

/// Probes plus the guarded company registry routes.
pub(crate) fn with_company_routes<R>(
    service: Arc<CompanyVerificationService<R>>,
    guard: ApiGuard,
    state: AppState,
) -> Router
where
    R: CompanyRepository + 'static,
{
    let companies = company_router(service)
        .route_layer(middleware::from_fn_with_state(guard, require_api_token));

    Router::new()
        .route("/", get(root))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .merge(companies)
        .layer(Extension(state))
}

pub(crate) async fn root() -> Json<serde_json::Value> {
    Json(json!({ "message": "Enterprise verification API is running" }))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "healthy" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
