use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{CompanyId, CompanySubmission, CompanyUpdate};
use super::repository::{CompanyRepository, RepositoryError};
use super::service::{CompanyServiceError, CompanyVerificationService};

#[derive(Debug, Deserialize)]
pub(crate) struct ReviewQuery {
    pub(crate) status: String,
}

/// Router builder exposing verification, review, and registry endpoints.
pub fn company_router<R>(service: Arc<CompanyVerificationService<R>>) -> Router
where
    R: CompanyRepository + 'static,
{
    Router::new()
        .route("/verify", post(verify_handler::<R>))
        .route("/companies", get(list_handler::<R>))
        .route(
            "/companies/:company_id",
            get(get_handler::<R>).put(update_handler::<R>),
        )
        .route("/companies/:company_id/review", post(review_handler::<R>))
        .route("/companies/:company_id/reverify", post(reverify_handler::<R>))
        .with_state(service)
}

pub(crate) async fn verify_handler<R>(
    State(service): State<Arc<CompanyVerificationService<R>>>,
    axum::Json(submission): axum::Json<CompanySubmission>,
) -> Response
where
    R: CompanyRepository + 'static,
{
    match service.verify(submission).await {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<CompanyVerificationService<R>>>,
) -> Response
where
    R: CompanyRepository + 'static,
{
    match service.list() {
        Ok(records) => (StatusCode::OK, axum::Json(records)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn get_handler<R>(
    State(service): State<Arc<CompanyVerificationService<R>>>,
    Path(company_id): Path<String>,
) -> Response
where
    R: CompanyRepository + 'static,
{
    match service.get(&CompanyId(company_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn update_handler<R>(
    State(service): State<Arc<CompanyVerificationService<R>>>,
    Path(company_id): Path<String>,
    axum::Json(update): axum::Json<CompanyUpdate>,
) -> Response
where
    R: CompanyRepository + 'static,
{
    match service.update(&CompanyId(company_id), update) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn review_handler<R>(
    State(service): State<Arc<CompanyVerificationService<R>>>,
    Path(company_id): Path<String>,
    Query(query): Query<ReviewQuery>,
) -> Response
where
    R: CompanyRepository + 'static,
{
    match service.review(&CompanyId(company_id), &query.status) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn reverify_handler<R>(
    State(service): State<Arc<CompanyVerificationService<R>>>,
    Path(company_id): Path<String>,
) -> Response
where
    R: CompanyRepository + 'static,
{
    match service.reverify(&CompanyId(company_id)).await {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: CompanyServiceError) -> Response {
    let status = match &error {
        CompanyServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        CompanyServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        CompanyServiceError::InvalidReviewStatus(_) => StatusCode::BAD_REQUEST,
        CompanyServiceError::EmptyName => StatusCode::UNPROCESSABLE_ENTITY,
        CompanyServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let message = match &error {
        CompanyServiceError::Repository(RepositoryError::NotFound) => {
            "company not found".to_string()
        }
        other => other.to_string(),
    };

    (status, axum::Json(json!({ "error": message }))).into_response()
}
