use axum::extract::{Request, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use enterprise_verify::companies::{
    CompanyId, CompanyRecord, CompanyRepository, Registration, RepositoryError,
};
use enterprise_verify::config::ApiConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local company store; records live for the lifetime of the server.
#[derive(Default, Clone)]
pub(crate) struct InMemoryCompanyRepository {
    records: Arc<Mutex<Vec<CompanyRecord>>>,
}

impl InMemoryCompanyRepository {
    fn guard(&self) -> Result<MutexGuard<'_, Vec<CompanyRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("company store lock poisoned".to_string()))
    }
}

impl CompanyRepository for InMemoryCompanyRepository {
    fn register(&self, record: CompanyRecord) -> Result<Registration, RepositoryError> {
        let mut guard = self.guard()?;
        if guard.iter().any(|stored| stored.id == record.id) {
            return Err(RepositoryError::Conflict);
        }
        if let Some(existing) = guard
            .iter()
            .find(|stored| stored.matches(&record.name, &record.website))
        {
            return Ok(Registration::Existing(existing.clone()));
        }
        guard.push(record.clone());
        Ok(Registration::Inserted(record))
    }

    fn update(&self, record: CompanyRecord) -> Result<(), RepositoryError> {
        let mut guard = self.guard()?;
        let stored = guard
            .iter_mut()
            .find(|stored| stored.id == record.id)
            .ok_or(RepositoryError::NotFound)?;
        *stored = record;
        Ok(())
    }

    fn fetch(&self, id: &CompanyId) -> Result<Option<CompanyRecord>, RepositoryError> {
        let guard = self.guard()?;
        Ok(guard.iter().find(|stored| &stored.id == id).cloned())
    }

    fn find_duplicate(
        &self,
        name: &str,
        website: &str,
    ) -> Result<Option<CompanyRecord>, RepositoryError> {
        let guard = self.guard()?;
        Ok(guard
            .iter()
            .find(|stored| stored.matches(name, website))
            .cloned())
    }

    fn list(&self) -> Result<Vec<CompanyRecord>, RepositoryError> {
        Ok(self.guard()?.clone())
    }
}

/// Static bearer token protecting the company routes.
#[derive(Clone, Default)]
pub(crate) struct ApiGuard {
    token: Option<Arc<str>>,
}

impl ApiGuard {
    pub(crate) fn new(token: Option<String>) -> Self {
        Self {
            token: token.map(Arc::from),
        }
    }

    pub(crate) fn is_open(&self) -> bool {
        self.token.is_none()
    }

    fn admits(&self, authorization: Option<&HeaderValue>) -> bool {
        let Some(expected) = self.token.as_deref() else {
            return true;
        };

        authorization
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(|presented| presented.trim() == expected)
            .unwrap_or(false)
    }
}

pub(crate) async fn require_api_token(
    State(guard): State<ApiGuard>,
    request: Request,
    next: Next,
) -> Response {
    if guard.admits(request.headers().get(header::AUTHORIZATION)) {
        return next.run(request).await;
    }

    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, "Bearer")],
        Json(json!({ "error": "could not validate credentials" })),
    )
        .into_response()
}

pub(crate) fn cors_layer(config: &ApiConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}
