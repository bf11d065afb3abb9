use super::common::*;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::companies::{company_router, CompanyVerificationService};
use crate::verification::VerificationConfig;

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

#[tokio::test]
async fn verify_endpoint_returns_scored_record() {
    let app = router_with(Arc::new(MemoryRepository::default()));

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/verify",
            json!({ "name": "Random New Startup", "website": "randomstartup.io" }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["risk_score"], 95);
    assert_eq!(body["risk_level"], "critical");
    assert_eq!(body["verified"], true);
    assert_eq!(body["review_status"], "pending");
    assert_eq!(body["report_data"]["findings"].as_array().map(Vec::len), Some(5));
    assert!(body["reviewed_at"].is_null());
}

#[tokio::test]
async fn verify_endpoint_rejects_blank_name() {
    let app = router_with(Arc::new(MemoryRepository::default()));

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/verify",
            json!({ "name": "", "website": "nothing.io" }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn unknown_company_returns_not_found() {
    let app = router_with(Arc::new(MemoryRepository::default()));

    let response = app
        .oneshot(empty_request(Method::POST, "/companies/missing/reverify"))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json_body(response).await;
    assert_eq!(body["error"], "company not found");
}

#[tokio::test]
async fn review_endpoint_validates_status() {
    let repository = Arc::new(MemoryRepository::default());
    let service = service_with(repository.clone());
    let record = service
        .verify(submission("Initech", "initech.com"))
        .await
        .expect("verification succeeds");
    let app = company_router(Arc::new(service));

    let invalid = app
        .clone()
        .oneshot(empty_request(
            Method::POST,
            &format!("/companies/{}/review?status=escalated", record.id),
        ))
        .await
        .expect("router responds");
    assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

    let approved = app
        .oneshot(empty_request(
            Method::POST,
            &format!("/companies/{}/review?status=approved", record.id),
        ))
        .await
        .expect("router responds");
    assert_eq!(approved.status(), StatusCode::OK);
    let body = read_json_body(approved).await;
    assert_eq!(body["review_status"], "approved");
    assert!(body["reviewed_at"].is_string());
}

#[tokio::test]
async fn update_and_list_endpoints_round_out_registry() {
    let repository = Arc::new(MemoryRepository::default());
    let service = service_with(repository.clone());
    let record = service
        .verify(submission("Apple", "apple.com"))
        .await
        .expect("verification succeeds");
    let app = company_router(Arc::new(service));

    let updated = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            &format!("/companies/{}", record.id),
            json!({ "website": "apple.example" }),
        ))
        .await
        .expect("router responds");
    assert_eq!(updated.status(), StatusCode::OK);
    let body = read_json_body(updated).await;
    assert_eq!(body["verified"], false);
    assert!(body["risk_score"].is_null());

    let listed = app
        .oneshot(empty_request(Method::GET, "/companies"))
        .await
        .expect("router responds");
    assert_eq!(listed.status(), StatusCode::OK);
    let body = read_json_body(listed).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["website"], "apple.example");
}

#[tokio::test]
async fn repository_outage_maps_to_server_error() {
    let service = CompanyVerificationService::new(
        Arc::new(UnavailableRepository),
        VerificationConfig::instant(),
    );
    let app = company_router(Arc::new(service));

    let response = app
        .oneshot(empty_request(Method::GET, "/companies"))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
