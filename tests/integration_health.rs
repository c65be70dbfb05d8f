mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{UnreachableSessionStore, get, json_body, setup_app_with_store, setup_test_app};
use tower::ServiceExt;

#[tokio::test]
async fn test_root_lists_endpoints() {
    let app = setup_test_app();

    let response = app.router.oneshot(get("/", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["message"], "Faculty Advisor Authentication System");
    assert_eq!(body["endpoints"]["admin_only"], "/admin-only");
    assert_eq!(body["endpoints"]["health"], "/health");
}

#[tokio::test]
async fn test_health_with_reachable_store() {
    let app = setup_test_app();

    let response = app.router.oneshot(get("/health", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["session_backend"], "memory");
    assert_eq!(body["services"]["redis"], "connected");
    assert_eq!(body["services"]["authentication"], "available");
}

#[tokio::test]
async fn test_health_with_unreachable_store_returns_503() {
    let app = setup_app_with_store(Arc::new(UnreachableSessionStore));

    let response = app.oneshot(get("/health", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = json_body(response).await;
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["services"]["redis"], "disconnected");
    assert_eq!(body["services"]["authentication"], "unavailable");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = setup_test_app();

    let response = app
        .router
        .oneshot(get("/api-docs/openapi.json", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert!(body["paths"].get("/student-data").is_some());
}

#[tokio::test]
async fn test_cors_preflight_echoes_origin() {
    let app = setup_test_app();

    let request = axum::http::Request::builder()
        .method("OPTIONS")
        .uri("/protected")
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "GET")
        .header("access-control-request-headers", "authorization")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = app.router.oneshot(request).await.unwrap();
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "http://localhost:3000"
    );
    assert_eq!(
        response.headers()["access-control-allow-credentials"],
        "true"
    );
}
