mod common;

use std::sync::Arc;

use advisor_auth::Role;
use axum::http::StatusCode;
use common::{
    UnreachableSessionStore, get, issue_token, json_body, setup_app_with_store, setup_test_app,
};
use tower::ServiceExt;

#[tokio::test]
async fn test_protected_without_token_returns_401() {
    let app = setup_test_app();

    let response = app.router.oneshot(get("/protected", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = json_body(response).await;
    assert_eq!(body["error"], "Authentication required");
}

#[tokio::test]
async fn test_protected_with_non_bearer_scheme_returns_401() {
    let app = setup_test_app();

    let request = axum::http::Request::builder()
        .uri("/protected")
        .header("authorization", "Basic dXNlcjpwYXNz")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = app.router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_with_garbage_token_returns_401() {
    let app = setup_test_app();

    let response = app
        .router
        .oneshot(get("/protected", Some("not.a.jwt")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = json_body(response).await;
    assert_eq!(body["error"], "Authentication required");
}

#[tokio::test]
async fn test_protected_with_active_session_returns_user() {
    let app = setup_test_app();
    let issued = issue_token(Role::Student, Some(&app.sessions)).await;

    let response = app
        .router
        .oneshot(get("/protected", Some(&issued.token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["message"], "This is a protected endpoint");
    assert_eq!(body["user"]["user_id"], issued.user_id);
    assert_eq!(body["user"]["email"], issued.email);
    assert_eq!(body["user"]["role"], "student");
    assert_eq!(body["user"]["session_id"], issued.session_id);
}

#[tokio::test]
async fn test_unknown_session_returns_401() {
    let app = setup_test_app();
    let issued = issue_token(Role::Admin, None).await;

    let response = app
        .router
        .oneshot(get("/protected", Some(&issued.token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_revoked_session_returns_401() {
    let app = setup_test_app();
    let issued = issue_token(Role::Admin, Some(&app.sessions)).await;

    let response = app
        .router
        .clone()
        .oneshot(get("/admin-only", Some(&issued.token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    assert!(app.sessions.revoke(&issued.session_id).await);

    let response = app
        .router
        .oneshot(get("/admin-only", Some(&issued.token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = json_body(response).await;
    assert_eq!(body["error"], "Authentication required");
}

#[tokio::test]
async fn test_deleted_session_returns_401() {
    let app = setup_test_app();
    let issued = issue_token(Role::Faculty, Some(&app.sessions)).await;

    let response = app
        .router
        .clone()
        .oneshot(get("/faculty-or-admin", Some(&issued.token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    app.sessions.remove(&issued.session_id).await;

    let response = app
        .router
        .oneshot(get("/faculty-or-admin", Some(&issued.token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_only_allows_admin() {
    let app = setup_test_app();
    let issued = issue_token(Role::Admin, Some(&app.sessions)).await;

    let response = app
        .router
        .oneshot(get("/admin-only", Some(&issued.token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["message"], "Admin access granted");
    assert_eq!(body["user"]["role"], "admin");
    assert!(body["user"].get("session_id").is_none());
}

#[tokio::test]
async fn test_admin_only_rejects_other_roles_with_403() {
    let app = setup_test_app();

    for role in [Role::Student, Role::Faculty] {
        let issued = issue_token(role, Some(&app.sessions)).await;

        let response = app
            .router
            .clone()
            .oneshot(get("/admin-only", Some(&issued.token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN, "role {role}");

        let body = json_body(response).await;
        assert_eq!(body["error"], "Access denied");
    }
}

#[tokio::test]
async fn test_faculty_or_admin() {
    let app = setup_test_app();

    for (role, expected) in [
        (Role::Faculty, StatusCode::OK),
        (Role::Admin, StatusCode::OK),
        (Role::Student, StatusCode::FORBIDDEN),
    ] {
        let issued = issue_token(role, Some(&app.sessions)).await;

        let response = app
            .router
            .clone()
            .oneshot(get("/faculty-or-admin", Some(&issued.token)))
            .await
            .unwrap();
        assert_eq!(response.status(), expected, "role {role}");
    }
}

#[tokio::test]
async fn test_revoked_session_wins_over_role_mismatch() {
    let app = setup_test_app();
    let issued = issue_token(Role::Student, Some(&app.sessions)).await;
    app.sessions.revoke(&issued.session_id).await;

    let response = app
        .router
        .oneshot(get("/admin-only", Some(&issued.token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_session_store_outage_returns_503() {
    let app = setup_app_with_store(Arc::new(UnreachableSessionStore));
    let issued = issue_token(Role::Admin, None).await;

    let response = app
        .oneshot(get("/admin-only", Some(&issued.token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = json_body(response).await;
    assert_eq!(body["error"], "Service unavailable");
    assert!(!body.to_string().contains("Connection refused"));
}

#[tokio::test]
async fn test_invalid_token_is_rejected_before_session_lookup() {
    let app = setup_app_with_store(Arc::new(UnreachableSessionStore));

    let response = app
        .oneshot(get("/protected", Some("not.a.jwt")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
