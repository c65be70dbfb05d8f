use std::sync::Arc;

use advisor::router::init_router;
use advisor::state::AppState;
use advisor_auth::{Role, SessionState, SessionStore, SessionStoreError, create_access_token};
use advisor_config::{CorsConfig, JwtConfig};
use advisor_sessions::InMemorySessionStore;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use uuid::Uuid;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: 3600,
        leeway_seconds: 0,
    }
}

/// Router backed by an in-memory session store the test can edit.
#[allow(dead_code)]
pub struct TestApp {
    pub router: axum::Router,
    pub sessions: InMemorySessionStore,
}

#[allow(dead_code)]
pub fn setup_test_app() -> TestApp {
    let sessions = InMemorySessionStore::new();
    let state = AppState::new(
        test_jwt_config(),
        Arc::new(sessions.clone()),
        CorsConfig::default(),
    );

    TestApp {
        router: init_router(state),
        sessions,
    }
}

#[allow(dead_code)]
pub fn setup_app_with_store(store: Arc<dyn SessionStore>) -> axum::Router {
    init_router(AppState::new(test_jwt_config(), store, CorsConfig::default()))
}

#[allow(dead_code)]
pub struct IssuedToken {
    pub token: String,
    pub user_id: String,
    pub email: String,
    pub session_id: String,
}

/// Signs a token for a fresh user and session. The session is registered as
/// active when `sessions` is given.
#[allow(dead_code)]
pub async fn issue_token(role: Role, sessions: Option<&InMemorySessionStore>) -> IssuedToken {
    let user_id = Uuid::new_v4().to_string();
    let email = format!("{}@university.edu", role.as_str());
    let session_id = Uuid::new_v4().to_string();

    let token =
        create_access_token(&user_id, &email, role, &session_id, &test_jwt_config()).unwrap();

    if let Some(sessions) = sessions {
        sessions.insert_active(&session_id).await;
    }

    IssuedToken {
        token,
        user_id,
        email,
        session_id,
    }
}

#[allow(dead_code)]
pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

#[allow(dead_code)]
pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Session store whose every call fails as if Redis were down.
#[allow(dead_code)]
pub struct UnreachableSessionStore;

#[async_trait]
impl SessionStore for UnreachableSessionStore {
    async fn lookup_session(
        &self,
        _session_id: &str,
    ) -> Result<Option<SessionState>, SessionStoreError> {
        Err(SessionStoreError::Unavailable(
            "Connection refused (os error 111)".to_string(),
        ))
    }

    async fn ping(&self) -> Result<(), SessionStoreError> {
        Err(SessionStoreError::Unavailable(
            "Connection refused (os error 111)".to_string(),
        ))
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}
