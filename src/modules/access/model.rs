use serde::Serialize;
use utoipa::ToSchema;

use advisor_auth::{Principal, Role};

/// Identity fields echoed back by the protected endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserSummary {
    pub user_id: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl UserSummary {
    pub fn from_principal(principal: &Principal) -> Self {
        Self {
            user_id: principal.sub.clone(),
            email: principal.email.clone(),
            role: principal.role,
            session_id: None,
        }
    }

    pub fn with_session(principal: &Principal) -> Self {
        Self {
            session_id: Some(principal.session_id.clone()),
            ..Self::from_principal(principal)
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AccessGrantedResponse {
    pub message: String,
    pub user: UserSummary,
}
