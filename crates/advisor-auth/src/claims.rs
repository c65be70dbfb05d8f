//! Access token payload and the fixed role set.
//!
//! - [`Role`]: the closed set of roles a token can carry
//! - [`Principal`]: the verified identity decoded from an access token

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Role carried by an access token.
///
/// Serialized as a lowercase string (`"student"`, `"faculty"`, `"admin"`).
/// A token whose role is outside this set does not deserialize and is
/// therefore rejected during verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Faculty,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Student, Role::Faculty, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Faculty => "faculty",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown role name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "faculty" => Ok(Role::Faculty),
            "admin" => Ok(Role::Admin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Verified identity decoded from an access token.
///
/// A `Principal` only exists once the token's signature and expiry have been
/// checked. It lives for a single request.
///
/// # Fields
///
/// - `sub`: User ID (subject)
/// - `email`: User's email address
/// - `role`: The user's single [`Role`]
/// - `session_id`: Server-side session the token belongs to
/// - `exp`: Token expiration timestamp
/// - `iat`: Token issued-at timestamp
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Principal {
    /// User ID (subject claim)
    pub sub: String,
    /// User's email address
    pub email: String,
    pub role: Role,
    /// Correlates the token to a server-side session record
    pub session_id: String,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: i64,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_through_str() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        }
        assert!("system_admin".parse::<Role>().is_err());
    }

    #[test]
    fn test_principal_deserialize() {
        let json = r#"{"sub":"user-456","email":"user@test.com","role":"faculty","session_id":"s-1","exp":9999999999,"iat":9999999900}"#;
        let principal: Principal = serde_json::from_str(json).unwrap();
        assert_eq!(principal.sub, "user-456");
        assert_eq!(principal.role, Role::Faculty);
        assert_eq!(principal.session_id, "s-1");
    }

    #[test]
    fn test_principal_rejects_unknown_role() {
        let json = r#"{"sub":"u","email":"u@test.com","role":"teacher","session_id":"s","exp":1,"iat":0}"#;
        assert!(serde_json::from_str::<Principal>(json).is_err());
    }

    #[test]
    fn test_principal_requires_session_id() {
        let json = r#"{"sub":"u","email":"u@test.com","role":"admin","exp":1,"iat":0}"#;
        assert!(serde_json::from_str::<Principal>(json).is_err());
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let serialized = serde_json::to_string(&Role::Admin).unwrap();
        assert_eq!(serialized, r#""admin""#);
    }
}
