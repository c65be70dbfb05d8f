//! # Advisor Auth
//!
//! Per-request role-based access control for the Faculty Advisor API.
//!
//! This crate provides:
//!
//! - [`claims`]: the [`Role`] set and the verified [`Principal`]
//! - [`requirement`]: [`CapabilityRequirement`], the rule attached to a route
//! - [`verifier`]: the [`TokenVerifier`] collaborator trait
//! - [`session`]: the [`SessionStore`] collaborator trait
//! - [`jwt`]: HS256 token verification ([`JwtVerifier`])
//! - [`gate`]: [`AccessGate`], which combines the above into one decision
//! - [`error`]: [`AccessError`] and its 401/403/503 mapping
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use advisor_auth::{AccessGate, CapabilityRequirement, JwtVerifier, Role};
//!
//! let gate = AccessGate::new(Arc::new(JwtVerifier::new(jwt_config)), session_store);
//!
//! let principal = gate
//!     .authorize_request(Some(token), &CapabilityRequirement::any_of([Role::Faculty, Role::Admin]))
//!     .await?;
//! ```

pub mod claims;
pub mod error;
pub mod gate;
pub mod jwt;
pub mod requirement;
pub mod session;
pub mod verifier;

// Re-export commonly used types at crate root
pub use claims::{Principal, Role, UnknownRole};
pub use error::AccessError;
pub use gate::{AccessGate, DenialReason, Dependency, GateError, GateOutcome, token_fingerprint};
pub use jwt::{JwtVerifier, create_access_token, verify_token};
pub use requirement::CapabilityRequirement;
pub use session::{SessionState, SessionStore, SessionStoreError};
pub use verifier::{TokenVerifier, VerificationError};
