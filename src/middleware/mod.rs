//! Access extractors.
//!
//! # Authentication Flow
//!
//! 1. Client sends request with `Authorization: Bearer <token>` header
//! 2. The extractor hands the credential and its route requirement to the
//!    [`AccessGate`](advisor_auth::AccessGate)
//! 3. On success the handler receives the verified principal
//! 4. On failure the request is rejected with 401, 403 or 503
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::{AuthUser, RequireFacultyOrAdmin};
//!
//! // Any authenticated user with an active session
//! async fn profile(auth_user: AuthUser) -> impl IntoResponse {
//!     auth_user.user_id()
//! }
//!
//! // Faculty or admin only
//! async fn overview(RequireFacultyOrAdmin(auth_user): RequireFacultyOrAdmin) -> impl IntoResponse {
//!     // ...
//! }
//! ```

pub mod auth;
