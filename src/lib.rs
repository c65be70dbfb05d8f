//! # Faculty Advisor API
//!
//! HTTP surface of the Faculty Advisor access gate, built with Axum.
//!
//! ## Overview
//!
//! Every protected route declares a [`CapabilityRequirement`] and receives the
//! verified [`Principal`] from an extractor that calls the
//! [`AccessGate`]. The gate:
//!
//! 1. rejects requests without a bearer credential,
//! 2. verifies the JWT signature and expiry,
//! 3. checks that the token's session is still active in the session store,
//! 4. compares the principal's role with the route's requirement.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/       # Access extractors (AuthUser, RequireAdmin, ...)
//! ├── modules/          # Feature modules
//! │   ├── index/       # Service directory at `/`
//! │   ├── health/      # Session store health check
//! │   ├── access/      # Role-gated demo endpoints
//! │   └── students/    # Role-dependent student data
//! ├── docs.rs          # OpenAPI document served at /docs
//! ├── logging.rs       # Subscriber setup and request logging
//! ├── metrics.rs       # Prometheus recorder and gate decision counters
//! ├── router.rs        # Main application router
//! └── state.rs         # Shared application state
//! ```
//!
//! Workspace crates:
//!
//! - `advisor-core`: `AppError`
//! - `advisor-config`: JWT, CORS and server configuration
//! - `advisor-auth`: the gate, its collaborator traits and JWT verification
//! - `advisor-sessions`: Redis and in-memory session stores
//!
//! ## Status Codes
//!
//! | Gate result                                        | Status |
//! |----------------------------------------------------|--------|
//! | Missing credential, invalid token, revoked session | 401    |
//! | Role mismatch                                      | 403    |
//! | Verifier or session store unreachable              | 503    |
//!
//! ## Environment Variables
//!
//! ```bash
//! JWT_SECRET=shared-secret-with-the-login-service
//! SESSION_BACKEND=redis
//! REDIS_URL=redis://127.0.0.1:6379
//! SESSION_KEY_PREFIX=advisor
//! ALLOWED_ORIGINS=*
//! HOST=0.0.0.0
//! PORT=8000
//! ```
//!
//! [`CapabilityRequirement`]: advisor_auth::CapabilityRequirement
//! [`Principal`]: advisor_auth::Principal
//! [`AccessGate`]: advisor_auth::AccessGate

pub mod docs;
pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;

// Re-export workspace crates for convenience
pub use advisor_auth;
pub use advisor_config;
pub use advisor_core;
pub use advisor_sessions;
