//! # Advisor Core
//!
//! Core types shared by every crate in the Faculty Advisor workspace.
//!
//! - [`errors`]: the HTTP-facing [`AppError`] and its JSON error body
//!
//! # Example
//!
//! ```ignore
//! use advisor_core::AppError;
//!
//! let error = AppError::forbidden(anyhow::anyhow!("Access denied"));
//! ```

pub mod errors;

pub use axum::http::StatusCode;
pub use errors::{AppError, ErrorResponse};
