//! # Advisor Config
//!
//! Configuration types loaded from environment variables:
//!
//! - [`jwt`]: token verification settings
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) settings
//! - [`server`]: listen address
//!
//! # Example
//!
//! ```ignore
//! use advisor_config::{CorsConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! jwt_config.validate()?;
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod server;

pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;

/// Error raised when a configuration value cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}
