//! Password strength checking library and HTTP service
//!
//! Scores a password against five independent criteria (length, digits,
//! uppercase, lowercase, special characters) and maps the number of
//! satisfied criteria to a [`PasswordStrength`] label.
//!
//! # Features
//!
//! - `server` (default): axum HTTP service with tracing-based logging
//!
//! # Environment Variables (server)
//!
//! - `PWD_STRENGTH_HOST`: bind address (default: `0.0.0.0`)
//! - `PWD_STRENGTH_PORT`: bind port (default: `8000`)
//! - `RUST_LOG`: log filter (default: `info,tower_http=debug`)
//!
//! # Example
//!
//! ```rust
//! use pwd_strength_api::{check_password, PasswordStrength};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Passw0rd!".to_string().into());
//! let response = check_password(&password);
//!
//! assert_eq!(response.strength, PasswordStrength::Strong);
//! assert!(response.details.special_chars);
//! ```

// Internal modules
mod evaluator;
mod sections;
mod types;
mod validation;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod error;
#[cfg(feature = "server")]
pub mod telemetry;

// Public API
pub use evaluator::{check_password, classify, evaluate};
pub use sections::{MIN_LENGTH, SPECIAL_CHARS};
pub use types::{Criteria, PasswordResponse, PasswordStrength};
pub use validation::{
    MAX_PASSWORD_CHARS, MIN_PASSWORD_CHARS, ValidationError, validate_password,
};
