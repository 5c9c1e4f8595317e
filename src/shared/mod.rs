//! Shared Module
//!
//! Platform-agnostic types used by the login client: the credential record,
//! the form validation rules, configuration and error types.
//!
//! Nothing in here depends on egui, so every rule can be tested without a UI.

/// Credentials and the authenticated identity
pub mod credentials;

/// Pure login form validation
pub mod validation;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use credentials::{AuthenticatedUser, Credentials, UserId};
pub use validation::{validate, Constraint, Field, Violation};
pub use error::{AuthError, SharedError};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
