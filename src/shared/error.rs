//! Shared Error Types
//!
//! Errors raised by the authentication transport and by payload handling.
//!
//! # Error Categories
//!
//! - [`AuthError`] - the three ways a login request can fail
//! - [`SharedError`] - JSON serialization/deserialization failures
//!
//! # User-Facing Messages
//!
//! No authentication error is ever surfaced to a caller as a failure of the
//! UI; [`AuthError::user_message`] converts every variant into the string the
//! login form displays.
use thiserror::Error;

/// Shown when the server cannot be reached at all (status 0).
pub const SERVER_NOT_RESPONDING: &str =
    "Der Server antwortet nicht. Probieren Sie später noch mal...";

/// Shown when the server rejects the login without a message of its own.
pub const INVALID_CREDENTIALS: &str = "Anmeldedaten sind ungültig";

/// Shown when the server accepted the request but sent an unusable body.
pub const UNEXPECTED_RESPONSE: &str = "Unerwartete Antwort vom Server";

/// Failure of a single login request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No HTTP response was received (connect failure, timeout, DNS).
    #[error("server unreachable: {reason}")]
    Unreachable { reason: String },

    /// The server answered with a non-success status.
    #[error("login rejected with status {status}")]
    Rejected {
        status: u16,
        /// Server-supplied error text, if any
        error: Option<String>,
    },

    /// A success status whose body is not a user id.
    #[error("malformed login response (status {status}): {body}")]
    MalformedResponse { status: u16, body: String },
}

impl AuthError {
    pub fn unreachable(reason: impl Into<String>) -> Self {
        Self::Unreachable { reason: reason.into() }
    }

    pub fn rejected(status: u16, error: Option<String>) -> Self {
        Self::Rejected { status, error }
    }

    /// HTTP status of the failure; `0` means no connectivity.
    pub fn status(&self) -> u16 {
        match self {
            AuthError::Unreachable { .. } => 0,
            AuthError::Rejected { status, .. } | AuthError::MalformedResponse { status, .. } => {
                *status
            }
        }
    }

    /// Server-supplied error text, if the server sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            AuthError::Rejected { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    /// The string the login form displays for this failure.
    pub fn user_message(&self) -> String {
        if self.status() == 0 {
            return SERVER_NOT_RESPONDING.to_string();
        }
        match self {
            AuthError::MalformedResponse { .. } => UNEXPECTED_RESPONSE.to_string(),
            _ => self
                .server_message()
                .map(str::to_string)
                .unwrap_or_else(|| INVALID_CREDENTIALS.to_string()),
        }
    }
}

/// Shared error types that can occur when handling payloads
#[derive(Debug, Error, Clone)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}
