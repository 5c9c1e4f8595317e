//! Credential Types
//!
//! This module defines the login/password pair submitted for authentication
//! and the identity that replaces it once the server accepts the login.
//!
//! # Password Lifetime
//!
//! The password is held as a [`SecretString`]: it is redacted from `Debug`
//! output and zeroized when dropped. A [`Credentials`] value lives only for
//! the duration of one login request; converting it into an
//! [`AuthenticatedUser`] consumes it, so the password never reaches shared
//! session state.
//!
//! # Usage
//!
//! ```rust
//! use onboarding::shared::credentials::Credentials;
//!
//! let credentials = Credentials::new("Max Mustermann", "geheim123");
//! let user = credentials.into_authenticated(42);
//! assert_eq!(user.id, 42);
//! assert!(user.password.is_empty());
//! ```

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, Serializer};

/// Identifier assigned by the authentication server.
pub type UserId = i64;

/// Login + password pair, built fresh for every submission.
#[derive(Debug, Serialize)]
pub struct Credentials {
    pub login: String,
    #[serde(serialize_with = "serialize_password")]
    pub password: SecretString,
}

impl Credentials {
    pub fn new(login: impl Into<String>, password: &str) -> Self {
        Self {
            login: login.into(),
            password: SecretString::from(password),
        }
    }

    /// Turn accepted credentials into the published identity.
    pub fn into_authenticated(self, id: UserId) -> AuthenticatedUser {
        AuthenticatedUser {
            id,
            login: self.login,
            password: String::new(),
        }
    }
}

/// The login request body is the only place the password leaves its secret.
fn serialize_password<S: Serializer>(password: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(password.expose_secret())
}

/// Identity published to the session after a successful login.
///
/// `password` is always empty; the field is kept so consumers that expect
/// the full user record can still deserialize it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub login: String,
    #[serde(default)]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_new() {
        let credentials = Credentials::new("Max Mustermann", "geheim123");
        assert_eq!(credentials.login, "Max Mustermann");
        assert_eq!(credentials.password.expose_secret(), "geheim123");
    }

    #[test]
    fn test_into_authenticated_drops_password() {
        let user = Credentials::new("Max Mustermann", "geheim123").into_authenticated(42);
        assert_eq!(user.id, 42);
        assert_eq!(user.login, "Max Mustermann");
        assert_eq!(user.password, "");
    }

    #[test]
    fn test_debug_redacts_password() {
        let credentials = Credentials::new("Max Mustermann", "geheim123");
        let debug = format!("{:?}", credentials);
        assert!(debug.contains("Max Mustermann"));
        assert!(!debug.contains("geheim123"));
    }

    #[test]
    fn test_credentials_serialize_as_login_request() {
        let credentials = Credentials::new("Max Mustermann", "geheim123");
        let json = serde_json::to_value(&credentials).unwrap();
        assert_eq!(json["login"], "Max Mustermann");
        assert_eq!(json["password"], "geheim123");
    }

    #[test]
    fn test_authenticated_user_password_defaults_empty() {
        let user: AuthenticatedUser =
            serde_json::from_str(r#"{"id": 7, "login": "Erika Muster"}"#).unwrap();
        assert_eq!(user.id, 7);
        assert!(user.password.is_empty());
    }
}
