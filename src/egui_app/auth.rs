/**
 * Authentication Module
 *
 * The authentication seam of the client: the `AuthClient` trait the login
 * controller talks to, and its HTTP implementation.
 */

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::egui_app::config::Config;
use crate::shared::credentials::{Credentials, UserId};
use crate::shared::error::{AuthError, SharedError};

/// Exchanges credentials for a user id.
#[async_trait]
pub trait AuthClient: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<UserId, AuthError>;
}

/// `AuthClient` backed by the onboarding server's login endpoint.
#[derive(Debug, Clone)]
pub struct HttpAuthClient {
    client: Client,
    login_url: String,
}

impl HttpAuthClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            login_url: config.login_url(),
        })
    }

    pub fn login_url(&self) -> &str {
        &self.login_url
    }
}

#[async_trait]
impl AuthClient for HttpAuthClient {
    async fn login(&self, credentials: &Credentials) -> Result<UserId, AuthError> {
        tracing::debug!(url = %self.login_url, login = %credentials.login, "sending login request");

        let response = self
            .client
            .post(&self.login_url)
            .json(credentials)
            .send()
            .await
            .map_err(|e| AuthError::unreachable(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AuthError::unreachable(e.to_string()))?;

        if !status.is_success() {
            return Err(AuthError::rejected(status.as_u16(), server_message(&body)));
        }

        parse_user_id(&body).map_err(|e| {
            tracing::warn!(status = status.as_u16(), error = %e, "login response is not a user id");
            AuthError::MalformedResponse {
                status: status.as_u16(),
                body: body.trim().to_string(),
            }
        })
    }
}

/// Accepted shapes of a successful login body: `42`, `"42"` or `{"id": 42}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum UserIdBody {
    Plain(UserId),
    Text(String),
    Object { id: UserId },
}

pub(crate) fn parse_user_id(body: &str) -> Result<UserId, SharedError> {
    let parsed: UserIdBody = serde_json::from_str(body.trim())?;
    match parsed {
        UserIdBody::Plain(id) | UserIdBody::Object { id } => Ok(id),
        UserIdBody::Text(text) => text
            .trim()
            .parse()
            .map_err(|e| SharedError::serialization(format!("user id {:?}: {}", text, e))),
    }
}

/// Error text carried by a rejection body, if any.
///
/// Plain text is used as is. JSON strings are unwrapped, objects contribute
/// their `error` or `message` string, and an empty body or `null` means none.
/// An object with neither field set to a non-empty string carries no message.
pub(crate) fn server_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Null) => None,
        Ok(Value::String(text)) => Some(text).filter(|t| !t.trim().is_empty()),
        Ok(Value::Object(map)) => ["error", "message"]
            .iter()
            .filter_map(|key| map.get(*key).and_then(Value::as_str))
            .find(|text| !text.trim().is_empty())
            .map(str::to_string),
        _ => Some(trimmed.to_string()),
    }
}
