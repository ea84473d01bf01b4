//! Error types for the login flow

use serde::Deserialize;
use thiserror::Error;

/// Field validation errors, raised before the auth service is contacted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("email is required")]
  EmailRequired,
  #[error("password is required")]
  PasswordRequired,
}

/// Failures reported by an [`AuthService`](crate::auth::AuthService)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
  /// The backend answered with a non-success status
  #[error("request failed with status {status}")]
  Rejected {
    status: u16,
    server_message: Option<String>,
  },
  #[error("network error: {0}")]
  Network(String),
  #[error("invalid response: {0}")]
  Decode(String),
  #[error("redirect failed: {0}")]
  Redirect(String),
  #[error("{0}")]
  Other(String),
}

/// Error body shapes the backend may return.
/// `{"error": "..."}` wins over `{"message": "..."}`.
#[derive(Debug, Default, Deserialize)]
struct ServerErrorBody {
  #[serde(default)]
  error: Option<serde_json::Value>,
  #[serde(default)]
  message: Option<String>,
}

impl ServerErrorBody {
  fn into_message(self) -> Option<String> {
    let from_error = match self.error {
      Some(serde_json::Value::String(s)) => Some(s),
      // Nested form: {"error": {"message": "..."}}
      Some(serde_json::Value::Object(map)) => map
        .get("message")
        .and_then(|v| v.as_str())
        .map(|s| s.to_string()),
      _ => None,
    };
    from_error
      .or(self.message)
      .filter(|s| !s.trim().is_empty())
  }
}

impl AuthError {
  /// Build a rejection from an HTTP status and raw response body.
  pub fn from_response(status: u16, body: &str) -> Self {
    let server_message = serde_json::from_str::<ServerErrorBody>(body)
      .ok()
      .and_then(ServerErrorBody::into_message);
    AuthError::Rejected {
      status,
      server_message,
    }
  }

  /// Structured message supplied by the server, if the error carries one
  pub fn server_message(&self) -> Option<&str> {
    match self {
      AuthError::Rejected {
        server_message: Some(msg),
        ..
      } => Some(msg.as_str()),
      _ => None,
    }
  }
}

/// User-facing classification of a failed login attempt
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
  #[error(transparent)]
  Validation(#[from] ValidationError),
  #[error("{0}")]
  AuthFailure(String),
  #[error("{0}")]
  Unexpected(String),
}

impl LoginError {
  /// Classify a service error. Prefers the server message, then the error's
  /// own text, then `fallback`.
  pub fn from_auth(err: &AuthError, fallback: &str) -> Self {
    if let Some(msg) = err.server_message() {
      return LoginError::AuthFailure(msg.to_string());
    }
    let own = err.to_string();
    if own.trim().is_empty() {
      LoginError::Unexpected(fallback.to_string())
    } else {
      LoginError::AuthFailure(own)
    }
  }

  pub fn message(&self) -> String {
    self.to_string()
  }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to parse config: {0}")]
  Parse(#[from] serde_yaml::Error),
}
