//! Auth service capability consumed by the login form

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Credentials handed to the auth service
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
  pub email: String,
  pub password: String,
}

/// User attached to an authenticated session
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
  #[serde(default)]
  pub id: String,
  #[serde(default)]
  pub email: Option<String>,
  #[serde(default)]
  pub name: Option<String>,
}

/// Opaque authenticated state. The form never inspects it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
  pub token: String,
  #[serde(default)]
  pub user: Option<SessionUser>,
}

impl Session {
  /// Name to greet the user with, falling back to the email.
  pub fn display_name(&self) -> Option<&str> {
    let user = self.user.as_ref()?;
    user.name.as_deref().or(user.email.as_deref())
  }
}

/// Credential and OAuth-redirect login.
///
/// Futures are not `Send`: implementations run on the browser event loop.
#[async_trait(?Send)]
pub trait AuthService {
  /// Authenticate with email and password.
  async fn login(&self, credentials: &Credentials) -> Result<Session, AuthError>;

  /// Start the Google redirect flow. Returning `Ok` means the redirect was
  /// initiated; completion is observed elsewhere.
  fn login_with_google(&self) -> Result<(), AuthError>;
}

#[async_trait(?Send)]
impl<T: AuthService + ?Sized> AuthService for &T {
  async fn login(&self, credentials: &Credentials) -> Result<Session, AuthError> {
    (**self).login(credentials).await
  }

  fn login_with_google(&self) -> Result<(), AuthError> {
    (**self).login_with_google()
  }
}

#[async_trait(?Send)]
impl<T: AuthService + ?Sized> AuthService for std::rc::Rc<T> {
  async fn login(&self, credentials: &Credentials) -> Result<Session, AuthError> {
    (**self).login(credentials).await
  }

  fn login_with_google(&self) -> Result<(), AuthError> {
    (**self).login_with_google()
  }
}
