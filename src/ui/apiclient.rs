//! HTTP auth service talking to the auth backend

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_storage::{LocalStorage, Storage};
use leptos::*;
use serde::Deserialize;
use std::rc::Rc;
use wasm_bindgen::JsValue;

use crate::auth::{AuthService, Credentials, Session, SessionUser};
use crate::config::LoginConfig;
use crate::error::AuthError;

pub fn get_stored_token(key: &str) -> Option<String> {
  LocalStorage::get(key).ok()
}

pub fn set_stored_token(key: &str, token: &str) {
  if let Err(e) = LocalStorage::set(key, token) {
    leptos::logging::warn!("Failed to store session token: {}", e);
  }
}

pub fn clear_stored_token(key: &str) {
  LocalStorage::delete(key);
}

fn network_error(e: gloo_net::Error) -> AuthError {
  AuthError::Network(e.to_string())
}

fn redirect_error(e: JsValue) -> AuthError {
  AuthError::Redirect(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

fn with_bearer(req: RequestBuilder, token: &str) -> RequestBuilder {
  req.header("Authorization", &format!("Bearer {}", token))
}

/// Turn a non-success response into a rejection carrying the server message.
async fn rejection(resp: Response) -> AuthError {
  let status = resp.status();
  let body = resp.text().await.unwrap_or_default();
  AuthError::from_response(status, &body)
}

/// [`AuthService`] backed by the auth HTTP API.
///
/// Successful logins are published to `session`; the app shell reacts to
/// that signal.
pub struct HttpAuthService {
  config: Rc<LoginConfig>,
  session: RwSignal<Option<Session>>,
}

impl HttpAuthService {
  pub fn new(config: Rc<LoginConfig>, session: RwSignal<Option<Session>>) -> Self {
    Self { config, session }
  }
}

#[async_trait(?Send)]
impl AuthService for HttpAuthService {
  async fn login(&self, credentials: &Credentials) -> Result<Session, AuthError> {
    let resp = Request::post(&self.config.login_url())
      .json(credentials)
      .map_err(network_error)?
      .send()
      .await
      .map_err(network_error)?;
    if !resp.ok() {
      return Err(rejection(resp).await);
    }

    let session: Session = resp
      .json()
      .await
      .map_err(|e| AuthError::Decode(e.to_string()))?;
    set_stored_token(&self.config.storage.token_key, &session.token);
    self.session.set(Some(session.clone()));
    Ok(session)
  }

  fn login_with_google(&self) -> Result<(), AuthError> {
    let window = web_sys::window()
      .ok_or_else(|| AuthError::Redirect("window not available".to_string()))?;
    let location = window.location();
    let current = location.href().map_err(redirect_error)?;
    let target = format!(
      "{}?redirect_uri={}",
      self.config.google_url(),
      urlencoding::encode(&current)
    );
    location.set_href(&target).map_err(redirect_error)
  }
}

/// Load the session for a stored token, if any. A 401 clears the token.
pub async fn restore_session(config: &LoginConfig) -> Result<Option<Session>, AuthError> {
  #[derive(Deserialize)]
  struct SessionResp {
    #[serde(default)]
    user: Option<SessionUser>,
  }

  let key = &config.storage.token_key;
  let Some(token) = get_stored_token(key) else {
    return Ok(None);
  };

  let resp = with_bearer(Request::get(&config.session_url()), &token)
    .send()
    .await
    .map_err(network_error)?;
  if resp.status() == 401 {
    clear_stored_token(key);
    return Ok(None);
  }
  if !resp.ok() {
    return Err(rejection(resp).await);
  }

  let body: SessionResp = resp
    .json()
    .await
    .map_err(|e| AuthError::Decode(e.to_string()))?;
  Ok(Some(Session {
    token,
    user: body.user,
  }))
}

/// End the session. The stored token is cleared even if the request fails.
pub async fn logout(config: &LoginConfig) -> Result<(), AuthError> {
  let key = &config.storage.token_key;
  let result = match get_stored_token(key) {
    Some(token) => with_bearer(Request::post(&config.logout_url()), &token)
      .send()
      .await
      .map_err(network_error)
      .map(|_| ()),
    None => Ok(()),
  };
  clear_stored_token(key);
  result
}
