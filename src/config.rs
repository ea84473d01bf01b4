use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn is_var_start(c: char) -> bool {
  c.is_ascii_alphabetic() || c == '_'
}

fn is_var_char(c: char) -> bool {
  c.is_ascii_alphanumeric() || c == '_'
}

/// Expand `$VAR_NAME` and `${VAR_NAME}` in one left-to-right pass.
///
/// Substituted values are copied verbatim and never rescanned. Unset
/// variables expand to nothing; an unclosed `${` and a `$` not followed by a
/// name are kept as written.
fn expand_env_vars(input: &str) -> String {
  let mut out = String::with_capacity(input.len());
  let mut rest = input;

  while let Some(pos) = rest.find('$') {
    out.push_str(&rest[..pos]);
    let after = &rest[pos + 1..];

    if let Some(braced) = after.strip_prefix('{') {
      let Some(end) = braced.find('}') else {
        out.push_str(&rest[pos..]);
        return out;
      };
      out.push_str(&std::env::var(&braced[..end]).unwrap_or_default());
      rest = &braced[end + 1..];
      continue;
    }

    let name_len = match after.chars().next() {
      Some(c) if is_var_start(c) => after
        .char_indices()
        .find(|(_, c)| !is_var_char(*c))
        .map_or(after.len(), |(i, _)| i),
      _ => 0,
    };
    if name_len == 0 {
      out.push('$');
    } else {
      out.push_str(&std::env::var(&after[..name_len]).unwrap_or_default());
    }
    rest = &after[name_len..];
  }

  out.push_str(rest);
  out
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginConfig {
  #[serde(default)]
  pub api: ApiSection,
  #[serde(default)]
  pub storage: StorageSection,
  #[serde(default)]
  pub toasts: ToastSection,
  #[serde(default)]
  pub links: LinksSection,
  #[serde(default)]
  pub messages: Messages,
}

/// Auth backend endpoints, relative to `base`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSection {
  #[serde(default)]
  pub base: String,
  #[serde(default = "default_login_path")]
  pub login_path: String,
  #[serde(default = "default_google_path")]
  pub google_path: String,
  #[serde(default = "default_session_path")]
  pub session_path: String,
  #[serde(default = "default_logout_path")]
  pub logout_path: String,
}

fn default_login_path() -> String {
  "/api/auth/login".to_string()
}

fn default_google_path() -> String {
  "/api/auth/google".to_string()
}

fn default_session_path() -> String {
  "/api/auth/session".to_string()
}

fn default_logout_path() -> String {
  "/api/auth/logout".to_string()
}

impl Default for ApiSection {
  fn default() -> Self {
    Self {
      base: String::new(),
      login_path: default_login_path(),
      google_path: default_google_path(),
      session_path: default_session_path(),
      logout_path: default_logout_path(),
    }
  }
}

/// Browser storage settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSection {
  /// LocalStorage key holding the session token
  #[serde(default = "default_token_key")]
  pub token_key: String,
}

fn default_token_key() -> String {
  "loginview_token".to_string()
}

impl Default for StorageSection {
  fn default() -> Self {
    Self {
      token_key: default_token_key(),
    }
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToastSection {
  /// Auto-dismiss delay in milliseconds
  #[serde(default = "default_toast_timeout")]
  pub timeout_ms: u32,
}

fn default_toast_timeout() -> u32 {
  5000
}

impl Default for ToastSection {
  fn default() -> Self {
    Self {
      timeout_ms: default_toast_timeout(),
    }
  }
}

/// Pages outside the login view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinksSection {
  #[serde(default = "default_register_url")]
  pub register_url: String,
}

fn default_register_url() -> String {
  "/register".to_string()
}

impl Default for LinksSection {
  fn default() -> Self {
    Self {
      register_url: default_register_url(),
    }
  }
}

/// User-facing notification text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
  pub error_title: String,
  pub success_title: String,
  pub failure_title: String,
  pub email_required: String,
  pub password_required: String,
  pub login_successful: String,
  pub google_failed: String,
  pub unexpected: String,
}

impl Default for Messages {
  fn default() -> Self {
    Self {
      error_title: "error".to_string(),
      success_title: "success".to_string(),
      failure_title: "login failed".to_string(),
      email_required: "email is required".to_string(),
      password_required: "password is required".to_string(),
      login_successful: "login successful".to_string(),
      google_failed: "google sign-in failed".to_string(),
      unexpected: "an unexpected error occurred".to_string(),
    }
  }
}

impl LoginConfig {
  /// Parse YAML after expanding environment variables.
  pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
    let expanded = expand_env_vars(content);
    Ok(serde_yaml::from_str(&expanded)?)
  }

  pub fn login_url(&self) -> String {
    format!("{}{}", self.api.base, self.api.login_path)
  }

  pub fn google_url(&self) -> String {
    format!("{}{}", self.api.base, self.api.google_path)
  }

  pub fn session_url(&self) -> String {
    format!("{}{}", self.api.base, self.api.session_path)
  }

  pub fn logout_url(&self) -> String {
    format!("{}{}", self.api.base, self.api.logout_path)
  }
}
