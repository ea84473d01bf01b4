//! Login controller tests - validation, service calls, notifications, loading flags

use async_trait::async_trait;
use loginview::config::Messages;
use loginview::{
  AuthError, AuthService, Credentials, GoogleOutcome, LoginController, LoginError, Notification,
  Session, SessionUser, SubmitOutcome, ToastQueue, ValidationError,
};
use std::cell::{Cell, RefCell};

/// Scripted auth service that records every call
struct MockAuth {
  login_result: Result<Session, AuthError>,
  google_result: Result<(), AuthError>,
  login_calls: RefCell<Vec<Credentials>>,
  google_calls: Cell<usize>,
}

impl MockAuth {
  fn succeeding() -> Self {
    Self {
      login_result: Ok(session()),
      google_result: Ok(()),
      login_calls: RefCell::new(Vec::new()),
      google_calls: Cell::new(0),
    }
  }

  fn failing(err: AuthError) -> Self {
    Self {
      login_result: Err(err),
      ..Self::succeeding()
    }
  }

  fn google_failing(err: AuthError) -> Self {
    Self {
      google_result: Err(err),
      ..Self::succeeding()
    }
  }

  fn login_count(&self) -> usize {
    self.login_calls.borrow().len()
  }
}

#[async_trait(?Send)]
impl AuthService for MockAuth {
  async fn login(&self, credentials: &Credentials) -> Result<Session, AuthError> {
    self.login_calls.borrow_mut().push(credentials.clone());
    // Suspend once so concurrent callers observe the in-flight state
    tokio::task::yield_now().await;
    self.login_result.clone()
  }

  fn login_with_google(&self) -> Result<(), AuthError> {
    self.google_calls.set(self.google_calls.get() + 1);
    self.google_result.clone()
  }
}

fn session() -> Session {
  Session {
    token: "tok_123".to_string(),
    user: Some(SessionUser {
      id: "u1".to_string(),
      email: Some("a@b.com".to_string()),
      name: None,
    }),
  }
}

fn controller<'a>(
  auth: &'a MockAuth,
  toasts: &'a ToastQueue,
  email: &str,
  password: &str,
) -> LoginController<&'a MockAuth, &'a ToastQueue> {
  let c = LoginController::new(auth, toasts);
  c.set_email(email);
  c.set_password(password);
  c
}

// =============================================================================
// Validation
// =============================================================================

#[tokio::test]
async fn test_empty_email_skips_service() {
  let auth = MockAuth::succeeding();
  let toasts = ToastQueue::new();
  let c = controller(&auth, &toasts, "", "x");

  let outcome = c.on_submit().await;

  assert_eq!(
    outcome,
    SubmitOutcome::Failed(LoginError::Validation(ValidationError::EmailRequired))
  );
  assert_eq!(auth.login_count(), 0);
  assert_eq!(
    toasts.last(),
    Some(Notification::destructive("error", "email is required"))
  );
  assert!(!c.state().is_loading);
}

#[tokio::test]
async fn test_whitespace_email_skips_service() {
  let auth = MockAuth::succeeding();
  let toasts = ToastQueue::new();
  let c = controller(&auth, &toasts, "   \t", "secret");

  c.on_submit().await;

  assert_eq!(auth.login_count(), 0);
  assert_eq!(toasts.last().unwrap().description, "email is required");
}

#[tokio::test]
async fn test_empty_password_skips_service() {
  let auth = MockAuth::succeeding();
  let toasts = ToastQueue::new();
  let c = controller(&auth, &toasts, "a@b.com", "");

  let outcome = c.on_submit().await;

  assert_eq!(
    outcome,
    SubmitOutcome::Failed(LoginError::Validation(ValidationError::PasswordRequired))
  );
  assert_eq!(auth.login_count(), 0);
  assert_eq!(
    toasts.last(),
    Some(Notification::destructive("error", "password is required"))
  );
}

// =============================================================================
// Submission
// =============================================================================

#[tokio::test]
async fn test_successful_login() {
  let auth = MockAuth::succeeding();
  let toasts = ToastQueue::new();
  let c = controller(&auth, &toasts, "a@b.com", "pw");

  let outcome = c.on_submit().await;

  assert_eq!(outcome, SubmitOutcome::LoggedIn(session()));
  assert_eq!(auth.login_count(), 1);
  assert_eq!(
    toasts.last(),
    Some(Notification::new("success", "login successful"))
  );
  assert!(!c.state().is_loading);
}

#[tokio::test]
async fn test_email_trimmed_before_service() {
  let auth = MockAuth::succeeding();
  let toasts = ToastQueue::new();
  let c = controller(&auth, &toasts, "  a@b.com  ", "pw");

  c.on_submit().await;

  let calls = auth.login_calls.borrow();
  assert_eq!(calls[0].email, "a@b.com");
  assert_eq!(calls[0].password, "pw");
}

#[tokio::test]
async fn test_loading_set_while_in_flight() {
  let auth = MockAuth::succeeding();
  let toasts = ToastQueue::new();
  let c = controller(&auth, &toasts, "a@b.com", "pw");

  // Polled after the submit future has suspended inside the service
  let observe = async { c.state() };
  let (_, during) = tokio::join!(c.on_submit(), observe);

  assert!(during.is_loading);
  assert!(during.controls_disabled());
  assert!(!c.state().is_loading);
}

#[tokio::test]
async fn test_second_submit_while_in_flight_is_busy() {
  let auth = MockAuth::succeeding();
  let toasts = ToastQueue::new();
  let c = controller(&auth, &toasts, "a@b.com", "pw");

  let (first, second) = tokio::join!(c.on_submit(), c.on_submit());

  assert_eq!(first, SubmitOutcome::LoggedIn(session()));
  assert_eq!(second, SubmitOutcome::Busy);
  assert_eq!(auth.login_count(), 1);
  assert_eq!(toasts.len(), 1);
}

#[tokio::test]
async fn test_sequential_submissions_each_call_once() {
  let auth = MockAuth::succeeding();
  let toasts = ToastQueue::new();
  let c = controller(&auth, &toasts, "a@b.com", "pw");

  c.on_submit().await;
  c.on_submit().await;

  assert_eq!(auth.login_count(), 2);
}

// =============================================================================
// Failure messages
// =============================================================================

#[tokio::test]
async fn test_structured_server_message_shown() {
  let auth = MockAuth::failing(AuthError::from_response(
    401,
    r#"{"error": "invalid credentials"}"#,
  ));
  let toasts = ToastQueue::new();
  let c = controller(&auth, &toasts, "a@b.com", "pw");

  c.on_submit().await;

  assert_eq!(
    toasts.last(),
    Some(Notification::destructive("login failed", "invalid credentials"))
  );
  assert!(!c.state().is_loading);
}

#[tokio::test]
async fn test_error_own_message_shown() {
  let auth = MockAuth::failing(AuthError::Network("connection refused".to_string()));
  let toasts = ToastQueue::new();
  let c = controller(&auth, &toasts, "a@b.com", "pw");

  let outcome = c.on_submit().await;

  assert_eq!(
    outcome,
    SubmitOutcome::Failed(LoginError::AuthFailure(
      "network error: connection refused".to_string()
    ))
  );
  assert_eq!(
    toasts.last().unwrap().description,
    "network error: connection refused"
  );
}

#[tokio::test]
async fn test_generic_fallback_shown() {
  let auth = MockAuth::failing(AuthError::Other(String::new()));
  let toasts = ToastQueue::new();
  let c = controller(&auth, &toasts, "a@b.com", "pw");

  let outcome = c.on_submit().await;

  assert!(matches!(outcome, SubmitOutcome::Failed(LoginError::Unexpected(_))));
  assert_eq!(
    toasts.last(),
    Some(Notification::destructive(
      "login failed",
      "an unexpected error occurred"
    ))
  );
}

#[tokio::test]
async fn test_custom_messages() {
  let auth = MockAuth::succeeding();
  let toasts = ToastQueue::new();
  let messages = Messages {
    success_title: "welcome".to_string(),
    login_successful: "signed in".to_string(),
    ..Messages::default()
  };
  let c = controller(&auth, &toasts, "a@b.com", "pw").with_messages(messages);

  c.on_submit().await;

  assert_eq!(toasts.last(), Some(Notification::new("welcome", "signed in")));
}

// =============================================================================
// Google sign-in
// =============================================================================

#[tokio::test]
async fn test_google_login_leaves_flag_set() {
  let auth = MockAuth::succeeding();
  let toasts = ToastQueue::new();
  let c = LoginController::new(&auth, &toasts);

  let outcome = c.on_google_login();

  assert_eq!(outcome, GoogleOutcome::Redirecting);
  assert_eq!(auth.google_calls.get(), 1);
  assert!(c.state().is_google_loading);
  assert!(toasts.is_empty());
}

#[tokio::test]
async fn test_google_failure_resets_flag_and_notifies() {
  let auth = MockAuth::google_failing(AuthError::Redirect("no window".to_string()));
  let toasts = ToastQueue::new();
  let c = LoginController::new(&auth, &toasts);

  let outcome = c.on_google_login();

  assert_eq!(
    outcome,
    GoogleOutcome::Failed(AuthError::Redirect("no window".to_string()))
  );
  assert!(!c.state().is_google_loading);
  assert_eq!(
    toasts.last(),
    Some(Notification::destructive("error", "google sign-in failed"))
  );
}

#[tokio::test]
async fn test_google_pending_blocks_submit() {
  let auth = MockAuth::succeeding();
  let toasts = ToastQueue::new();
  let c = controller(&auth, &toasts, "a@b.com", "pw");

  c.on_google_login();
  let outcome = c.on_submit().await;

  assert_eq!(outcome, SubmitOutcome::Busy);
  assert_eq!(auth.login_count(), 0);
  assert_eq!(c.on_google_login(), GoogleOutcome::Busy);
  assert_eq!(auth.google_calls.get(), 1);
}
