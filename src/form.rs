//! Login form state and the controller that drives it
//!
//! The controller owns no rendering. It reads and writes [`FormState`]
//! through a [`FormStore`], so the same logic runs against a plain
//! `RefCell` natively and against a reactive signal in the browser.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, error};

use crate::auth::{AuthService, Credentials, Session};
use crate::config::Messages;
use crate::error::{AuthError, LoginError, ValidationError};
use crate::notify::{Notification, NotificationSink};

/// Local UI state of the login form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
  pub email: String,
  pub password: String,
  pub is_loading: bool,
  pub is_google_loading: bool,
}

impl FormState {
  /// True while a submission or Google redirect is in flight
  pub fn controls_disabled(&self) -> bool {
    self.is_loading || self.is_google_loading
  }

  /// Check that both fields are present. The email is trimmed, the password
  /// is passed through as typed.
  pub fn validate(&self) -> Result<Credentials, ValidationError> {
    let email = self.email.trim();
    if email.is_empty() {
      return Err(ValidationError::EmailRequired);
    }
    if self.password.trim().is_empty() {
      return Err(ValidationError::PasswordRequired);
    }
    Ok(Credentials {
      email: email.to_string(),
      password: self.password.clone(),
    })
  }
}

/// Storage for [`FormState`].
///
/// Callers never hold a borrow across an await: every access is a snapshot
/// read or a closure-scoped write.
pub trait FormStore {
  fn read(&self) -> FormState;
  fn write(&self, f: impl FnOnce(&mut FormState));
}

impl FormStore for RefCell<FormState> {
  fn read(&self) -> FormState {
    self.borrow().clone()
  }

  fn write(&self, f: impl FnOnce(&mut FormState)) {
    f(&mut self.borrow_mut());
  }
}

impl<S: FormStore> FormStore for Rc<S> {
  fn read(&self) -> FormState {
    (**self).read()
  }

  fn write(&self, f: impl FnOnce(&mut FormState)) {
    (**self).write(f)
  }
}

/// Result of a submit request
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
  /// Another request was already in flight; nothing happened
  Busy,
  LoggedIn(Session),
  Failed(LoginError),
}

/// Result of a Google sign-in request
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GoogleOutcome {
  Busy,
  /// Redirect started; the loading flag stays set
  Redirecting,
  Failed(AuthError),
}

enum Begin {
  Busy,
  Invalid(ValidationError),
  Ready(Credentials),
}

/// Event handlers of the login view
pub struct LoginController<A, N, S = RefCell<FormState>> {
  auth: A,
  notifier: N,
  store: S,
  messages: Messages,
  register: Option<Box<dyn Fn()>>,
}

impl<A, N> LoginController<A, N>
where
  A: AuthService,
  N: NotificationSink,
{
  pub fn new(auth: A, notifier: N) -> Self {
    Self::with_store(auth, notifier, RefCell::new(FormState::default()))
  }
}

impl<A, N, S> LoginController<A, N, S>
where
  A: AuthService,
  N: NotificationSink,
  S: FormStore,
{
  pub fn with_store(auth: A, notifier: N, store: S) -> Self {
    Self {
      auth,
      notifier,
      store,
      messages: Messages::default(),
      register: None,
    }
  }

  pub fn with_messages(mut self, messages: Messages) -> Self {
    self.messages = messages;
    self
  }

  /// Callback run by [`on_switch_to_register`](Self::on_switch_to_register)
  pub fn with_register_callback(mut self, callback: impl Fn() + 'static) -> Self {
    self.register = Some(Box::new(callback));
    self
  }

  pub fn state(&self) -> FormState {
    self.store.read()
  }

  pub fn store(&self) -> &S {
    &self.store
  }

  pub fn set_email(&self, email: impl Into<String>) {
    let email = email.into();
    self.store.write(|form| form.email = email);
  }

  pub fn set_password(&self, password: impl Into<String>) {
    let password = password.into();
    self.store.write(|form| form.password = password);
  }

  /// Validate, call the auth service once, and report the outcome.
  pub async fn on_submit(&self) -> SubmitOutcome {
    let begin = {
      let form = self.store.read();
      if form.controls_disabled() {
        Begin::Busy
      } else {
        match form.validate() {
          Ok(credentials) => Begin::Ready(credentials),
          Err(e) => Begin::Invalid(e),
        }
      }
    };

    let credentials = match begin {
      Begin::Busy => return SubmitOutcome::Busy,
      Begin::Invalid(e) => {
        let description = match e {
          ValidationError::EmailRequired => &self.messages.email_required,
          ValidationError::PasswordRequired => &self.messages.password_required,
        };
        self.notifier.notify(Notification::destructive(
          &self.messages.error_title,
          description,
        ));
        return SubmitOutcome::Failed(LoginError::Validation(e));
      }
      Begin::Ready(credentials) => credentials,
    };

    self.store.write(|form| form.is_loading = true);
    debug!(email = %credentials.email, "Submitting login");

    let result = self.auth.login(&credentials).await;
    self.store.write(|form| form.is_loading = false);
    debug!(ok = result.is_ok(), "Login finished");

    match result {
      Ok(session) => {
        self.notifier.notify(Notification::new(
          &self.messages.success_title,
          &self.messages.login_successful,
        ));
        SubmitOutcome::LoggedIn(session)
      }
      Err(err) => {
        let err = LoginError::from_auth(&err, &self.messages.unexpected);
        self.notifier.notify(Notification::destructive(
          &self.messages.failure_title,
          &err.message(),
        ));
        SubmitOutcome::Failed(err)
      }
    }
  }

  /// Start the Google redirect flow.
  ///
  /// On success the loading flag is left set: the page navigates away.
  pub fn on_google_login(&self) -> GoogleOutcome {
    if self.store.read().controls_disabled() {
      return GoogleOutcome::Busy;
    }

    self.store.write(|form| form.is_google_loading = true);
    match self.auth.login_with_google() {
      Ok(()) => {
        debug!("Google sign-in redirect started");
        GoogleOutcome::Redirecting
      }
      Err(err) => {
        error!(error = %err, "Google sign-in failed");
        self.store.write(|form| form.is_google_loading = false);
        self.notifier.notify(Notification::destructive(
          &self.messages.error_title,
          &self.messages.google_failed,
        ));
        GoogleOutcome::Failed(err)
      }
    }
  }

  pub fn on_switch_to_register(&self) {
    if let Some(callback) = &self.register {
      callback();
    }
  }
}
