//! Login form controller with an injected auth service, plus a Leptos CSR
//! front end behind the `csr` feature.

pub mod auth;
pub mod config;
pub mod error;
pub mod form;
pub mod notify;

// Browser UI (only compiled with csr feature)
#[cfg(feature = "csr")]
pub mod ui;

pub use auth::{AuthService, Credentials, Session, SessionUser};
pub use config::LoginConfig;
pub use error::{AuthError, ConfigError, LoginError, ValidationError};
pub use form::{FormState, FormStore, GoogleOutcome, LoginController, SubmitOutcome};
pub use notify::{Notification, NotificationSink, Toast, ToastList, ToastQueue, Variant};
