//! Global state for the login UI using Leptos signals

use leptos::*;
use std::rc::Rc;

use crate::auth::Session;
use crate::config::LoginConfig;
use crate::form::{FormState, FormStore};
use crate::notify::{Notification, NotificationSink, ToastList};

/// Page shown while signed out
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
  #[default]
  Login,
  Register,
}

/// Global application state with reactive signals
#[derive(Clone)]
pub struct AppState {
  pub config: Rc<LoginConfig>,
  pub page: RwSignal<Page>,
  pub session: RwSignal<Option<Session>>,
  pub toasts: RwSignal<ToastList>,
}

impl AppState {
  pub fn new(config: LoginConfig) -> Self {
    Self {
      config: Rc::new(config),
      page: create_rw_signal(Page::Login),
      session: create_rw_signal(None),
      toasts: create_rw_signal(ToastList::default()),
    }
  }

  pub fn show_toast(&self, notification: Notification) {
    self.toasts.update(|toasts| {
      toasts.push(notification);
    });
  }

  pub fn remove_toast(&self, id: u32) {
    self.toasts.update(|toasts| toasts.dismiss(id));
  }

  pub fn navigate(&self, page: Page) {
    self.page.set(page);
  }
}

impl NotificationSink for AppState {
  fn notify(&self, notification: Notification) {
    self.show_toast(notification);
  }
}

impl FormStore for RwSignal<FormState> {
  fn read(&self) -> FormState {
    self.get_untracked()
  }

  fn write(&self, f: impl FnOnce(&mut FormState)) {
    self.update(f);
  }
}
