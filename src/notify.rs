//! Toast notifications

use serde::{Deserialize, Serialize};
use std::cell::RefCell;

/// Visual style of a notification
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
  #[default]
  Default,
  Destructive,
}

/// A transient message shown to the user
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
  pub title: String,
  pub description: String,
  pub variant: Variant,
}

impl Notification {
  pub fn new(title: &str, description: &str) -> Self {
    Self {
      title: title.to_string(),
      description: description.to_string(),
      variant: Variant::Default,
    }
  }

  pub fn destructive(title: &str, description: &str) -> Self {
    Self {
      variant: Variant::Destructive,
      ..Self::new(title, description)
    }
  }

  pub fn is_destructive(&self) -> bool {
    self.variant == Variant::Destructive
  }
}

/// Anything that can display a notification
pub trait NotificationSink {
  fn notify(&self, notification: Notification);
}

impl<T: NotificationSink + ?Sized> NotificationSink for std::rc::Rc<T> {
  fn notify(&self, notification: Notification) {
    (**self).notify(notification)
  }
}

impl<T: NotificationSink + ?Sized> NotificationSink for &T {
  fn notify(&self, notification: Notification) {
    (**self).notify(notification)
  }
}

/// Toast notification with its queue id
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
  pub id: u32,
  #[serde(flatten)]
  pub notification: Notification,
}

/// Ordered toast list with id allocation. Ids start at 1 and are never
/// reused after a dismiss.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastList {
  toasts: Vec<Toast>,
  counter: u32,
}

impl ToastList {
  pub fn push(&mut self, notification: Notification) -> u32 {
    self.counter += 1;
    let id = self.counter;
    self.toasts.push(Toast { id, notification });
    id
  }

  pub fn dismiss(&mut self, id: u32) {
    self.toasts.retain(|t| t.id != id);
  }

  pub fn toasts(&self) -> &[Toast] {
    &self.toasts
  }
}

/// Toast list behind a `RefCell`, usable as a sink through `&self`
#[derive(Debug, Default)]
pub struct ToastQueue {
  list: RefCell<ToastList>,
}

impl ToastQueue {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn push(&self, notification: Notification) -> u32 {
    self.list.borrow_mut().push(notification)
  }

  pub fn dismiss(&self, id: u32) {
    self.list.borrow_mut().dismiss(id);
  }

  pub fn toasts(&self) -> Vec<Toast> {
    self.list.borrow().toasts().to_vec()
  }

  pub fn last(&self) -> Option<Notification> {
    self.list.borrow().toasts().last().map(|t| t.notification.clone())
  }

  pub fn len(&self) -> usize {
    self.list.borrow().toasts().len()
  }

  pub fn is_empty(&self) -> bool {
    self.list.borrow().toasts().is_empty()
  }
}

impl NotificationSink for ToastQueue {
  fn notify(&self, notification: Notification) {
    self.push(notification);
  }
}
