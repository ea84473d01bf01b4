//! Login UI components

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use std::rc::Rc;

use crate::auth::AuthService;
use crate::config::LoginConfig;
use crate::ui::apiclient::{self, HttpAuthService};
use crate::ui::state::{AppState, Page};

mod login;
mod register;
mod session;
mod toast;

pub use login::LoginView;
pub use register::RegisterPanel;
pub use session::SignedInPanel;
pub use toast::ToastContainer;

/// Main App component
#[component]
pub fn App(config: LoginConfig) -> impl IntoView {
  provide_meta_context();

  let state = AppState::new(config);
  provide_context(state.clone());

  let service: Rc<dyn AuthService> = Rc::new(HttpAuthService::new(
    state.config.clone(),
    state.session,
  ));

  let (auth_loading, set_auth_loading) = create_signal(true);

  // Pick up a session left by an earlier visit
  let state_restore = state.clone();
  create_effect(move |_| {
    let state = state_restore.clone();
    spawn_local(async move {
      match apiclient::restore_session(&state.config).await {
        Ok(session) => state.session.set(session),
        Err(e) => leptos::logging::warn!("Session restore failed: {}", e),
      }
      set_auth_loading.set(false);
    });
  });

  let session = state.session;
  let page = state.page;
  let on_switch_to_register = Callback::new(move |_| state.navigate(Page::Register));

  view! {
    <Title text="Sign in"/>

    <Show when=move || auth_loading.get()>
      <div class="auth-loading">
        <div class="loading-spinner"></div>
        " Loading..."
      </div>
    </Show>

    <Show when=move || !auth_loading.get() && session.with(|s| s.is_some())>
      <SignedInPanel/>
    </Show>

    <Show when=move || !auth_loading.get() && session.with(|s| s.is_none()) && page.get() == Page::Login>
      <LoginView service=service.clone() on_switch_to_register=on_switch_to_register/>
    </Show>

    <Show when=move || !auth_loading.get() && session.with(|s| s.is_none()) && page.get() == Page::Register>
      <RegisterPanel/>
    </Show>

    <ToastContainer/>
  }
}
