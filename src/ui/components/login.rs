//! Login view component

use leptos::*;
use std::rc::Rc;

use crate::auth::AuthService;
use crate::form::{FormState, GoogleOutcome, LoginController};
use crate::ui::state::AppState;

#[component]
pub fn LoginView(
  service: Rc<dyn AuthService>,
  on_switch_to_register: Callback<()>,
) -> impl IntoView {
  let state = use_context::<AppState>().expect("AppState not found");
  let form = create_rw_signal(FormState::default());

  let controller = Rc::new(
    LoginController::with_store(service, state.clone(), form)
      .with_messages(state.config.messages.clone())
      .with_register_callback(move || on_switch_to_register.call(())),
  );

  let is_loading = move || form.with(|f| f.is_loading);
  let is_google_loading = move || form.with(|f| f.is_google_loading);
  let disabled = move || form.with(|f| f.controls_disabled());

  let submit_ctl = controller.clone();
  let on_submit = move |ev: ev::SubmitEvent| {
    ev.prevent_default();
    let controller = submit_ctl.clone();
    spawn_local(async move {
      controller.on_submit().await;
    });
  };

  let google_ctl = controller.clone();
  let on_google = move |_: ev::MouseEvent| {
    if let GoogleOutcome::Failed(e) = google_ctl.on_google_login() {
      leptos::logging::error!("Google sign-in failed: {}", e);
    }
  };

  let register_ctl = controller;
  let on_register = move |_: ev::MouseEvent| register_ctl.on_switch_to_register();

  view! {
    <div class="auth-page">
      <div class="auth-card">
        <div class="auth-header">
          <h1>"Welcome back"</h1>
          <p class="auth-subtitle">"Sign in to your account"</p>
        </div>

        <form class="auth-form" on:submit=on_submit>
          <div class="form-group">
            <label for="email">"Email"</label>
            <input
              type="email"
              id="email"
              class="input"
              placeholder="you@example.com"
              autocomplete="email"
              prop:value=move || form.with(|f| f.email.clone())
              on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
              disabled=disabled
            />
          </div>

          <div class="form-group">
            <label for="password">"Password"</label>
            <input
              type="password"
              id="password"
              class="input"
              placeholder="Enter your password"
              autocomplete="current-password"
              prop:value=move || form.with(|f| f.password.clone())
              on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
              disabled=disabled
            />
          </div>

          <button type="submit" class="btn btn-primary btn-block" disabled=disabled>
            {move || if is_loading() { "Signing in..." } else { "Sign In" }}
          </button>
        </form>

        <div class="auth-divider">
          <span>"or"</span>
        </div>

        <button
          type="button"
          class="btn btn-secondary btn-block btn-google"
          on:click=on_google
          disabled=disabled
        >
          {move || if is_google_loading() { "Redirecting..." } else { "Continue with Google" }}
        </button>

        <p class="auth-footer">
          "Don't have an account? "
          <button type="button" class="btn-link" on:click=on_register>
            "Sign up"
          </button>
        </p>
      </div>
    </div>
  }
}
