use leptos::*;

use crate::ui::state::{AppState, Page};

/// Landing panel for the "switch to registration" action
#[component]
pub fn RegisterPanel() -> impl IntoView {
  let state = use_context::<AppState>().expect("AppState not found");
  let register_url = state.config.links.register_url.clone();

  view! {
    <div class="auth-page">
      <div class="auth-card">
        <div class="auth-header">
          <h1>"Create an account"</h1>
          <p class="auth-subtitle">"Registration continues on the sign-up page"</p>
        </div>
        <a class="btn btn-primary btn-block" href=register_url>"Continue to sign up"</a>
        <p class="auth-footer">
          "Already have an account? "
          <button type="button" class="btn-link" on:click=move |_| state.navigate(Page::Login)>
            "Sign in"
          </button>
        </p>
      </div>
    </div>
  }
}
