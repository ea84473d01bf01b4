//! Signed-in panel

use leptos::*;

use crate::notify::Notification;
use crate::ui::apiclient;
use crate::ui::state::AppState;

#[component]
pub fn SignedInPanel() -> impl IntoView {
  let state = use_context::<AppState>().expect("AppState not found");
  let session = state.session;
  let (signing_out, set_signing_out) = create_signal(false);

  let name = move || {
    session.with(|s| {
      s.as_ref()
        .and_then(|s| s.display_name().map(|n| n.to_string()))
        .unwrap_or_else(|| "your account".to_string())
    })
  };

  let on_logout = move |_: ev::MouseEvent| {
    set_signing_out.set(true);
    let state = state.clone();
    spawn_local(async move {
      if let Err(e) = apiclient::logout(&state.config).await {
        leptos::logging::warn!("Logout request failed: {}", e);
      }
      state.session.set(None);
      state.show_toast(Notification::new("signed out", "you have been signed out"));
      set_signing_out.set(false);
    });
  };

  view! {
    <div class="auth-page">
      <div class="auth-card">
        <div class="auth-header">
          <h1>"Signed in"</h1>
          <p class="auth-subtitle">{move || format!("Signed in as {}", name())}</p>
        </div>
        <button
          type="button"
          class="btn btn-secondary btn-block"
          on:click=on_logout
          disabled=move || signing_out.get()
        >
          {move || if signing_out.get() { "Signing out..." } else { "Sign Out" }}
        </button>
      </div>
    </div>
  }
}
