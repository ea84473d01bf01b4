//! Toast notification component

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::notify::Variant;
use crate::ui::state::AppState;

#[component]
pub fn ToastContainer() -> impl IntoView {
  let state = use_context::<AppState>().expect("AppState not found");
  let toasts = state.toasts;
  let timeout_ms = state.config.toasts.timeout_ms;

  view! {
    <div id="toast-container" class="toast-container">
      <For
        each=move || toasts.with(|list| list.toasts().to_vec())
        key=|t| t.id
        children=move |toast| {
          let state = use_context::<AppState>().expect("AppState not found");
          let id = toast.id;
          let level_class = variant_class(toast.notification.variant);

          // Auto-remove after the configured delay
          let state_timeout = state.clone();
          let timeout = Timeout::new(timeout_ms, move || {
            state_timeout.remove_toast(id);
          });
          timeout.forget();

          view! {
            <div class=format!("toast show {}", level_class) role="status">
              <div class="toast-body">
                <strong class="toast-title">{toast.notification.title.clone()}</strong>
                <span class="toast-message">{toast.notification.description.clone()}</span>
              </div>
              <button class="toast-close btn-ghost" aria-label="Close" on:click=move |_| state.remove_toast(id)>
                "×"
              </button>
            </div>
          }
        }
      />
    </div>
  }
}

fn variant_class(variant: Variant) -> &'static str {
  match variant {
    Variant::Default => "success",
    Variant::Destructive => "error",
  }
}
