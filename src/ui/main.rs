//! Login UI - Client-Side Rendered (WASM)

use leptos::*;
use loginview::ui::components::App;
use loginview::LoginConfig;

fn main() {
  console_error_panic_hook::set_once();

  let config = match LoginConfig::from_yaml(include_str!("../../config/loginview.yaml")) {
    Ok(config) => config,
    Err(e) => {
      logging::error!("Invalid bundled config, using defaults: {}", e);
      LoginConfig::default()
    }
  };

  mount_to_body(move || view! { <App config=config/> });
}
