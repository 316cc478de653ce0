//! Counter Frontend Entry Point

#[cfg(target_arch = "wasm32")]
fn main() {
    use counter_widget::app::App;
    use counter_widget::dom::{self, Host};
    use counter_widget::{logging, WidgetConfig};
    use leptos::prelude::*;

    logging::init();
    let config = WidgetConfig::from_window();

    // Page markup is only visible once parsed, so the hosting decision waits.
    let started = dom::on_ready(move || match dom::choose_host(&config) {
        Host::ExistingPage => {
            if let Err(e) = dom::bind_page(&config) {
                log::error!("[MAIN] Could not bind counter widget: {}", e);
            }
        }
        Host::SelfHosted => mount_to_body(move || view! { <App config=config /> }),
    });
    if let Err(e) = started {
        log::error!("[MAIN] Could not start counter widget: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("counter-widget runs in the browser; build it for wasm32 with `trunk serve`.");
}
