//! Counter Panel Component
//!
//! Renders the counter value and the increment button, loading the value
//! once on mount.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::SignalDisplay;
use crate::api::HttpCounterApi;
use crate::config::WidgetConfig;
use crate::schedule::BrowserScheduler;
use crate::widget::CounterWidget;

#[component]
pub fn CounterPanel(config: WidgetConfig) -> impl IntoView {
    let display = SignalDisplay::new("…");
    let value_id = config.value_element_id.clone();
    let button_id = config.button_element_id.clone();

    // Rc-backed, so kept in local storage rather than captured directly.
    let widget = StoredValue::new_local(CounterWidget::new(
        HttpCounterApi::new(&config),
        display,
        BrowserScheduler,
        config,
    ));

    // Initial load on mount
    Effect::new(move |_| {
        let widget = widget.get_value();
        spawn_local(async move {
            let _ = widget.load().await;
        });
    });

    // Every click issues its own request; the button is never disabled.
    let increment = move |_| {
        let widget = widget.get_value();
        spawn_local(async move {
            let _ = widget.increment().await;
        });
    };

    view! {
        <div class="counter-panel">
            <span id=value_id class=move || display.class_attr("counter-value")>
                {move || display.text()}
            </span>
            <button id=button_id class="increment-btn" on:click=increment>
                "+1"
            </button>
        </div>
    }
}
