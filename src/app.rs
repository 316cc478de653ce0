//! Counter Frontend App
//!
//! Root component for pages that do not ship their own counter markup.

use leptos::prelude::*;

use crate::components::CounterPanel;
use crate::config::WidgetConfig;

#[component]
pub fn App(config: WidgetConfig) -> impl IntoView {
    view! {
        <main class="counter-app">
            <h1>"Counter"</h1>
            <CounterPanel config=config />
        </main>
    }
}
