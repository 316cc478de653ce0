//! UI Components
//!
//! Leptos components for the self-hosted page.

mod counter_panel;
mod signal_display;

pub use counter_panel::CounterPanel;
pub use signal_display::SignalDisplay;
