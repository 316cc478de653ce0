//! Counter Widget
//!
//! Browser widget that shows a server-held counter and increments it on
//! click. The controller in [`widget`] is written against three seams
//! ([`api::CounterApi`], [`display::CounterDisplay`], [`schedule::Scheduler`])
//! whose browser implementations are only compiled for `wasm32`.

pub mod api;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod schedule;
pub mod widget;

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod components;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod logging;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod testing;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

pub use api::CounterApi;
pub use config::WidgetConfig;
pub use display::CounterDisplay;
pub use error::{ApiError, BindError, WidgetError};
pub use models::CounterValue;
pub use schedule::Scheduler;
pub use widget::CounterWidget;
