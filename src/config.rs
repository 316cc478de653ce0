//! Widget Configuration
//!
//! Endpoint base, element ids, pulse timing and error text. Every field has
//! a default, so an empty or partial config object is valid.

use std::time::Duration;

use serde::Deserialize;

/// Name of the optional global object the page can define to override
/// defaults, e.g. `window.COUNTER_WIDGET_CONFIG = { apiBase: "/v2" }`.
pub const CONFIG_GLOBAL: &str = "COUNTER_WIDGET_CONFIG";

const COUNTER_PATH: &str = "/api/counter";
const INCREMENT_PATH: &str = "/api/counter/increment";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Prefix for both endpoint paths; empty means same origin.
    pub api_base: String,
    pub value_element_id: String,
    pub button_element_id: String,
    pub updated_class: String,
    pub pulse_ms: u32,
    /// Shown in the display when the initial fetch fails.
    pub error_text: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            value_element_id: "counter-value".to_string(),
            button_element_id: "increment-button".to_string(),
            updated_class: "updated".to_string(),
            pulse_ms: 300,
            error_text: "Error".to_string(),
        }
    }
}

impl WidgetConfig {
    pub fn counter_url(&self) -> String {
        self.join(COUNTER_PATH)
    }

    pub fn increment_url(&self) -> String {
        self.join(INCREMENT_PATH)
    }

    pub fn pulse(&self) -> Duration {
        Duration::from_millis(u64::from(self.pulse_ms))
    }

    fn join(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }

    /// Read overrides from `window.COUNTER_WIDGET_CONFIG`, falling back to
    /// defaults when it is absent or malformed.
    #[cfg(target_arch = "wasm32")]
    pub fn from_window() -> Self {
        use wasm_bindgen::JsValue;

        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let raw = match js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)) {
            Ok(raw) if !raw.is_undefined() && !raw.is_null() => raw,
            _ => return Self::default(),
        };
        match serde_wasm_bindgen::from_value(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("[CONFIG] Ignoring malformed {}: {}", CONFIG_GLOBAL, e);
                Self::default()
            }
        }
    }
}
