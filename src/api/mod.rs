//! Counter API
//!
//! The two counter endpoints behind a trait, so the widget runs against the
//! browser's fetch in production and against scripted fakes in tests.

#[cfg(target_arch = "wasm32")]
mod http;

#[cfg(target_arch = "wasm32")]
pub use http::HttpCounterApi;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::ApiError;
use crate::models::CounterValue;

/// Access to the server-held counter.
///
/// Futures are `?Send`: everything runs on the page's single event loop.
#[async_trait(?Send)]
pub trait CounterApi {
    /// `GET /api/counter`
    async fn fetch_counter(&self) -> Result<CounterValue, ApiError>;

    /// `POST /api/counter/increment` with an empty JSON-typed body.
    async fn increment_counter(&self) -> Result<CounterValue, ApiError>;
}

/// Anything outside 2xx is a failure.
pub fn check_status(status: u16, status_text: &str) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status {
            status,
            status_text: status_text.to_string(),
        })
    }
}

/// Only a JSON object is a counter body; serde would otherwise also accept
/// the sequence form `[8]`.
pub fn parse_counter_body(body: &str) -> Result<CounterValue, ApiError> {
    let object: Map<String, Value> =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    serde_json::from_value(Value::Object(object)).map_err(|e| ApiError::Decode(e.to_string()))
}
