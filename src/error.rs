//! Error Types
//!
//! Failures of the counter endpoints, of the widget operations that call
//! them, and of binding the widget to an existing page.

use thiserror::Error;

/// Failure talking to one of the counter endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("unexpected status {status} {status_text}")]
    Status { status: u16, status_text: String },
    /// The body was not `{"value": <non-negative integer>}`.
    #[error("malformed counter body: {0}")]
    Decode(String),
}

/// Failure of a widget operation. Logged where it happens, never re-thrown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    #[error("failed to fetch counter: {0}")]
    Fetch(#[source] ApiError),
    #[error("failed to increment counter: {0}")]
    Increment(#[source] ApiError),
}

/// Failure wiring the widget to elements already on the page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("no window or document available")]
    NoDocument,
    #[error("element #{0} not found")]
    MissingElement(String),
    #[error("element #{0} is not an HTML element")]
    NotHtmlElement(String),
    #[error("could not attach listener: {0}")]
    Listener(String),
}
