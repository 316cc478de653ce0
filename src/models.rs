//! Frontend Models
//!
//! Data structures matching the counter endpoints.

use serde::Deserialize;

/// Counter body returned by both `GET /api/counter` and
/// `POST /api/counter/increment`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CounterValue {
    pub value: u64,
}

impl CounterValue {
    pub fn new(value: u64) -> Self {
        Self { value }
    }
}
