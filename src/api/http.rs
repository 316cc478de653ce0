//! HTTP client for the counter endpoints, built on the browser fetch API.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};

use super::{check_status, parse_counter_body, CounterApi};
use crate::config::WidgetConfig;
use crate::error::ApiError;
use crate::models::CounterValue;

#[derive(Debug, Clone)]
pub struct HttpCounterApi {
    counter_url: String,
    increment_url: String,
}

impl HttpCounterApi {
    pub fn new(config: &WidgetConfig) -> Self {
        Self {
            counter_url: config.counter_url(),
            increment_url: config.increment_url(),
        }
    }

    fn fetch_request(&self) -> RequestBuilder {
        Request::get(&self.counter_url)
    }

    /// JSON-typed POST with no body.
    fn increment_request(&self) -> RequestBuilder {
        Request::post(&self.increment_url).header("Content-Type", "application/json")
    }
}

#[async_trait(?Send)]
impl CounterApi for HttpCounterApi {
    async fn fetch_counter(&self) -> Result<CounterValue, ApiError> {
        log::debug!("[API] GET {}", self.counter_url);
        let response = self
            .fetch_request()
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        into_counter(response).await
    }

    async fn increment_counter(&self) -> Result<CounterValue, ApiError> {
        log::debug!("[API] POST {}", self.increment_url);
        let response = self
            .increment_request()
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        into_counter(response).await
    }
}

/// Status first: an error page is never parsed as a counter.
async fn into_counter(response: Response) -> Result<CounterValue, ApiError> {
    check_status(response.status(), &response.status_text())?;
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    parse_counter_body(&body)
}
