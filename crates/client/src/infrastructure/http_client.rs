//! HTTP client for the contractor backend

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::ports::outbound::{ApiError, RawApiPort};

/// reqwest-backed implementation of [`RawApiPort`]
#[derive(Clone)]
pub struct ApiAdapter {
    client: Client,
}

impl ApiAdapter {
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.request_timeout)
    }
}

#[async_trait]
impl RawApiPort for ApiAdapter {
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, ApiError> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        if !status.is_success() {
            return Err(ApiError::HttpError {
                status: status.as_u16(),
                body: text,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "Response body is not JSON; ignoring");
            Value::Null
        }))
    }
}
