//! Typed API wrapper for application services.
//!
//! `Api` wraps an `Arc<dyn RawApiPort>` and handles the serde_json conversions,
//! so services work with domain types and adapters with JSON values.

use serde::Serialize;
use std::sync::Arc;

use crate::ports::outbound::{ApiError, RawApiPort};

#[derive(Clone)]
pub struct Api {
    raw: Arc<dyn RawApiPort>,
}

impl Api {
    pub fn new(raw: Arc<dyn RawApiPort>) -> Self {
        Self { raw }
    }

    /// POST `body` as JSON and discard whatever the server answers.
    pub async fn post_no_response<B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let body_value =
            serde_json::to_value(body).map_err(|e| ApiError::SerializeError(e.to_string()))?;
        self.raw.post_json(url, &body_value).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockRawApiPort;
    use serde_json::json;

    #[derive(Serialize)]
    struct Ping {
        value: u8,
    }

    #[tokio::test]
    async fn post_no_response_serializes_body_and_drops_response() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .withf(|url, body| url == "http://backend/ping" && *body == json!({ "value": 7 }))
            .times(1)
            .returning(|_, _| Ok(json!({ "ignored": true })));

        let api = Api::new(Arc::new(raw));
        let result = api
            .post_no_response("http://backend/ping", &Ping { value: 7 })
            .await;

        assert_eq!(result, Ok(()));
    }

    #[tokio::test]
    async fn post_no_response_passes_errors_through() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json().returning(|_, _| {
            Err(ApiError::HttpError {
                status: 400,
                body: "bad".to_string(),
            })
        });

        let api = Api::new(Arc::new(raw));
        let result = api
            .post_no_response("http://backend/ping", &Ping { value: 1 })
            .await;

        assert_eq!(result.unwrap_err().status(), Some(400));
    }
}
