//! Raw API Port - Object-safe HTTP boundary
//!
//! `RawApiPort` works on `serde_json::Value` so it can be stored behind
//! `Arc<dyn ...>` in the composition root. The application layer provides a
//! typed wrapper (`application::api::Api`) on top.

use async_trait::async_trait;
use serde_json::Value;

use super::ApiError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RawApiPort: Send + Sync {
    /// POST a JSON body to an absolute URL.
    ///
    /// Returns the parsed response body, or `Value::Null` when the body is
    /// empty or not JSON. Non-2xx statuses are `ApiError::HttpError`.
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, ApiError>;
}
