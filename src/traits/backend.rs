use async_trait::async_trait;

use crate::errors::ClientResult;
use crate::models::health::{ApiInfo, HealthReport};
use crate::models::validation::{ValidationRequest, ValidationResponse};

/// The network seam of the client.
///
/// The session drives everything through this trait so that the HTTP layer
/// can be replaced with a scripted double in tests. The production
/// implementation is [`crate::implementations::http_backend::HttpValidationBackend`].
#[async_trait]
pub trait ValidationBackend: Send + Sync {
    /// POST the validation request to the given endpoint and decode the
    /// response body.
    ///
    /// Any non-2xx status is an error carrying the status code and the
    /// response body text; transport and decode failures are passed through
    /// unchanged.
    async fn validate(
        &self,
        api_url: &str,
        request: &ValidationRequest,
    ) -> ClientResult<ValidationResponse>;

    /// GET `<base>/health`.
    async fn fetch_health(&self, base_url: &str) -> ClientResult<HealthReport>;

    /// GET `<base>/`.
    async fn fetch_info(&self, base_url: &str) -> ClientResult<ApiInfo>;
}
