use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};

use crate::errors::{ClientError, ClientResult};
use crate::implementations::config::ClientConfig;
use crate::models::health::{ApiInfo, HealthReport};
use crate::models::validation::{ValidationRequest, ValidationResponse};
use crate::traits::backend::ValidationBackend;

/// Production [`ValidationBackend`] backed by a reqwest client.
#[derive(Clone)]
pub struct HttpValidationBackend {
    http_client: reqwest::Client,
}

impl HttpValidationBackend {
    /// Create a backend from the client configuration.
    ///
    /// No request timeout is applied unless the config asks for one.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let mut builder = reqwest::Client::builder();

        if let Some(secs) = config.timeout_secs {
            info!("Using request timeout of {}s", secs);
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let http_client = builder
            .build()
            .map_err(|e| ClientError::SystemError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { http_client })
    }

    async fn get_json<T>(&self, url: &str) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        debug!("GET {}", url);
        let response = self.http_client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status, body));
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str(&body)?;
        Ok(parsed)
    }
}

#[async_trait]
impl ValidationBackend for HttpValidationBackend {
    async fn validate(
        &self,
        api_url: &str,
        request: &ValidationRequest,
    ) -> ClientResult<ValidationResponse> {
        debug!("POST {} ({} bytes of text)", api_url, request.text.len());

        let response = self.http_client.post(api_url).json(request).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("Validation request failed with status {}", status);
            return Err(api_error(status, body));
        }

        let body = response.text().await?;
        let parsed: ValidationResponse = serde_json::from_str(&body)?;
        info!(
            "Received {} claim(s), validated = {}",
            parsed.claims.len(),
            parsed.validated
        );
        Ok(parsed)
    }

    async fn fetch_health(&self, base_url: &str) -> ClientResult<HealthReport> {
        let url = format!("{}/health", base_url.trim_end_matches('/'));
        self.get_json(&url).await
    }

    async fn fetch_info(&self, base_url: &str) -> ClientResult<ApiInfo> {
        let url = format!("{}/", base_url.trim_end_matches('/'));
        self.get_json(&url).await
    }
}

/// Build the error for a non-2xx response, falling back to the status'
/// canonical reason when the body is empty (the fetch statusText analog).
fn api_error(status: reqwest::StatusCode, body: String) -> ClientError {
    let body = if body.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Unknown Error")
            .to_string()
    } else {
        body
    };

    ClientError::Api {
        status: status.as_u16(),
        body,
    }
}
