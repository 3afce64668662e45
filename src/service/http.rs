use super::traits::{PredictionService, ServiceFuture};
use super::types::{ClothingResponse, FeelsResponse};
use crate::config::ServiceConfig;
use crate::engine::schema::{PredictRequest, WirePayload};
use crate::error::ServiceError;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

const MAX_ERROR_BODY_CHARS: usize = 200;

/// Build the shared HTTP client. `request_timeout_secs = None` leaves the
/// overall request unbounded; only connection setup is capped.
pub fn build_service_client(connect_timeout_secs: u64, request_timeout_secs: Option<u64>) -> Client {
    let mut builder = Client::builder()
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .pool_max_idle_per_host(4)
        .pool_idle_timeout(Duration::from_secs(90));
    if let Some(secs) = request_timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder.build().unwrap_or_else(|_| Client::new())
}

/// Truncate an error body so a misbehaving server cannot flood logs.
pub fn truncate_error_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= MAX_ERROR_BODY_CHARS {
        return trimmed.to_string();
    }

    let mut end = MAX_ERROR_BODY_CHARS;
    while end > 0 && !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &trimmed[..end])
}

/// JSON-over-HTTP client for the prediction service.
pub struct HttpPredictionService {
    /// Pre-computed endpoint URLs (avoids `format!` per request).
    feels_url: String,
    clothing_url: String,
    client: Client,
}

impl HttpPredictionService {
    pub fn new(config: &ServiceConfig) -> Self {
        let base_url = config.base_url.trim_end_matches('/');
        Self {
            feels_url: join_endpoint(base_url, &config.feels_endpoint),
            clothing_url: join_endpoint(base_url, &config.clothing_endpoint),
            client: build_service_client(config.connect_timeout_secs, config.request_timeout_secs),
        }
    }

    pub fn feels_url(&self) -> &str {
        &self.feels_url
    }

    pub fn clothing_url(&self) -> &str {
        &self.clothing_url
    }

    async fn post<T: DeserializeOwned>(
        &self,
        url: &str,
        payload: &WirePayload,
    ) -> Result<T, ServiceError> {
        debug!(url, "posting prediction request");
        let response = self
            .client
            .post(url)
            .json(&PredictRequest::single(payload))
            .send()
            .await
            .map_err(|e| ServiceError::Transport {
                endpoint: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read error body>".to_string());
            return Err(ServiceError::Status {
                endpoint: url.to_string(),
                status: status.as_u16(),
                body: truncate_error_body(&body),
            });
        }

        response.json::<T>().await.map_err(|e| ServiceError::Decode {
            endpoint: url.to_string(),
            message: e.to_string(),
        })
    }
}

fn join_endpoint(base_url: &str, endpoint: &str) -> String {
    format!("{base_url}/{}", endpoint.trim_start_matches('/'))
}

impl PredictionService for HttpPredictionService {
    fn name(&self) -> &str {
        "http"
    }

    fn predict_feels<'a>(&'a self, payload: &'a WirePayload) -> ServiceFuture<'a, FeelsResponse> {
        Box::pin(async move { self.post(&self.feels_url, payload).await })
    }

    fn predict_clothing<'a>(
        &'a self,
        payload: &'a WirePayload,
    ) -> ServiceFuture<'a, ClothingResponse> {
        Box::pin(async move { self.post(&self.clothing_url, payload).await })
    }
}
