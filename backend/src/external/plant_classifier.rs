//! Leaf image classifier client
//!
//! Client for the plant disease classification microservice. The service
//! returns raw per-class scores; the unknown threshold is applied here so
//! every caller uses the same configured value.

use std::time::Duration;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::{ClassScore, Classification};

use crate::config::ClassifierConfig;
use crate::error::{AppError, AppResult};

/// Client for the leaf image classifier
#[derive(Clone)]
pub struct PlantClassifierClient {
    api_endpoint: String,
    api_key: String,
    confidence_threshold: f64,
    timeout: Duration,
    http_client: Client,
}

/// Request to classify a leaf image
#[derive(Debug, Serialize)]
pub struct ClassifyLeafRequest {
    pub request_id: String,
    pub image_base64: String,
}

/// Response from the classification API
#[derive(Debug, Deserialize)]
pub struct ClassifyLeafResponse {
    #[serde(default)]
    pub request_id: Option<String>,
    pub predictions: Vec<ClassScore>,
}

impl ClassifyLeafResponse {
    /// Whether the response belongs to `request_id`; a missing echo is accepted
    pub fn matches_request(&self, request_id: &str) -> bool {
        self.request_id.as_deref().map_or(true, |echoed| echoed == request_id)
    }
}

impl PlantClassifierClient {
    /// Create a new classifier client
    pub fn new(
        api_endpoint: String,
        api_key: String,
        confidence_threshold: f64,
        timeout: Duration,
    ) -> Self {
        Self {
            api_endpoint,
            api_key,
            confidence_threshold,
            timeout,
            http_client: Client::new(),
        }
    }

    /// Create a client from configuration; `None` when no endpoint is set
    pub fn from_config(config: &ClassifierConfig) -> Option<Self> {
        let api_endpoint = config.api_endpoint.clone()?;
        let api_key = config.api_key.clone().unwrap_or_default();

        Some(Self::new(
            api_endpoint,
            api_key,
            config.confidence_threshold,
            Duration::from_secs(config.timeout_secs),
        ))
    }

    pub fn confidence_threshold(&self) -> f64 {
        self.confidence_threshold
    }

    /// Send an image for classification and apply the unknown threshold
    pub async fn classify(&self, request_id: &str, image: &[u8]) -> AppResult<Classification> {
        let request = ClassifyLeafRequest {
            request_id: request_id.to_string(),
            image_base64: BASE64.encode(image),
        };

        let response = self
            .http_client
            .post(&self.api_endpoint)
            .header("x-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::ClassifierError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::ClassifierError(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        let result: ClassifyLeafResponse = response
            .json()
            .await
            .map_err(|e| AppError::ClassifierError(format!("Failed to parse response: {}", e)))?;

        if !result.matches_request(request_id) {
            tracing::warn!(
                request_id,
                echoed = result.request_id.as_deref().unwrap_or_default(),
                "Classifier response carries a different request id"
            );
        }

        Ok(self.interpret(&result))
    }

    /// Turn raw class scores into a final classification
    pub fn interpret(&self, response: &ClassifyLeafResponse) -> Classification {
        Classification::from_scores(&response.predictions, self.confidence_threshold)
    }
}
