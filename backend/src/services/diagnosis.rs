//! Leaf image diagnosis: classification, advice and pest risk together

use std::sync::Arc;

use serde::Serialize;
use shared::{AssessmentOutcome, DiseaseAdvice, DiseaseLabel};
use uuid::Uuid;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::external::PlantClassifierClient;
use crate::services::assessment::AssessmentService;
use crate::services::weather::ScenarioSource;

/// An uploaded leaf image
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Diagnosis result returned to the caller
#[derive(Debug, Serialize)]
pub struct DiagnosisResponse {
    pub request_id: Uuid,
    pub prediction: DiseaseLabel,
    pub confidence: f64,
    pub advice: DiseaseAdvice,
    pub pest_risk: AssessmentOutcome,
}

/// Diagnosis service
pub struct DiagnosisService {
    classifier: Option<PlantClassifierClient>,
    assessment: AssessmentService,
    default_location: String,
}

impl DiagnosisService {
    /// Create a new DiagnosisService
    pub fn new(config: &Config, scenarios: Arc<dyn ScenarioSource>) -> Self {
        Self {
            classifier: PlantClassifierClient::from_config(&config.classifier),
            assessment: AssessmentService::new(&config.weather, scenarios),
            default_location: config.weather.default_location.clone(),
        }
    }

    /// Diagnose an uploaded leaf image
    pub async fn diagnose(
        &self,
        upload: ImageUpload,
        location: Option<String>,
    ) -> AppResult<DiagnosisResponse> {
        shared::validate_image_upload(&upload.filename, upload.bytes.len())
            .map_err(|e| AppError::InvalidUpload(e.to_string()))?;

        let location = match location.map(|l| l.trim().to_string()) {
            Some(l) if !l.is_empty() => {
                shared::validate_location(&l).map_err(|e| AppError::Validation {
                    field: "location".to_string(),
                    message: e.to_string(),
                })?;
                l
            }
            _ => self.default_location.clone(),
        };

        let classifier = self
            .classifier
            .as_ref()
            .ok_or(AppError::ClassifierUnavailable)?;

        let request_id = Uuid::new_v4();
        let classification = classifier
            .classify(&request_id.to_string(), &upload.bytes)
            .await?;

        tracing::info!(
            %request_id,
            prediction = %classification.label,
            confidence = classification.confidence,
            "Leaf image classified"
        );

        let pest_risk = self
            .assessment
            .assess(&location, Some(classification.label))
            .await;

        Ok(DiagnosisResponse {
            request_id,
            prediction: classification.label,
            confidence: classification.confidence,
            advice: shared::advice::lookup(classification.label, Some(classification.confidence)),
            pest_risk,
        })
    }
}
