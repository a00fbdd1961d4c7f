//! Pest risk assessment orchestration

use std::sync::Arc;

use shared::{AssessmentOutcome, DiseaseLabel, RiskEngine, RuleSet};

use crate::config::WeatherConfig;
use crate::services::weather::{ScenarioSource, WeatherProvider};

/// Assessment service: weather in, farmer-facing assessment out
#[derive(Clone)]
pub struct AssessmentService {
    weather: WeatherProvider,
    engine: RiskEngine,
}

impl AssessmentService {
    /// Create a new AssessmentService
    pub fn new(config: &WeatherConfig, scenarios: Arc<dyn ScenarioSource>) -> Self {
        Self::with_provider(WeatherProvider::new(config, scenarios))
    }

    pub fn with_provider(weather: WeatherProvider) -> Self {
        Self {
            weather,
            engine: RiskEngine::default(),
        }
    }

    pub fn rules(&self) -> &RuleSet {
        self.engine.rules()
    }

    /// Assess pest risk for a location, honoring the classifier outcome
    ///
    /// An `Unknown` label short-circuits before any weather is fetched; the
    /// result would be discarded anyway.
    pub async fn assess(
        &self,
        location: &str,
        classifier_label: Option<DiseaseLabel>,
    ) -> AssessmentOutcome {
        if classifier_label.is_some_and(|label| label.is_unknown()) {
            tracing::info!(location, "Image unrecognized, skipping weather assessment");
            return AssessmentOutcome::Unrecognized;
        }

        let reading = self.weather.fetch(location).await;
        let outcome = self.engine.evaluate(&reading, classifier_label);

        if let AssessmentOutcome::Scored(assessment) = &outcome {
            tracing::debug!(
                location,
                risk_level = %assessment.verdict().level,
                "Pest risk assessed"
            );
        }

        outcome
    }
}
