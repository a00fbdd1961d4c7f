//! Weather provider with synthetic fallback
//!
//! Live conditions come from the weather API when a key is configured. Any
//! failure (no key, network error, timeout, bad payload) falls back to a
//! synthetic scenario so callers always get a reading.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use rand::seq::SliceRandom;
use serde::Serialize;
use shared::{SyntheticScenario, WeatherReading, WeatherSource};

use crate::config::{ScenarioConfig, ScenarioMode, WeatherConfig};
use crate::external::weather::WeatherClient;

/// Picks the synthetic scenario used when live weather is unavailable
pub trait ScenarioSource: Send + Sync {
    fn next_scenario(&self) -> SyntheticScenario;
}

/// Uniformly random scenario on every call
#[derive(Debug, Default)]
pub struct RandomScenarios;

impl ScenarioSource for RandomScenarios {
    fn next_scenario(&self) -> SyntheticScenario {
        SyntheticScenario::ALL
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(SyntheticScenario::Mild)
    }
}

/// Always the same scenario
#[derive(Debug, Clone, Copy)]
pub struct FixedScenario(pub SyntheticScenario);

impl ScenarioSource for FixedScenario {
    fn next_scenario(&self) -> SyntheticScenario {
        self.0
    }
}

/// Walks the scenarios in order, wrapping around
#[derive(Debug, Default)]
pub struct CyclingScenarios {
    next: AtomicUsize,
}

impl ScenarioSource for CyclingScenarios {
    fn next_scenario(&self) -> SyntheticScenario {
        let index = self.next.fetch_add(1, Ordering::Relaxed) % SyntheticScenario::ALL.len();
        SyntheticScenario::ALL[index]
    }
}

/// Build the scenario source selected in configuration
pub fn scenario_source_from_config(config: &ScenarioConfig) -> Arc<dyn ScenarioSource> {
    match config.mode {
        ScenarioMode::Random => Arc::new(RandomScenarios),
        ScenarioMode::Fixed => Arc::new(FixedScenario(config.fixed_scenario())),
        ScenarioMode::Cycle => Arc::new(CyclingScenarios::default()),
    }
}

/// A reading together with where it came from
#[derive(Debug, Clone, Serialize)]
pub struct SourcedReading {
    pub reading: WeatherReading,
    pub source: WeatherSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario: Option<SyntheticScenario>,
}

/// Weather provider service
#[derive(Clone)]
pub struct WeatherProvider {
    client: Option<WeatherClient>,
    scenarios: Arc<dyn ScenarioSource>,
}

impl WeatherProvider {
    /// Create a provider from configuration; live fetches need an API key
    pub fn new(config: &WeatherConfig, scenarios: Arc<dyn ScenarioSource>) -> Self {
        let client = config
            .api_key
            .as_ref()
            .filter(|key| !key.trim().is_empty())
            .map(|key| {
                WeatherClient::with_base_url(
                    key.clone(),
                    config.api_endpoint.clone(),
                    Duration::from_secs(config.timeout_secs),
                )
            });

        Self { client, scenarios }
    }

    /// Provider that never calls out
    pub fn synthetic_only(scenarios: Arc<dyn ScenarioSource>) -> Self {
        Self {
            client: None,
            scenarios,
        }
    }

    /// Current conditions for a location; never fails
    pub async fn fetch(&self, location: &str) -> WeatherReading {
        self.fetch_sourced(location).await.reading
    }

    /// Current conditions with provenance
    pub async fn fetch_sourced(&self, location: &str) -> SourcedReading {
        if let Some(client) = &self.client {
            match client.get_current_weather(location).await {
                Ok(reading) => {
                    tracing::debug!(location, "Using live weather");
                    return SourcedReading {
                        reading,
                        source: WeatherSource::Live,
                        scenario: None,
                    };
                }
                Err(e) => {
                    tracing::warn!(location, error = %e, "Live weather unavailable, using synthetic data");
                }
            }
        }

        let scenario = self.scenarios.next_scenario();
        tracing::debug!(location, scenario = scenario.name(), "Using synthetic weather");
        SourcedReading {
            reading: scenario.reading(Utc::now()),
            source: WeatherSource::Synthetic,
            scenario: Some(scenario),
        }
    }
}
