//! Configuration management for the LeafGuard server
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with LG_ prefix and `__` between
//!    nested keys (e.g. `LG_WEATHER__API_KEY`)

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::{SyntheticScenario, DEFAULT_CONFIDENCE_THRESHOLD};

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Weather API configuration
    pub weather: WeatherConfig,

    /// Leaf image classifier configuration
    pub classifier: ClassifierConfig,

    /// Synthetic weather fallback configuration
    pub scenarios: ScenarioConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Weather API endpoint
    pub api_endpoint: String,

    /// Weather API key; without one every request uses synthetic weather
    pub api_key: Option<String>,

    /// Upper bound on a single weather request
    pub timeout_secs: u64,

    /// Location used when the caller does not name one
    pub default_location: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ClassifierConfig {
    /// Classifier microservice endpoint
    pub api_endpoint: Option<String>,

    /// Classifier API key
    pub api_key: Option<String>,

    /// Top-class confidence below which the label becomes Unknown
    pub confidence_threshold: f64,

    /// Upper bound on a single classification request
    pub timeout_secs: u64,
}

/// How the synthetic weather scenario is picked
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioMode {
    Random,
    Fixed,
    Cycle,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScenarioConfig {
    /// Selection strategy
    pub mode: ScenarioMode,

    /// Scenario name used in `fixed` mode
    pub fixed: Option<String>,
}

impl ScenarioConfig {
    /// Scenario pinned by `fixed` mode, defaulting to the first one
    pub fn fixed_scenario(&self) -> SyntheticScenario {
        self.fixed
            .as_deref()
            .and_then(SyntheticScenario::parse)
            .unwrap_or(SyntheticScenario::Mild)
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("LG_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("weather.api_endpoint", DEFAULT_WEATHER_ENDPOINT)?
            .set_default("weather.timeout_secs", 5)?
            .set_default("weather.default_location", "Delhi")?
            .set_default("classifier.confidence_threshold", DEFAULT_CONFIDENCE_THRESHOLD)?
            .set_default("classifier.timeout_secs", 30)?
            .set_default("scenarios.mode", "random")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (LG_ prefix)
            .add_source(
                Environment::with_prefix("LG")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the services cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        shared::validate_confidence_threshold(self.classifier.confidence_threshold)
            .map_err(|e| ConfigError::Message(format!("classifier.confidence_threshold: {}", e)))?;
        shared::validate_location(&self.weather.default_location)
            .map_err(|e| ConfigError::Message(format!("weather.default_location: {}", e)))?;
        if self.weather.timeout_secs == 0 {
            return Err(ConfigError::Message(
                "weather.timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// OpenWeatherMap API base URL
pub const DEFAULT_WEATHER_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5";

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            weather: WeatherConfig::default(),
            classifier: ClassifierConfig::default(),
            scenarios: ScenarioConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_WEATHER_ENDPOINT.to_string(),
            api_key: None,
            timeout_secs: 5,
            default_location: "Delhi".to_string(),
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            api_endpoint: None,
            api_key: None,
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            timeout_secs: 30,
        }
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            mode: ScenarioMode::Random,
            fixed: None,
        }
    }
}
