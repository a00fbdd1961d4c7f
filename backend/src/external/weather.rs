//! Weather API client for fetching current conditions
//!
//! Integrates with the OpenWeatherMap current weather endpoint, queried by
//! city name in metric units.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use shared::WeatherReading;

use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
    timeout: Duration,
}

/// OpenWeatherMap API response for current weather
#[derive(Debug, Deserialize)]
struct OWMCurrentResponse {
    main: OWMMain,
    rain: Option<OWMRain>,
    dt: Option<i64>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OWMMain {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OWMRain {
    #[serde(rename = "1h")]
    one_hour: Option<f64>,
}

impl WeatherClient {
    /// Create a new WeatherClient against `base_url`
    pub fn with_base_url(api_key: String, base_url: String, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// Fetch current weather conditions for a named location
    pub async fn get_current_weather(&self, location: &str) -> AppResult<WeatherReading> {
        let url = format!("{}/weather", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", location),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| AppError::Internal(format!("Weather API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Internal(format!(
                "Weather API error: {} - {}",
                status, body
            )));
        }

        let data: OWMCurrentResponse = response
            .json()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to parse weather response: {}", e)))?;

        tracing::debug!(
            location = %location,
            station = data.name.as_deref().unwrap_or("unknown"),
            "Fetched live weather"
        );

        Ok(convert_current_response(data))
    }
}

/// Convert OpenWeatherMap current response to a reading
fn convert_current_response(data: OWMCurrentResponse) -> WeatherReading {
    let observed_at = data
        .dt
        .and_then(|dt| DateTime::from_timestamp(dt, 0))
        .unwrap_or_else(Utc::now);
    let rainfall = data.rain.and_then(|r| r.one_hour).unwrap_or(0.0);

    WeatherReading::from_f64(data.main.temp, data.main.humidity, rainfall, observed_at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_convert_with_rain() {
        let json = r#"{
            "coord": {"lon": 77.22, "lat": 28.67},
            "main": {"temp": 31.5, "feels_like": 35.0, "pressure": 1002, "humidity": 74},
            "rain": {"1h": 3.2},
            "dt": 1720000000,
            "name": "Delhi"
        }"#;
        let data: OWMCurrentResponse = serde_json::from_str(json).unwrap();
        let reading = convert_current_response(data);

        assert_eq!(reading.temperature(), Decimal::new(315, 1));
        assert_eq!(reading.humidity(), Decimal::from(74));
        assert_eq!(reading.rainfall(), Decimal::new(32, 1));
        assert_eq!(reading.observed_at().timestamp(), 1720000000);
    }

    #[test]
    fn test_convert_without_rain() {
        let json = r#"{"main": {"temp": 22.0, "humidity": 55}}"#;
        let data: OWMCurrentResponse = serde_json::from_str(json).unwrap();
        let reading = convert_current_response(data);
        assert_eq!(reading.rainfall(), Decimal::ZERO);
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = WeatherClient::with_base_url(
            "key".to_string(),
            "http://localhost:8080/".to_string(),
            Duration::from_secs(1),
        );
        assert_eq!(client.base_url, "http://localhost:8080");
    }
}
