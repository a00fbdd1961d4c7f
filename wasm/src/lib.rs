//! WebAssembly module for LeafGuard
//!
//! Runs the pest risk engine in the browser on weather values the grower
//! enters by hand, so assessments keep working offline.

use chrono::{DateTime, Utc};
use wasm_bindgen::prelude::*;

pub use shared::models::*;
pub use shared::types::*;

use shared::{clamp_unit, decimal_from_f64, verdict_for_score, RiskEngine};

/// Assess pest risk for manually entered conditions; returns Assessment JSON
#[wasm_bindgen]
pub fn assess_conditions(temperature: f64, humidity: f64, rainfall: f64) -> String {
    let reading = reading_from_input(temperature, humidity, rainfall, now());
    to_json(&RiskEngine::default().assess(&reading))
}

/// Risk level name for an aggregate score in [0, 1]
#[wasm_bindgen]
pub fn risk_level_for_score(score: f64) -> String {
    let score = clamp_unit(decimal_from_f64(score));
    verdict_for_score(score).level.to_string()
}

/// Per-category scores for the given conditions as a JSON map
#[wasm_bindgen]
pub fn pest_scores(temperature: f64, humidity: f64, rainfall: f64) -> String {
    let reading = reading_from_input(temperature, humidity, rainfall, now());
    to_json(&RiskEngine::default().scores(&reading))
}

fn reading_from_input(
    temperature: f64,
    humidity: f64,
    rainfall: f64,
    observed_at: DateTime<Utc>,
) -> WeatherReading {
    if !(0.0..=100.0).contains(&humidity) || rainfall < 0.0 || !temperature.is_finite() {
        warn(&format!(
            "Out of range input clamped: temperature={}, humidity={}, rainfall={}",
            temperature, humidity, rainfall
        ));
    }
    WeatherReading::from_f64(temperature, humidity, rainfall, observed_at)
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(target_arch = "wasm32")]
fn now() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn now() -> DateTime<Utc> {
    Utc::now()
}

#[cfg(target_arch = "wasm32")]
fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}

#[cfg(not(target_arch = "wasm32"))]
fn warn(_message: &str) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_for_score() {
        assert_eq!(risk_level_for_score(0.85), "High");
        assert_eq!(risk_level_for_score(0.7), "High");
        assert_eq!(risk_level_for_score(0.5), "Medium");
        assert_eq!(risk_level_for_score(0.4), "Medium");
        assert_eq!(risk_level_for_score(0.1), "Low");
        assert_eq!(risk_level_for_score(f64::NAN), "Low");
        assert_eq!(risk_level_for_score(3.0), "High");
        assert_eq!(risk_level_for_score(1e40), "High");
        assert_eq!(risk_level_for_score(f64::INFINITY), "High");
        assert_eq!(risk_level_for_score(f64::NEG_INFINITY), "Low");
    }

    #[test]
    fn test_assess_conditions_json() {
        let json: serde_json::Value =
            serde_json::from_str(&assess_conditions(34.0, 82.0, 18.0)).unwrap();
        assert_eq!(json["risk_level"], "High");
        assert_eq!(json["risk_color"], "red");
        assert_eq!(json["primary_threats"][0], "Fungal Diseases");
    }

    #[test]
    fn test_pest_scores_json() {
        let json: serde_json::Value =
            serde_json::from_str(&pest_scores(22.0, 55.0, 2.0)).unwrap();
        let map = json.as_object().unwrap();
        assert_eq!(map.len(), 5);
        assert_eq!(json["aphids"], 1.0);
    }

    #[test]
    fn test_out_of_range_input_clamped() {
        let reading = reading_from_input(20.0, 150.0, -4.0, Utc::now());
        assert_eq!(reading.humidity(), rust_decimal::Decimal::from(100));
        assert_eq!(reading.rainfall(), rust_decimal::Decimal::ZERO);
    }
}
