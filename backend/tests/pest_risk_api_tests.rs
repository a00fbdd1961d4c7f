//! Pest risk API integration tests
//!
//! Drives the full router with synthetic weather pinned to one scenario, so
//! no test touches the network.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use leafguard_backend::config::{ScenarioConfig, ScenarioMode};
use leafguard_backend::{create_app, AppState, Config};
use proptest::prelude::*;
use serde_json::Value;
use tower::ServiceExt;

fn app_with_scenario(name: &str) -> Router {
    let config = Config {
        scenarios: ScenarioConfig {
            mode: ScenarioMode::Fixed,
            fixed: Some(name.to_string()),
        },
        ..Config::default()
    };
    create_app(AppState::new(config))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

fn multipart_body(boundary: &str, filename: &str, size: usize) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"location\"\r\n\r\nPune\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend(std::iter::repeat(0xAB).take(size));
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    body
}

async fn post_upload(app: Router, filename: &str, size: usize) -> (StatusCode, Value) {
    let boundary = "leafguard-test-boundary";
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/diagnose")
                .header(
                    "content-type",
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(Body::from(multipart_body(boundary, filename, size)))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json(app_with_scenario("mild"), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert!(body["version"].is_string());
    }

    /// Hot stormy conditions: fungal risk leads, shade advice present
    #[tokio::test]
    async fn test_pest_risk_flat_json() {
        let (status, body) =
            get_json(app_with_scenario("hot_stormy"), "/api/v1/pest-risk?location=Delhi").await;
        assert_eq!(status, StatusCode::OK);

        let object = body.as_object().unwrap();
        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "confidence",
                "detailed_analysis",
                "primary_threats",
                "recommendations",
                "risk_color",
                "risk_emoji",
                "risk_level",
                "weather_summary",
            ]
        );

        assert_eq!(body["risk_level"], "High");
        assert_eq!(body["risk_color"], "red");
        assert_eq!(body["primary_threats"][0], "Fungal Diseases");
        assert!(body["recommendations"].as_array().unwrap().len() <= 6);
        assert!(body["detailed_analysis"]["temperature"].is_string());
    }

    #[tokio::test]
    async fn test_pest_risk_default_location() {
        let (status, body) = get_json(app_with_scenario("mild"), "/api/v1/pest-risk").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["risk_level"], "High");
    }

    #[tokio::test]
    async fn test_unknown_disease_overrides_weather() {
        let (status, body) = get_json(
            app_with_scenario("hot_stormy"),
            "/api/v1/pest-risk?location=Delhi&disease=Unknown",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["risk_level"], "Unknown");
        assert_eq!(body["risk_color"], "black");
        assert_eq!(body["confidence"], 0.0);
        assert_eq!(
            body["primary_threats"],
            serde_json::json!(["Not detected (image unknown)"])
        );
        assert_eq!(body["recommendations"].as_array().unwrap().len(), 4);
        assert_eq!(body["detailed_analysis"], serde_json::json!({}));
    }

    #[tokio::test]
    async fn test_known_disease_keeps_weather() {
        let (_, body) = get_json(
            app_with_scenario("cool_wet"),
            "/api/v1/pest-risk?location=Delhi&disease=rust",
        )
        .await;
        assert_eq!(body["risk_level"], "High");
    }

    #[tokio::test]
    async fn test_empty_location_rejected() {
        let (status, body) =
            get_json(app_with_scenario("mild"), "/api/v1/pest-risk?location=").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["field"], "location");
    }

    #[tokio::test]
    async fn test_rules_endpoint() {
        let (status, body) = get_json(app_with_scenario("mild"), "/api/v1/pest-risk/rules").await;
        assert_eq!(status, StatusCode::OK);

        let rules = body["rules"].as_array().unwrap();
        assert_eq!(rules.len(), 5);
        assert_eq!(rules[0]["category"], "aphids");
        assert_eq!(rules[0]["conditions"][0]["bound"]["kind"], "between");
    }

    #[tokio::test]
    async fn test_advice_with_low_confidence() {
        let (status, body) =
            get_json(app_with_scenario("mild"), "/api/v1/advice/blight?confidence=0.45").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["label"], "Blight");
        assert!(body["confidence_note"]
            .as_str()
            .unwrap()
            .contains("45.0%"));
    }

    #[tokio::test]
    async fn test_advice_rejects_bad_confidence() {
        let (status, _) =
            get_json(app_with_scenario("mild"), "/api/v1/advice/rust?confidence=1.5").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_diagnose_rejects_unsupported_file() {
        let (status, body) = post_upload(app_with_scenario("mild"), "leaf.gif", 4096).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_UPLOAD");
    }

    #[tokio::test]
    async fn test_diagnose_without_classifier() {
        let (status, body) = post_upload(app_with_scenario("mild"), "leaf.jpg", 4096).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["code"], "CLASSIFIER_UNAVAILABLE");
    }
}

// ============================================================================
// Property Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;
    use leafguard_backend::services::scenario_source_from_config;
    use shared::SyntheticScenario;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        /// A fixed scenario source always returns the named scenario
        #[test]
        fn prop_fixed_scenario_is_stable(index in 0usize..5, calls in 1usize..20) {
            let scenario = SyntheticScenario::ALL[index];
            let source = scenario_source_from_config(&ScenarioConfig {
                mode: ScenarioMode::Fixed,
                fixed: Some(scenario.name().to_string()),
            });
            for _ in 0..calls {
                prop_assert_eq!(source.next_scenario(), scenario);
            }
        }

        /// Cycling visits every scenario once per lap
        #[test]
        fn prop_cycle_covers_all(laps in 1usize..4) {
            let source = scenario_source_from_config(&ScenarioConfig {
                mode: ScenarioMode::Cycle,
                fixed: None,
            });
            let mut counts = [0usize; 5];
            for _ in 0..laps * 5 {
                let picked = source.next_scenario();
                let index = SyntheticScenario::ALL.iter().position(|s| *s == picked).unwrap();
                counts[index] += 1;
            }
            prop_assert!(counts.iter().all(|c| *c == laps));
        }
    }
}
