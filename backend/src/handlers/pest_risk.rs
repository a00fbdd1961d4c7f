//! HTTP handlers for pest risk assessment

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use shared::{AssessmentOutcome, DiseaseLabel, RuleSet};
use validator::Validate;

use crate::error::AppResult;
use crate::services::AssessmentService;
use crate::AppState;

/// Query parameters for a pest risk assessment
#[derive(Debug, Deserialize, Validate)]
pub struct PestRiskQuery {
    #[validate(length(min = 1, max = 100))]
    pub location: Option<String>,
    /// Classifier label from an earlier diagnosis
    pub disease: Option<String>,
}

/// Assess pest risk for a location
pub async fn get_pest_risk(
    State(state): State<AppState>,
    Query(query): Query<PestRiskQuery>,
) -> AppResult<Json<AssessmentOutcome>> {
    query.validate()?;

    let location = query
        .location
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or(&state.config.weather.default_location);
    let label = query.disease.as_deref().map(DiseaseLabel::parse);

    let service = AssessmentService::new(&state.config.weather, state.scenarios.clone());
    let outcome = service.assess(location, label).await;
    Ok(Json(outcome))
}

/// The active pest rule table
pub async fn get_rules(State(state): State<AppState>) -> Json<RuleSet> {
    let service = AssessmentService::new(&state.config.weather, state.scenarios.clone());
    Json(service.rules().clone())
}
