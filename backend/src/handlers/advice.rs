//! HTTP handlers for disease advice

use axum::{
    extract::{Path, Query},
    Json,
};
use serde::Deserialize;
use shared::{DiseaseAdvice, DiseaseLabel};
use validator::Validate;

use crate::error::AppResult;

/// Query parameters for advice lookup
#[derive(Debug, Deserialize, Validate)]
pub struct AdviceQuery {
    #[validate(range(min = 0.0, max = 1.0))]
    pub confidence: Option<f64>,
}

/// Treatment advice for a classifier label
pub async fn get_advice(
    Path(disease): Path<String>,
    Query(query): Query<AdviceQuery>,
) -> AppResult<Json<DiseaseAdvice>> {
    query.validate()?;
    let label = DiseaseLabel::parse(&disease);
    Ok(Json(shared::advice::lookup(label, query.confidence)))
}
