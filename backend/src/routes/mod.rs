//! Route definitions for the LeafGuard API

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/pest-risk", get(handlers::get_pest_risk))
        .route("/pest-risk/rules", get(handlers::get_rules))
        .route("/advice/:disease", get(handlers::get_advice))
        .route("/diagnose", post(handlers::diagnose))
}
