//! Business logic services for the LeafGuard server

pub mod assessment;
pub mod diagnosis;
pub mod weather;

pub use assessment::AssessmentService;
pub use diagnosis::{DiagnosisResponse, DiagnosisService, ImageUpload};
pub use weather::{
    scenario_source_from_config, CyclingScenarios, FixedScenario, RandomScenarios,
    ScenarioSource, WeatherProvider,
};
