//! Pest risk assessment models

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use crate::models::RiskVerdict;
use crate::types::WeatherFactor;

/// Threat list shown when the image was not recognized
pub const UNRECOGNIZED_THREAT: &str = "Not detected (image unknown)";

/// Weather summary placeholder shown when the image was not recognized
pub const UNRECOGNIZED_SUMMARY: &str = "No valid assessment (image unrecognized)";

/// Guidance shown when the image was not recognized
pub const UNRECOGNIZED_RECOMMENDATIONS: [&str; 4] = [
    "❓ Unable to provide pest risk due to unclear image.",
    "📸 Retake a clearer photo under good lighting.",
    "🌱 Monitor your plant and try again.",
    "🔎 If symptoms persist, consult a plant expert.",
];

/// Farmer-facing result of one assessment request
///
/// Serializes as one flat JSON object; only `detailed_analysis` nests.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    #[serde(flatten)]
    verdict: RiskVerdict,
    primary_threats: Vec<String>,
    recommendations: Vec<String>,
    weather_summary: String,
    detailed_analysis: BTreeMap<WeatherFactor, String>,
}

impl Assessment {
    pub fn new(
        verdict: RiskVerdict,
        primary_threats: Vec<String>,
        recommendations: Vec<String>,
        weather_summary: String,
        detailed_analysis: BTreeMap<WeatherFactor, String>,
    ) -> Self {
        Self {
            verdict,
            primary_threats,
            recommendations,
            weather_summary,
            detailed_analysis,
        }
    }

    /// The fixed assessment that replaces everything weather-derived
    pub fn unrecognized() -> Self {
        Self {
            verdict: RiskVerdict::unknown(),
            primary_threats: vec![UNRECOGNIZED_THREAT.to_string()],
            recommendations: UNRECOGNIZED_RECOMMENDATIONS
                .iter()
                .map(|r| r.to_string())
                .collect(),
            weather_summary: UNRECOGNIZED_SUMMARY.to_string(),
            detailed_analysis: BTreeMap::new(),
        }
    }

    pub fn verdict(&self) -> &RiskVerdict {
        &self.verdict
    }

    pub fn primary_threats(&self) -> &[String] {
        &self.primary_threats
    }

    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }

    pub fn weather_summary(&self) -> &str {
        &self.weather_summary
    }

    pub fn detailed_analysis(&self) -> &BTreeMap<WeatherFactor, String> {
        &self.detailed_analysis
    }
}

/// Terminal state of an assessment request
///
/// `Unrecognized` is a total replacement of the weather-derived result and
/// carries no weather data at all.
#[derive(Debug, Clone, PartialEq)]
pub enum AssessmentOutcome {
    Scored(Assessment),
    Unrecognized,
}

impl AssessmentOutcome {
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, AssessmentOutcome::Unrecognized)
    }

    /// Render the outcome as the assessment shown to the farmer
    pub fn into_assessment(self) -> Assessment {
        match self {
            AssessmentOutcome::Scored(assessment) => assessment,
            AssessmentOutcome::Unrecognized => Assessment::unrecognized(),
        }
    }
}

impl Serialize for AssessmentOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AssessmentOutcome::Scored(assessment) => assessment.serialize(serializer),
            AssessmentOutcome::Unrecognized => Assessment::unrecognized().serialize(serializer),
        }
    }
}
