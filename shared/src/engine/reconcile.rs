//! Assessment assembly and the classifier-driven override

use crate::engine::aggregator::aggregate;
use crate::engine::recommendations::{
    detailed_analysis, primary_threats, recommendations, weather_summary,
};
use crate::engine::rules::RuleSet;
use crate::engine::scorer::PestRiskScorer;
use crate::models::{Assessment, AssessmentOutcome, DiseaseLabel, PestScores, WeatherReading};

/// Runs scoring, aggregation and guidance for one reading
#[derive(Debug, Clone, Default)]
pub struct RiskEngine {
    scorer: PestRiskScorer,
}

impl RiskEngine {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            scorer: PestRiskScorer::new(rules),
        }
    }

    pub fn rules(&self) -> &RuleSet {
        self.scorer.rules()
    }

    pub fn scores(&self, reading: &WeatherReading) -> PestScores {
        self.scorer.score(reading)
    }

    /// Weather-derived assessment, before any classifier override
    pub fn assess(&self, reading: &WeatherReading) -> Assessment {
        let scores = self.scorer.score(reading);
        build_assessment(&scores, reading)
    }

    /// Full pipeline including the classifier override
    pub fn evaluate(
        &self,
        reading: &WeatherReading,
        classifier_label: Option<DiseaseLabel>,
    ) -> AssessmentOutcome {
        reconcile(self.assess(reading), classifier_label)
    }
}

/// Build an assessment from precomputed scores
pub fn build_assessment(scores: &PestScores, reading: &WeatherReading) -> Assessment {
    Assessment::new(
        aggregate(scores, reading),
        primary_threats(scores),
        recommendations(scores, reading),
        weather_summary(reading),
        detailed_analysis(scores, reading),
    )
}

/// Reconcile a weather assessment with the classifier outcome
///
/// An `Unknown` label discards the weather assessment entirely; nothing from
/// it survives into the result.
pub fn reconcile(
    assessment: Assessment,
    classifier_label: Option<DiseaseLabel>,
) -> AssessmentOutcome {
    match classifier_label {
        Some(label) if label.is_unknown() => AssessmentOutcome::Unrecognized,
        _ => AssessmentOutcome::Scored(assessment),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RiskLevel, UNRECOGNIZED_RECOMMENDATIONS};
    use crate::types::dec;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn reading(temp: i64, humidity: i64, rain: i64) -> WeatherReading {
        WeatherReading::new(
            Decimal::from(temp),
            Decimal::from(humidity),
            Decimal::from(rain),
            Utc::now(),
        )
    }

    #[test]
    fn test_known_labels_keep_weather_assessment() {
        let engine = RiskEngine::default();
        let r = reading(22, 55, 2);
        for label in [
            None,
            Some(DiseaseLabel::Blight),
            Some(DiseaseLabel::Healthy),
            Some(DiseaseLabel::Mosaic),
            Some(DiseaseLabel::Rust),
        ] {
            match engine.evaluate(&r, label) {
                AssessmentOutcome::Scored(a) => assert_eq!(a.verdict().level, RiskLevel::High),
                AssessmentOutcome::Unrecognized => panic!("unexpected override for {:?}", label),
            }
        }
    }

    #[test]
    fn test_unknown_label_replaces_everything() {
        let engine = RiskEngine::default();
        let outcome = engine.evaluate(&reading(34, 82, 18), Some(DiseaseLabel::Unknown));
        assert!(outcome.is_unrecognized());

        let assessment = outcome.into_assessment();
        assert_eq!(assessment.verdict().level, RiskLevel::Unknown);
        assert_eq!(assessment.verdict().confidence, Decimal::ZERO);
        assert!(assessment.detailed_analysis().is_empty());
        assert_eq!(
            assessment.recommendations().to_vec(),
            UNRECOGNIZED_RECOMMENDATIONS.map(String::from).to_vec()
        );
        assert!(!assessment.weather_summary().contains("34.0"));
    }

    #[test]
    fn test_hot_stormy_assessment() {
        let assessment = RiskEngine::default().assess(&reading(34, 82, 18));
        assert_eq!(assessment.verdict().level, RiskLevel::High);
        assert_eq!(assessment.verdict().confidence, dec(7, 1));
        assert_eq!(assessment.primary_threats()[0], "Fungal Diseases");
        assert_eq!(assessment.detailed_analysis().len(), 3);
    }
}
