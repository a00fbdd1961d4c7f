//! Per-category pest risk scoring

use crate::engine::rules::RuleSet;
use crate::models::{PestCategory, PestScores, WeatherReading};

/// Scores every pest category from a weather reading
///
/// Stateless; identical readings always yield identical scores.
#[derive(Debug, Clone, Default)]
pub struct PestRiskScorer {
    rules: RuleSet,
}

impl PestRiskScorer {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Score each category in [0, 1]; categories without a rule score zero
    pub fn score(&self, reading: &WeatherReading) -> PestScores {
        PestCategory::ALL
            .into_iter()
            .map(|category| {
                let raw = self
                    .rules
                    .rule(category)
                    .map(|rule| rule.evaluate(reading))
                    .unwrap_or_default();
                (category, raw)
            })
            .collect()
    }
}

/// Score a reading against the default rule table
pub fn score_reading(reading: &WeatherReading) -> PestScores {
    PestRiskScorer::default().score(reading)
}
