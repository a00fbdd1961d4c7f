//! Environmental threshold rules per pest category
//!
//! Each category has a short list of independent conditions; every satisfied
//! condition contributes its weight to the category score.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{PestCategory, WeatherReading};
use crate::types::{dec, WeatherFactor};

/// Range test applied to a single weather factor
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Bound {
    /// Inclusive on both ends
    Between {
        #[serde(with = "rust_decimal::serde::float")]
        min: Decimal,
        #[serde(with = "rust_decimal::serde::float")]
        max: Decimal,
    },
    /// Strictly greater than
    Above {
        #[serde(with = "rust_decimal::serde::float")]
        value: Decimal,
    },
    /// Strictly less than
    Below {
        #[serde(with = "rust_decimal::serde::float")]
        value: Decimal,
    },
}

impl Bound {
    pub fn contains(&self, value: Decimal) -> bool {
        match *self {
            Bound::Between { min, max } => value >= min && value <= max,
            Bound::Above { value: limit } => value > limit,
            Bound::Below { value: limit } => value < limit,
        }
    }
}

/// One weighted condition of a pest rule
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Condition {
    pub factor: WeatherFactor,
    pub bound: Bound,
    #[serde(with = "rust_decimal::serde::float")]
    pub weight: Decimal,
}

impl Condition {
    pub fn between(factor: WeatherFactor, min: Decimal, max: Decimal, weight: Decimal) -> Self {
        Self {
            factor,
            bound: Bound::Between { min, max },
            weight,
        }
    }

    pub fn above(factor: WeatherFactor, value: Decimal, weight: Decimal) -> Self {
        Self {
            factor,
            bound: Bound::Above { value },
            weight,
        }
    }

    pub fn below(factor: WeatherFactor, value: Decimal, weight: Decimal) -> Self {
        Self {
            factor,
            bound: Bound::Below { value },
            weight,
        }
    }

    pub fn is_met(&self, reading: &WeatherReading) -> bool {
        self.bound.contains(reading.factor(self.factor))
    }
}

/// Ordered conditions for a single pest category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PestRule {
    pub category: PestCategory,
    pub conditions: Vec<Condition>,
}

impl PestRule {
    /// Sum of the weights of every condition the reading satisfies
    pub fn evaluate(&self, reading: &WeatherReading) -> Decimal {
        self.conditions
            .iter()
            .filter(|c| c.is_met(reading))
            .map(|c| c.weight)
            .sum()
    }

    pub fn weight_total(&self) -> Decimal {
        self.conditions.iter().map(|c| c.weight).sum()
    }
}

/// The full rule table, one rule per category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuleSet {
    pub rules: Vec<PestRule>,
}

impl RuleSet {
    pub fn rule(&self, category: PestCategory) -> Option<&PestRule> {
        self.rules.iter().find(|r| r.category == category)
    }

    /// Total weight available to each category
    pub fn weight_totals(&self) -> Vec<(PestCategory, Decimal)> {
        PestCategory::ALL
            .into_iter()
            .map(|c| {
                let total = self.rule(c).map(PestRule::weight_total).unwrap_or_default();
                (c, total)
            })
            .collect()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        use WeatherFactor::{Humidity, Rainfall, Temperature};

        Self {
            rules: vec![
                // Moderate temperatures, humid air, little rain
                PestRule {
                    category: PestCategory::Aphids,
                    conditions: vec![
                        Condition::between(Temperature, dec(15, 0), dec(25, 0), dec(4, 1)),
                        Condition::above(Humidity, dec(50, 0), dec(3, 1)),
                        Condition::below(Rainfall, dec(10, 0), dec(3, 1)),
                    ],
                },
                // Warm, very humid, wet
                PestRule {
                    category: PestCategory::FungalDiseases,
                    conditions: vec![
                        Condition::between(Temperature, dec(20, 0), dec(30, 0), dec(3, 1)),
                        Condition::above(Humidity, dec(70, 0), dec(4, 1)),
                        Condition::above(Rainfall, dec(5, 0), dec(3, 1)),
                    ],
                },
                // Hot and dry
                PestRule {
                    category: PestCategory::SpiderMites,
                    conditions: vec![
                        Condition::above(Temperature, dec(27, 0), dec(4, 1)),
                        Condition::below(Humidity, dec(40, 0), dec(3, 1)),
                        Condition::below(Rainfall, dec(2, 0), dec(3, 1)),
                    ],
                },
                PestRule {
                    category: PestCategory::Thrips,
                    conditions: vec![
                        Condition::between(Temperature, dec(20, 0), dec(30, 0), dec(3, 1)),
                        Condition::between(Humidity, dec(40, 0), dec(70, 0), dec(3, 1)),
                        Condition::below(Rainfall, dec(8, 0), dec(4, 1)),
                    ],
                },
                // Warm and humid
                PestRule {
                    category: PestCategory::Whiteflies,
                    conditions: vec![
                        Condition::between(Temperature, dec(25, 0), dec(32, 0), dec(4, 1)),
                        Condition::above(Humidity, dec(60, 0), dec(3, 1)),
                        Condition::below(Rainfall, dec(12, 0), dec(3, 1)),
                    ],
                },
            ],
        }
    }
}
