//! Reduces per-category scores into one overall verdict

use rust_decimal::Decimal;

use crate::models::{PestScores, RiskLevel, RiskVerdict, WeatherReading};
use crate::types::dec;

/// Score at or above which the verdict is High
pub fn high_threshold() -> Decimal {
    dec(7, 1)
}

/// Score at or above which the verdict is Medium
pub fn medium_threshold() -> Decimal {
    dec(4, 1)
}

/// Bonus added to the max score under extreme weather
pub fn extreme_weather_bonus() -> Decimal {
    dec(2, 1)
}

/// Whether any factor is outside the range plants normally tolerate
pub fn is_extreme_weather(reading: &WeatherReading) -> bool {
    let temp = reading.temperature();
    let humidity = reading.humidity();

    let temp_extreme = temp > dec(35, 0) || temp < dec(5, 0);
    let humidity_extreme = humidity > dec(90, 0) || humidity < dec(20, 0);
    let rainfall_extreme = reading.rainfall() > dec(25, 0);

    temp_extreme || humidity_extreme || rainfall_extreme
}

/// Max category score, escalated once if the weather is extreme
pub fn effective_max_score(scores: &PestScores, reading: &WeatherReading) -> Decimal {
    let max_score = scores.max();
    if is_extreme_weather(reading) {
        (max_score + extreme_weather_bonus()).min(Decimal::ONE)
    } else {
        max_score
    }
}

/// Map an effective max score to a level and confidence
pub fn verdict_for_score(max_score: Decimal) -> RiskVerdict {
    if max_score >= high_threshold() {
        RiskVerdict::new(RiskLevel::High, max_score.min(dec(95, 2)))
    } else if max_score >= medium_threshold() {
        RiskVerdict::new(RiskLevel::Medium, max_score * dec(8, 1))
    } else {
        RiskVerdict::new(RiskLevel::Low, Decimal::ONE - max_score)
    }
}

/// Aggregate category scores and extreme-weather signals into a verdict
pub fn aggregate(scores: &PestScores, reading: &WeatherReading) -> RiskVerdict {
    verdict_for_score(effective_max_score(scores, reading))
}
