//! Threat ranking, advisories and weather narratives

use std::collections::{BTreeMap, HashSet};

use rust_decimal::Decimal;

use crate::models::{PestCategory, PestScores, WeatherReading};
use crate::types::{dec, WeatherFactor};

pub const MAX_PRIMARY_THREATS: usize = 3;
pub const MAX_RECOMMENDATIONS: usize = 6;

/// Minimum score for a category to count as a threat
pub fn threat_threshold() -> Decimal {
    dec(3, 1)
}

/// Score above which a category's advisories are included
pub fn advisory_threshold() -> Decimal {
    dec(6, 1)
}

/// Fixed advisory set for a pest category
pub fn category_advisories(category: PestCategory) -> [&'static str; 3] {
    match category {
        PestCategory::Aphids => [
            "🐛 Scout for aphid colonies on new growth",
            "🌿 Apply insecticidal soap or neem oil spray",
            "🐞 Release beneficial insects like ladybugs",
        ],
        PestCategory::FungalDiseases => [
            "💨 Improve air circulation between plants",
            "🌿 Apply preventive fungicide spray",
            "💧 Avoid overhead watering - use drip irrigation",
        ],
        PestCategory::SpiderMites => [
            "💦 Increase humidity around plants with misting",
            "🔍 Check undersides of leaves for fine webbing",
            "🌿 Apply miticide or predatory mite release",
        ],
        PestCategory::Thrips => [
            "💙 Use blue sticky traps to monitor populations",
            "🌿 Apply beneficial nematodes to soil",
            "💨 Remove weeds that harbor thrips",
        ],
        PestCategory::Whiteflies => [
            "💛 Install yellow sticky traps",
            "🌿 Apply horticultural oil spray",
            "🧹 Remove lower leaves touching soil",
        ],
    }
}

pub const HUMIDITY_ADVISORY: &str = "💨 Critical: Increase ventilation to reduce humidity";
pub const HEAT_ADVISORY: &str = "☀️ Provide shade cloth during peak heat hours";
pub const RAINFALL_ADVISORY: &str = "🌧️ Improve drainage and avoid additional watering";

/// Display names of the top threats, highest score first
///
/// Only categories scoring above the threat threshold are listed; ties keep
/// declaration order.
pub fn primary_threats(scores: &PestScores) -> Vec<String> {
    let mut ranked: Vec<(PestCategory, Decimal)> = scores
        .iter()
        .filter(|(_, score)| *score > threat_threshold())
        .collect();
    // sort_by is stable
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .take(MAX_PRIMARY_THREATS)
        .map(|(category, _)| category.display_name().to_string())
        .collect()
}

/// Actionable advisories, deduplicated in first-seen order
pub fn recommendations(scores: &PestScores, reading: &WeatherReading) -> Vec<String> {
    let mut candidates: Vec<&'static str> = scores
        .iter()
        .filter(|(_, score)| *score > advisory_threshold())
        .flat_map(|(category, _)| category_advisories(category))
        .collect();

    if reading.humidity() > dec(80, 0) {
        candidates.push(HUMIDITY_ADVISORY);
    }
    if reading.temperature() > dec(32, 0) {
        candidates.push(HEAT_ADVISORY);
    }
    if reading.rainfall() > dec(15, 0) {
        candidates.push(RAINFALL_ADVISORY);
    }

    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|advice| seen.insert(*advice))
        .take(MAX_RECOMMENDATIONS)
        .map(str::to_string)
        .collect()
}

/// One-line narrative of the current conditions
pub fn weather_summary(reading: &WeatherReading) -> String {
    let temp = reading.temperature();
    let humidity = reading.humidity();
    let rainfall = reading.rainfall();

    let temp_desc = if temp > dec(30, 0) {
        "hot"
    } else if temp > dec(20, 0) {
        "warm"
    } else {
        "cool"
    };

    let humidity_desc = if humidity > dec(80, 0) {
        "very humid"
    } else if humidity > dec(60, 0) {
        "humid"
    } else {
        "dry"
    };

    let rain_desc = if rainfall > dec(10, 0) {
        "with significant rainfall"
    } else if rainfall > dec(2, 0) {
        "with light rainfall"
    } else {
        "with no rainfall"
    };

    format!(
        "Current conditions: {} ({}°C), {} ({}%), {} ({}mm)",
        temp_desc,
        one_decimal(temp),
        humidity_desc,
        whole(humidity),
        rain_desc,
        one_decimal(rainfall)
    )
}

/// Explanation of what each weather factor means for pest pressure
///
/// The scores are accepted so the analysis can reference category pressure;
/// the current narratives depend on the reading alone.
pub fn detailed_analysis(
    _scores: &PestScores,
    reading: &WeatherReading,
) -> BTreeMap<WeatherFactor, String> {
    let mut analysis = BTreeMap::new();

    let temp = reading.temperature();
    let temp_text = if temp > dec(32, 0) {
        format!(
            "High temperature ({}°C) favors spider mites and heat stress",
            one_decimal(temp)
        )
    } else if temp < dec(15, 0) {
        format!(
            "Cool temperature ({}°C) slows pest development but may stress plants",
            one_decimal(temp)
        )
    } else {
        format!(
            "Moderate temperature ({}°C) suitable for most pest activity",
            one_decimal(temp)
        )
    };
    analysis.insert(WeatherFactor::Temperature, temp_text);

    let humidity = reading.humidity();
    let humidity_text = if humidity > dec(75, 0) {
        format!(
            "High humidity ({}%) creates ideal conditions for fungal diseases",
            whole(humidity)
        )
    } else if humidity < dec(40, 0) {
        format!("Low humidity ({}%) favors spider mites and thrips", whole(humidity))
    } else {
        format!("Moderate humidity ({}%) - balanced conditions", whole(humidity))
    };
    analysis.insert(WeatherFactor::Humidity, humidity_text);

    let rainfall = reading.rainfall();
    let rainfall_text = if rainfall > dec(15, 0) {
        format!(
            "Heavy rainfall ({}mm) increases fungal disease pressure",
            one_decimal(rainfall)
        )
    } else if rainfall < dec(2, 0) {
        format!(
            "Dry conditions ({}mm) favor drought-stress pests",
            one_decimal(rainfall)
        )
    } else {
        format!(
            "Moderate moisture ({}mm) - good for plant health",
            one_decimal(rainfall)
        )
    };
    analysis.insert(WeatherFactor::Rainfall, rainfall_text);

    analysis
}

fn one_decimal(value: Decimal) -> String {
    format!("{:.1}", value.round_dp(1))
}

fn whole(value: Decimal) -> String {
    format!("{:.0}", value.round_dp(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn reading(temp: Decimal, humidity: Decimal, rain: Decimal) -> WeatherReading {
        WeatherReading::new(temp, humidity, rain, Utc::now())
    }

    fn scores(values: &[(PestCategory, Decimal)]) -> PestScores {
        values.iter().copied().collect()
    }

    #[test]
    fn test_threats_sorted_and_filtered() {
        let s = scores(&[
            (PestCategory::Aphids, dec(3, 1)),
            (PestCategory::FungalDiseases, dec(7, 1)),
            (PestCategory::SpiderMites, dec(4, 1)),
            (PestCategory::Whiteflies, dec(9, 1)),
        ]);
        assert_eq!(
            primary_threats(&s),
            vec!["Whitefly Infestation", "Fungal Diseases", "Spider Mite Damage"]
        );
    }

    #[test]
    fn test_threat_ties_keep_declaration_order() {
        let s = scores(&[
            (PestCategory::Whiteflies, dec(7, 1)),
            (PestCategory::FungalDiseases, dec(7, 1)),
            (PestCategory::Aphids, dec(7, 1)),
            (PestCategory::Thrips, dec(7, 1)),
        ]);
        assert_eq!(
            primary_threats(&s),
            vec!["Aphid Infestation", "Fungal Diseases", "Thrips Damage"]
        );
    }

    #[test]
    fn test_no_threats_when_all_low() {
        let s = scores(&[(PestCategory::Aphids, dec(3, 1))]);
        assert!(primary_threats(&s).is_empty());
    }

    #[test]
    fn test_recommendations_for_high_category() {
        let s = scores(&[(PestCategory::Thrips, dec(7, 1))]);
        let recs = recommendations(&s, &reading(dec(22, 0), dec(50, 0), dec(1, 0)));
        assert_eq!(recs, category_advisories(PestCategory::Thrips).to_vec());
    }

    #[test]
    fn test_advisory_threshold_is_strict() {
        let s = scores(&[(PestCategory::Thrips, dec(6, 1))]);
        let recs = recommendations(&s, &reading(dec(22, 0), dec(50, 0), dec(1, 0)));
        assert!(recs.is_empty());
    }

    #[test]
    fn test_weather_advisories_appended() {
        let s = PestScores::new();
        let recs = recommendations(&s, &reading(dec(34, 0), dec(85, 0), dec(20, 0)));
        assert_eq!(recs, vec![HUMIDITY_ADVISORY, HEAT_ADVISORY, RAINFALL_ADVISORY]);
    }

    #[test]
    fn test_recommendations_truncated_to_six() {
        let s = scores(&[
            (PestCategory::Aphids, Decimal::ONE),
            (PestCategory::FungalDiseases, Decimal::ONE),
            (PestCategory::Thrips, Decimal::ONE),
        ]);
        let recs = recommendations(&s, &reading(dec(34, 0), dec(85, 0), dec(20, 0)));
        assert_eq!(recs.len(), MAX_RECOMMENDATIONS);
        assert_eq!(recs[0], category_advisories(PestCategory::Aphids)[0]);
        assert_eq!(recs[3], category_advisories(PestCategory::FungalDiseases)[0]);
    }

    #[test]
    fn test_weather_summary_bands() {
        let hot = weather_summary(&reading(dec(34, 0), dec(82, 0), dec(18, 0)));
        assert_eq!(
            hot,
            "Current conditions: hot (34.0°C), very humid (82%), with significant rainfall (18.0mm)"
        );

        let warm = weather_summary(&reading(dec(28, 0), dec(68, 0), dec(8, 0)));
        assert_eq!(
            warm,
            "Current conditions: warm (28.0°C), humid (68%), with light rainfall (8.0mm)"
        );

        let cool = weather_summary(&reading(dec(18, 0), dec(45, 0), Decimal::ZERO));
        assert_eq!(
            cool,
            "Current conditions: cool (18.0°C), dry (45%), with no rainfall (0.0mm)"
        );
    }

    #[test]
    fn test_detailed_analysis_bands() {
        let s = PestScores::new();

        let hot = detailed_analysis(&s, &reading(dec(34, 0), dec(82, 0), dec(18, 0)));
        assert_eq!(hot.len(), 3);
        assert!(hot[&WeatherFactor::Temperature].starts_with("High temperature (34.0°C)"));
        assert!(hot[&WeatherFactor::Humidity].starts_with("High humidity (82%)"));
        assert!(hot[&WeatherFactor::Rainfall].starts_with("Heavy rainfall (18.0mm)"));

        let cold = detailed_analysis(&s, &reading(dec(10, 0), dec(30, 0), dec(1, 0)));
        assert!(cold[&WeatherFactor::Temperature].starts_with("Cool temperature"));
        assert!(cold[&WeatherFactor::Humidity].starts_with("Low humidity (30%)"));
        assert!(cold[&WeatherFactor::Rainfall].starts_with("Dry conditions (1.0mm)"));

        let mild = detailed_analysis(&s, &reading(dec(22, 0), dec(55, 0), dec(5, 0)));
        assert!(mild[&WeatherFactor::Temperature].starts_with("Moderate temperature"));
        assert!(mild[&WeatherFactor::Humidity].starts_with("Moderate humidity (55%)"));
        assert!(mild[&WeatherFactor::Rainfall].starts_with("Moderate moisture (5.0mm)"));
    }
}
