//! Weather data models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::WeatherFactor;
use crate::validation::{clamp_humidity, clamp_rainfall, decimal_from_f64};

/// A normalized weather reading for one assessment cycle
///
/// Humidity is always within [0, 100] and rainfall is never negative; the
/// constructors clamp rather than reject since upstream sources are not
/// fully trusted.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeatherReading {
    #[serde(with = "rust_decimal::serde::float")]
    temperature_celsius: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    humidity_percent: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    rainfall_mm: Decimal,
    observed_at: DateTime<Utc>,
}

impl WeatherReading {
    pub fn new(
        temperature_celsius: Decimal,
        humidity_percent: Decimal,
        rainfall_mm: Decimal,
        observed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            temperature_celsius,
            humidity_percent: clamp_humidity(humidity_percent),
            rainfall_mm: clamp_rainfall(rainfall_mm),
            observed_at,
        }
    }

    /// Build a reading from raw floats; NaN becomes zero, overflow saturates
    pub fn from_f64(
        temperature_celsius: f64,
        humidity_percent: f64,
        rainfall_mm: f64,
        observed_at: DateTime<Utc>,
    ) -> Self {
        Self::new(
            decimal_from_f64(temperature_celsius),
            decimal_from_f64(humidity_percent),
            decimal_from_f64(rainfall_mm),
            observed_at,
        )
    }

    pub fn temperature(&self) -> Decimal {
        self.temperature_celsius
    }

    pub fn humidity(&self) -> Decimal {
        self.humidity_percent
    }

    pub fn rainfall(&self) -> Decimal {
        self.rainfall_mm
    }

    pub fn observed_at(&self) -> DateTime<Utc> {
        self.observed_at
    }

    /// Value of a single factor, used by the rule table
    pub fn factor(&self, factor: WeatherFactor) -> Decimal {
        match factor {
            WeatherFactor::Temperature => self.temperature_celsius,
            WeatherFactor::Humidity => self.humidity_percent,
            WeatherFactor::Rainfall => self.rainfall_mm,
        }
    }
}

/// Where a reading came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeatherSource {
    Live,
    Synthetic,
}

/// Canned weather profiles used when live data is unavailable
///
/// Together they cover the low, medium and high risk bands plus a hot-dry
/// and a cool-wet edge profile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SyntheticScenario {
    /// 22°C, 55%, 2mm
    Mild,
    /// 28°C, 68%, 8mm
    WarmHumid,
    /// 34°C, 82%, 18mm
    HotStormy,
    /// 26°C, 45%, 0mm
    HotDry,
    /// 18°C, 85%, 15mm
    CoolWet,
}

impl SyntheticScenario {
    pub const ALL: [SyntheticScenario; 5] = [
        SyntheticScenario::Mild,
        SyntheticScenario::WarmHumid,
        SyntheticScenario::HotStormy,
        SyntheticScenario::HotDry,
        SyntheticScenario::CoolWet,
    ];

    /// Temperature (tenths of °C), humidity (%), rainfall (tenths of mm)
    fn profile(&self) -> (i64, i64, i64) {
        match self {
            SyntheticScenario::Mild => (220, 55, 20),
            SyntheticScenario::WarmHumid => (280, 68, 80),
            SyntheticScenario::HotStormy => (340, 82, 180),
            SyntheticScenario::HotDry => (260, 45, 0),
            SyntheticScenario::CoolWet => (180, 85, 150),
        }
    }

    pub fn reading(&self, observed_at: DateTime<Utc>) -> WeatherReading {
        let (temp, humidity, rain) = self.profile();
        WeatherReading::new(
            Decimal::new(temp, 1),
            Decimal::from(humidity),
            Decimal::new(rain, 1),
            observed_at,
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            SyntheticScenario::Mild => "mild",
            SyntheticScenario::WarmHumid => "warm_humid",
            SyntheticScenario::HotStormy => "hot_stormy",
            SyntheticScenario::HotDry => "hot_dry",
            SyntheticScenario::CoolWet => "cool_wet",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_clamps_humidity_and_rainfall() {
        let reading = WeatherReading::new(
            Decimal::from(20),
            Decimal::from(140),
            Decimal::from(-3),
            Utc::now(),
        );
        assert_eq!(reading.humidity(), Decimal::from(100));
        assert_eq!(reading.rainfall(), Decimal::ZERO);
        assert_eq!(reading.temperature(), Decimal::from(20));
    }

    #[test]
    fn test_from_f64_handles_non_finite() {
        let reading = WeatherReading::from_f64(f64::NAN, f64::INFINITY, -1.0, Utc::now());
        assert_eq!(reading.temperature(), Decimal::ZERO);
        assert_eq!(reading.humidity(), Decimal::ONE_HUNDRED);
        assert_eq!(reading.rainfall(), Decimal::ZERO);

        let reading = WeatherReading::from_f64(25.0, f64::NEG_INFINITY, f64::NEG_INFINITY, Utc::now());
        assert_eq!(reading.humidity(), Decimal::ZERO);
        assert_eq!(reading.rainfall(), Decimal::ZERO);
    }

    #[test]
    fn test_from_f64_saturates_huge_values() {
        let reading = WeatherReading::from_f64(25.0, 1e29, 1e29, Utc::now());
        assert_eq!(reading.humidity(), Decimal::ONE_HUNDRED);
        assert!(reading.rainfall() > Decimal::from(25));
    }

    #[test]
    fn test_scenario_profiles() {
        let now = Utc::now();
        let cool_wet = SyntheticScenario::CoolWet.reading(now);
        assert_eq!(cool_wet.temperature(), Decimal::from(18));
        assert_eq!(cool_wet.humidity(), Decimal::from(85));
        assert_eq!(cool_wet.rainfall(), Decimal::from(15));

        let hot_dry = SyntheticScenario::HotDry.reading(now);
        assert_eq!(hot_dry.rainfall(), Decimal::ZERO);
    }

    #[test]
    fn test_scenario_parse() {
        assert_eq!(SyntheticScenario::parse("hot_dry"), Some(SyntheticScenario::HotDry));
        assert_eq!(SyntheticScenario::parse(" COOL_WET "), Some(SyntheticScenario::CoolWet));
        assert_eq!(SyntheticScenario::parse("blizzard"), None);
    }
}
