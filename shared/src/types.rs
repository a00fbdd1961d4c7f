//! Common types used across the platform

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Weather factor a rule or an analysis line refers to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WeatherFactor {
    Temperature,
    Humidity,
    Rainfall,
}

impl WeatherFactor {
    pub const ALL: [WeatherFactor; 3] = [
        WeatherFactor::Temperature,
        WeatherFactor::Humidity,
        WeatherFactor::Rainfall,
    ];

    pub fn unit(&self) -> &'static str {
        match self {
            WeatherFactor::Temperature => "°C",
            WeatherFactor::Humidity => "%",
            WeatherFactor::Rainfall => "mm",
        }
    }
}

impl std::fmt::Display for WeatherFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeatherFactor::Temperature => write!(f, "temperature"),
            WeatherFactor::Humidity => write!(f, "humidity"),
            WeatherFactor::Rainfall => write!(f, "rainfall"),
        }
    }
}

/// Build a decimal from an integer mantissa and scale, e.g. `dec(45, 1)` is 4.5
pub fn dec(num: i64, scale: u32) -> Decimal {
    Decimal::new(num, scale)
}

/// Clamp a score into the closed unit interval
pub fn clamp_unit(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO).min(Decimal::ONE)
}
