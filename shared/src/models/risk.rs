//! Overall risk verdict models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Top-line risk verdict
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Unknown,
}

impl RiskLevel {
    /// Display color for the level
    pub fn color_code(&self) -> &'static str {
        match self {
            RiskLevel::Low => "green",
            RiskLevel::Medium => "yellow",
            RiskLevel::High => "red",
            RiskLevel::Unknown => "black",
        }
    }

    /// Display glyph for the level
    pub fn indicator(&self) -> &'static str {
        match self {
            RiskLevel::Low => "🟢",
            RiskLevel::Medium => "🟡",
            RiskLevel::High => "🔴",
            RiskLevel::Unknown => "⚫",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
            RiskLevel::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Aggregated verdict over all pest categories
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskVerdict {
    #[serde(rename = "risk_level")]
    pub level: RiskLevel,
    #[serde(rename = "risk_color")]
    pub color_code: &'static str,
    #[serde(rename = "risk_emoji")]
    pub indicator: &'static str,
    #[serde(with = "rust_decimal::serde::float")]
    pub confidence: Decimal,
}

impl RiskVerdict {
    /// Verdict carrying the fixed color and indicator for `level`
    pub fn new(level: RiskLevel, confidence: Decimal) -> Self {
        Self {
            level,
            color_code: level.color_code(),
            indicator: level.indicator(),
            confidence,
        }
    }

    /// The verdict used when the classifier did not recognize the image
    pub fn unknown() -> Self {
        Self::new(RiskLevel::Unknown, Decimal::ZERO)
    }
}
