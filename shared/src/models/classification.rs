//! Plant disease classification models

use serde::{Deserialize, Serialize};

/// Default confidence below which a classification is treated as unknown
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.4;

/// Label produced by the external leaf image classifier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DiseaseLabel {
    Blight,
    Healthy,
    Mosaic,
    Rust,
    Unknown,
}

impl DiseaseLabel {
    pub const ALL: [DiseaseLabel; 5] = [
        DiseaseLabel::Blight,
        DiseaseLabel::Healthy,
        DiseaseLabel::Mosaic,
        DiseaseLabel::Rust,
        DiseaseLabel::Unknown,
    ];

    /// Parse a classifier label; anything unrecognized is `Unknown`
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "blight" => DiseaseLabel::Blight,
            "healthy" => DiseaseLabel::Healthy,
            "mosaic" => DiseaseLabel::Mosaic,
            "rust" => DiseaseLabel::Rust,
            _ => DiseaseLabel::Unknown,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, DiseaseLabel::Unknown)
    }
}

impl std::fmt::Display for DiseaseLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiseaseLabel::Blight => write!(f, "Blight"),
            DiseaseLabel::Healthy => write!(f, "Healthy"),
            DiseaseLabel::Mosaic => write!(f, "Mosaic"),
            DiseaseLabel::Rust => write!(f, "Rust"),
            DiseaseLabel::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Raw per-class score returned by the classifier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassScore {
    pub label: String,
    pub score: f64,
}

/// Final classification after the confidence threshold is applied
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Classification {
    pub label: DiseaseLabel,
    pub confidence: f64,
}

impl Classification {
    /// Pick the highest scoring class, forcing `Unknown` below `threshold`
    ///
    /// The reported confidence is always the top score, even when the label
    /// was forced to `Unknown`.
    pub fn from_scores(scores: &[ClassScore], threshold: f64) -> Self {
        let best = scores
            .iter()
            .filter(|s| s.score.is_finite())
            .fold(None::<&ClassScore>, |best, s| match best {
                Some(b) if b.score >= s.score => Some(b),
                _ => Some(s),
            });

        match best {
            Some(top) if top.score >= threshold => Self {
                label: DiseaseLabel::parse(&top.label),
                confidence: top.score,
            },
            Some(top) => Self {
                label: DiseaseLabel::Unknown,
                confidence: top.score,
            },
            None => Self {
                label: DiseaseLabel::Unknown,
                confidence: 0.0,
            },
        }
    }
}
