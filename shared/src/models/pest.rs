//! Pest category models

use rust_decimal::Decimal;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::types::clamp_unit;
use crate::validation::decimal_to_f64;

/// The fixed set of biological threats scored independently
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PestCategory {
    Aphids,
    FungalDiseases,
    SpiderMites,
    Thrips,
    Whiteflies,
}

impl PestCategory {
    /// Declaration order; also the tie-break order when ranking threats
    pub const ALL: [PestCategory; 5] = [
        PestCategory::Aphids,
        PestCategory::FungalDiseases,
        PestCategory::SpiderMites,
        PestCategory::Thrips,
        PestCategory::Whiteflies,
    ];

    pub fn index(&self) -> usize {
        match self {
            PestCategory::Aphids => 0,
            PestCategory::FungalDiseases => 1,
            PestCategory::SpiderMites => 2,
            PestCategory::Thrips => 3,
            PestCategory::Whiteflies => 4,
        }
    }

    /// Identifier used on the wire
    pub fn key(&self) -> &'static str {
        match self {
            PestCategory::Aphids => "aphids",
            PestCategory::FungalDiseases => "fungal_diseases",
            PestCategory::SpiderMites => "spider_mites",
            PestCategory::Thrips => "thrips",
            PestCategory::Whiteflies => "whiteflies",
        }
    }

    /// Farmer-facing threat name
    pub fn display_name(&self) -> &'static str {
        match self {
            PestCategory::Aphids => "Aphid Infestation",
            PestCategory::FungalDiseases => "Fungal Diseases",
            PestCategory::SpiderMites => "Spider Mite Damage",
            PestCategory::Thrips => "Thrips Damage",
            PestCategory::Whiteflies => "Whitefly Infestation",
        }
    }
}

impl std::fmt::Display for PestCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One score in [0, 1] for every pest category
///
/// Every category is always present, so consumers never see an empty
/// mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PestScores {
    scores: [Decimal; 5],
}

impl PestScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: PestCategory) -> Decimal {
        self.scores[category.index()]
    }

    /// Set a category score, clamped to [0, 1]
    pub fn set(&mut self, category: PestCategory, score: Decimal) {
        self.scores[category.index()] = clamp_unit(score);
    }

    /// Scores paired with their category, in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (PestCategory, Decimal)> + '_ {
        PestCategory::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    pub fn max(&self) -> Decimal {
        self.scores.iter().copied().max().unwrap_or(Decimal::ZERO)
    }
}

impl FromIterator<(PestCategory, Decimal)> for PestScores {
    fn from_iter<I: IntoIterator<Item = (PestCategory, Decimal)>>(iter: I) -> Self {
        let mut scores = PestScores::new();
        for (category, score) in iter {
            scores.set(category, score);
        }
        scores
    }
}

impl Serialize for PestScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(PestCategory::ALL.len()))?;
        for (category, score) in self.iter() {
            map.serialize_entry(category.key(), &decimal_to_f64(score))?;
        }
        map.end()
    }
}
