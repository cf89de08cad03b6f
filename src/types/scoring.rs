use crate::types::signals::Signal;
use serde::Serialize;

pub type HealthScore = u8;

/// One row of the explanation table: a sub-signal, its weight and the
/// unrounded weighted contribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Contribution {
    pub signal: Signal,
    pub raw: f64,
    pub weight: f64,
    pub contribution: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub contributions: Vec<Contribution>,
    /// Sum of the unrounded contributions.
    pub weighted_total: f64,
    pub score: HealthScore,
    pub tier: HealthTier,
}

impl ScoreBreakdown {
    pub fn contribution(&self, signal: Signal) -> Option<&Contribution> {
        self.contributions
            .iter()
            .find(|contribution| contribution.signal == signal)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthTier {
    HighlyRecommended,
    Promising,
    NeedsReview,
}

impl HealthTier {
    pub const HIGHLY_RECOMMENDED_MIN: HealthScore = 80;
    pub const PROMISING_MIN: HealthScore = 60;

    pub fn from_score(score: HealthScore) -> Self {
        if score >= Self::HIGHLY_RECOMMENDED_MIN {
            Self::HighlyRecommended
        } else if score >= Self::PROMISING_MIN {
            Self::Promising
        } else {
            Self::NeedsReview
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::HighlyRecommended => "Highly Recommended",
            Self::Promising => "Promising",
            Self::NeedsReview => "Needs Review",
        }
    }
}
