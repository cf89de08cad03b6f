use crate::error::{HealthError, Result};
use crate::types::scoring::HealthScore;
use serde::{Deserialize, Serialize};

/// Inclusive health-score bounds with `lo <= hi <= 100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "(HealthScore, HealthScore)", into = "(HealthScore, HealthScore)")]
pub struct ScoreRange {
    lo: HealthScore,
    hi: HealthScore,
}

impl ScoreRange {
    pub const FULL: ScoreRange = ScoreRange { lo: 0, hi: 100 };

    pub fn new(lo: HealthScore, hi: HealthScore) -> Result<Self> {
        if hi > 100 {
            return Err(HealthError::InvalidCriteria(format!(
                "health range upper bound must be at most 100 (found {hi})"
            )));
        }
        if lo > hi {
            return Err(HealthError::InvalidCriteria(format!(
                "health range lower bound {lo} exceeds upper bound {hi}"
            )));
        }
        Ok(Self { lo, hi })
    }

    pub fn contains(&self, score: HealthScore) -> bool {
        (self.lo..=self.hi).contains(&score)
    }
}

impl Default for ScoreRange {
    fn default() -> Self {
        Self::FULL
    }
}

impl TryFrom<(HealthScore, HealthScore)> for ScoreRange {
    type Error = HealthError;

    fn try_from((lo, hi): (HealthScore, HealthScore)) -> Result<Self> {
        Self::new(lo, hi)
    }
}

impl From<ScoreRange> for (HealthScore, HealthScore) {
    fn from(range: ScoreRange) -> Self {
        (range.lo, range.hi)
    }
}

/// Filter criteria. Every field defaults to "no constraint"; the set ones
/// are AND-combined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Case-insensitive allow-set. Empty means any language.
    pub languages: Vec<String>,
    /// Maximum age of the last commit in days.
    pub activity_days: Option<u32>,
    pub health_range: Option<ScoreRange>,
    pub min_good_first_issues: Option<u32>,
    pub has_good_first_issues: bool,
    pub ci_passing: bool,
    pub has_documentation: bool,
    /// Exact match.
    pub license: Option<String>,
}

impl FilterCriteria {
    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_activity_days(mut self, days: u32) -> Self {
        self.activity_days = Some(days);
        self
    }

    pub fn with_health_range(mut self, range: ScoreRange) -> Self {
        self.health_range = Some(range);
        self
    }

    pub fn with_min_good_first_issues(mut self, threshold: u32) -> Self {
        self.min_good_first_issues = Some(threshold);
        self
    }

    pub fn with_good_first_issues(mut self) -> Self {
        self.has_good_first_issues = true;
        self
    }

    pub fn with_ci_passing(mut self) -> Self {
        self.ci_passing = true;
        self
    }

    pub fn with_documentation(mut self) -> Self {
        self.has_documentation = true;
        self
    }

    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        self.license = Some(license.into());
        self
    }
}
