use crate::error::Result;
use crate::query::recency::LastCommit;
use crate::score::HealthScoreCalculator;
use crate::types::scoring::{HealthScore, ScoreBreakdown};
use crate::types::signals::RepositorySignals;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CiStatus {
    Passing,
    Failing,
    #[default]
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Stable,
}

/// Secondary community metrics. Sources often omit these, so every field
/// is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommunityMetrics {
    pub avg_issue_response: Option<String>,
    pub pr_merge_rate: Option<u8>,
    pub active_contributors: Option<u32>,
    pub contributor_diversity: Option<u32>,
    pub code_coverage: Option<u8>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentationPresence {
    pub good_docs: bool,
    pub wiki: bool,
    pub website: bool,
}

impl DocumentationPresence {
    pub fn any(&self) -> bool {
        self.good_docs || self.wiki || self.website
    }
}

/// A repository as the engine sees it. The health score is computed when
/// the signals are set and cannot be assigned any other way.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepositoryRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub stars: u64,
    pub last_commit: LastCommit,
    pub good_first_issues: u32,
    pub ci_status: CiStatus,
    pub language: String,
    pub license: String,
    pub contributors: u32,
    pub topics: Vec<String>,
    pub badges: Vec<String>,
    pub trend: Trend,
    pub community: CommunityMetrics,
    pub documentation: DocumentationPresence,
    signals: RepositorySignals,
    health_score: HealthScore,
}

impl RepositoryRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        signals: RepositorySignals,
    ) -> Result<Self> {
        let health_score = HealthScoreCalculator::default().compute(&signals)?;
        Ok(Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            stars: 0,
            last_commit: LastCommit::default(),
            good_first_issues: 0,
            ci_status: CiStatus::default(),
            language: String::new(),
            license: String::new(),
            contributors: 0,
            topics: Vec::new(),
            badges: Vec::new(),
            trend: Trend::default(),
            community: CommunityMetrics::default(),
            documentation: DocumentationPresence::default(),
            signals,
            health_score,
        })
    }

    pub fn signals(&self) -> &RepositorySignals {
        &self.signals
    }

    pub fn health_score(&self) -> HealthScore {
        self.health_score
    }

    /// Replaces the signals and recomputes the score. On a validation
    /// error the record is left untouched.
    pub fn set_signals(&mut self, signals: RepositorySignals) -> Result<()> {
        let health_score = HealthScoreCalculator::default().compute(&signals)?;
        self.signals = signals;
        self.health_score = health_score;
        Ok(())
    }

    pub fn breakdown(&self) -> Result<ScoreBreakdown> {
        HealthScoreCalculator::default().breakdown(&self.signals)
    }

    pub fn matches_language(&self, language: &str) -> bool {
        same_language(&self.language, language)
    }

    pub fn has_documentation(&self) -> bool {
        self.documentation.any()
    }
}

/// Case-insensitive language comparison, ignoring surrounding whitespace
/// on both sides.
pub fn same_language(left: &str, right: &str) -> bool {
    left.trim().to_lowercase() == right.trim().to_lowercase()
}
