pub mod json;
pub mod md;

use crate::compare::ComparisonView;
use crate::error::HealthError;
use crate::query::recency::LastCommit;
use crate::types::record::{CiStatus, RepositoryRecord};
use crate::types::scoring::{HealthScore, HealthTier, ScoreBreakdown};
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

/// One line of a ranked listing.
#[derive(Debug, Clone, Serialize)]
pub struct RankingRow<'a> {
    pub rank: usize,
    pub id: &'a str,
    pub name: &'a str,
    pub health_score: HealthScore,
    pub tier: HealthTier,
    pub stars: u64,
    pub language: &'a str,
    pub last_commit: &'a LastCommit,
    pub good_first_issues: u32,
    pub ci_status: CiStatus,
}

impl<'a> RankingRow<'a> {
    pub fn from_records(records: &[&'a RepositoryRecord]) -> Vec<Self> {
        records
            .iter()
            .copied()
            .enumerate()
            .map(|(index, record)| Self {
                rank: index + 1,
                id: &record.id,
                name: &record.name,
                health_score: record.health_score(),
                tier: HealthTier::from_score(record.health_score()),
                stars: record.stars,
                language: &record.language,
                last_commit: &record.last_commit,
                good_first_issues: record.good_first_issues,
                ci_status: record.ci_status,
            })
            .collect()
    }
}

pub fn render_ranking(
    title: &str,
    records: &[&RepositoryRecord],
    format: OutputFormat,
) -> Result<String, HealthError> {
    let rows = RankingRow::from_records(records);
    match format {
        OutputFormat::Json => json::to_json(&rows).map_err(HealthError::Json),
        OutputFormat::Md => Ok(md::ranking_to_markdown(title, &rows)),
    }
}

pub fn render_breakdown(
    record: &RepositoryRecord,
    breakdown: &ScoreBreakdown,
    format: OutputFormat,
) -> Result<String, HealthError> {
    match format {
        OutputFormat::Json => json::to_json(&json::BreakdownDocument {
            id: &record.id,
            name: &record.name,
            breakdown,
        })
        .map_err(HealthError::Json),
        OutputFormat::Md => Ok(md::breakdown_to_markdown(record, breakdown)),
    }
}

pub fn render_comparison(
    view: &ComparisonView<'_>,
    format: OutputFormat,
) -> Result<String, HealthError> {
    match format {
        OutputFormat::Json => json::to_json(view).map_err(HealthError::Json),
        OutputFormat::Md => Ok(md::comparison_to_markdown(view)),
    }
}
