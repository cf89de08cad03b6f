//! Adapting source-shaped records into [`RepositoryRecord`]s.
//!
//! Sources ship camelCase JSON shaped like the bundled sample. Only `id`,
//! `name` and `healthBreakdown` are required; missing secondary metrics fall
//! back to empty values.

use crate::error::{HealthError, Result};
use crate::query::recency::LastCommit;
use crate::types::record::{
    CiStatus, CommunityMetrics, DocumentationPresence, RepositoryRecord, Trend,
};
use crate::types::signals::RepositorySignals;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

const SAMPLE_DATASET: &str = include_str!("../data/sample_repositories.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub stars: u64,
    /// Whatever score the source computed. Never trusted.
    pub health_score: Option<f64>,
    pub last_commit: Option<LastCommit>,
    #[serde(default)]
    pub good_first_issues: u32,
    pub ci_status: Option<CiStatus>,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub license: String,
    #[serde(default)]
    pub contributors: u32,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default, rename = "signals")]
    pub badges: Vec<String>,
    pub trend: Option<Trend>,
    pub health_breakdown: RepositorySignals,
    pub avg_issue_response_time: Option<String>,
    pub pr_merge_rate: Option<u8>,
    pub active_contributors: Option<u32>,
    pub contributor_diversity: Option<u32>,
    pub code_coverage: Option<u8>,
    #[serde(default)]
    pub has_good_docs: bool,
    #[serde(default)]
    pub has_wiki: bool,
    #[serde(default)]
    pub has_website: bool,
}

impl TryFrom<RawRecord> for RepositoryRecord {
    type Error = HealthError;

    fn try_from(raw: RawRecord) -> Result<Self> {
        let mut record = RepositoryRecord::new(raw.id, raw.name, raw.health_breakdown)?;
        if let Some(source_score) = raw.health_score {
            if source_score != f64::from(record.health_score()) {
                debug!(
                    id = %record.id,
                    source_score,
                    computed = record.health_score(),
                    "ignoring source-supplied health score"
                );
            }
        }

        record.description = raw.description;
        record.stars = raw.stars;
        record.last_commit = raw.last_commit.unwrap_or_default();
        record.good_first_issues = raw.good_first_issues;
        record.ci_status = raw.ci_status.unwrap_or_default();
        record.language = raw.language;
        record.license = raw.license;
        record.contributors = raw.contributors;
        record.topics = raw.topics;
        record.badges = raw.badges;
        record.trend = raw.trend.unwrap_or_default();
        record.community = CommunityMetrics {
            avg_issue_response: raw.avg_issue_response_time,
            pr_merge_rate: raw.pr_merge_rate,
            active_contributors: raw.active_contributors,
            contributor_diversity: raw.contributor_diversity,
            code_coverage: raw.code_coverage,
        };
        record.documentation = DocumentationPresence {
            good_docs: raw.has_good_docs,
            wiki: raw.has_wiki,
            website: raw.has_website,
        };
        Ok(record)
    }
}

/// Converts a batch, rejecting duplicate ids.
pub fn adapt(raw: Vec<RawRecord>) -> Result<Vec<RepositoryRecord>> {
    let mut ids = HashSet::new();
    raw.into_iter()
        .map(|record| {
            if !ids.insert(record.id.clone()) {
                return Err(HealthError::Dataset(format!(
                    "duplicate repository id: {}",
                    record.id
                )));
            }
            RepositoryRecord::try_from(record)
        })
        .collect()
}

pub fn parse_raw(json: &str) -> Result<Vec<RawRecord>> {
    Ok(serde_json::from_str(json)?)
}

pub fn sample_raw() -> Result<Vec<RawRecord>> {
    parse_raw(SAMPLE_DATASET)
}

pub fn sample() -> Result<Vec<RepositoryRecord>> {
    adapt(sample_raw()?)
}

pub fn load_raw(path: &Path) -> Result<Vec<RawRecord>> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| HealthError::Dataset(format!("{}: {}", path.display(), e)))
}

pub fn load(path: &Path) -> Result<Vec<RepositoryRecord>> {
    adapt(load_raw(path)?)
}
