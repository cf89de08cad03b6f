use crate::query::{self, FilterCriteria, SortKey, SystemClock};
use crate::types::record::RepositoryRecord;

pub const RECOMMEND_MIN_GOOD_FIRST_ISSUES: u32 = 5;
pub const RECOMMEND_LIMIT: usize = 3;
pub const SIMILAR_LIMIT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendSettings {
    /// Records need strictly more good-first-issues than this.
    pub min_good_first_issues: u32,
    pub limit: usize,
    pub similar_limit: usize,
}

impl Default for RecommendSettings {
    fn default() -> Self {
        Self {
            min_good_first_issues: RECOMMEND_MIN_GOOD_FIRST_ISSUES,
            limit: RECOMMEND_LIMIT,
            similar_limit: SIMILAR_LIMIT,
        }
    }
}

/// Top records by good-first-issue count, among those above the threshold.
pub fn recommended<'a>(
    records: &'a [RepositoryRecord],
    settings: &RecommendSettings,
) -> Vec<&'a RepositoryRecord> {
    let criteria = FilterCriteria::default()
        .with_min_good_first_issues(settings.min_good_first_issues.saturating_add(1));
    // Neither criterion nor key looks at commit times, so the clock is unused.
    let eligible = query::filter(records, &criteria, &SystemClock);
    let mut ranked = query::sort(eligible, SortKey::Issues, &SystemClock);
    ranked.truncate(settings.limit);
    ranked
}

/// Records in the target's language, excluding the target, in collection
/// order.
pub fn similar<'a>(
    target: &RepositoryRecord,
    records: &'a [RepositoryRecord],
    settings: &RecommendSettings,
) -> Vec<&'a RepositoryRecord> {
    let criteria = FilterCriteria::default().with_languages([target.language.clone()]);
    query::filter(
        records.iter().filter(|record| record.id != target.id),
        &criteria,
        &SystemClock,
    )
    .into_iter()
    .take(settings.similar_limit)
    .collect()
}
