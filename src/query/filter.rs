use super::criteria::FilterCriteria;
use super::Clock;
use crate::types::record::{CiStatus, RepositoryRecord};
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

/// Keeps the records that satisfy every set criterion, in input order.
pub fn filter<'a, I>(
    records: I,
    criteria: &FilterCriteria,
    clock: &dyn Clock,
) -> Vec<&'a RepositoryRecord>
where
    I: IntoIterator<Item = &'a RepositoryRecord>,
{
    let now = clock.now();
    let mut seen = 0usize;
    let kept = records
        .into_iter()
        .inspect(|_| seen += 1)
        .filter(|record| matches(record, criteria, now))
        .collect::<Vec<_>>();
    debug!(input = seen, output = kept.len(), "filtered repositories");
    kept
}

pub fn matches(record: &RepositoryRecord, criteria: &FilterCriteria, now: DateTime<Utc>) -> bool {
    if !criteria.languages.is_empty()
        && !criteria
            .languages
            .iter()
            .any(|language| record.matches_language(language))
    {
        return false;
    }

    if let Some(range) = criteria.health_range {
        if !range.contains(record.health_score()) {
            return false;
        }
    }

    if let Some(threshold) = criteria.min_good_first_issues {
        if record.good_first_issues < threshold {
            return false;
        }
    }

    if criteria.has_good_first_issues && record.good_first_issues == 0 {
        return false;
    }

    if criteria.ci_passing && record.ci_status != CiStatus::Passing {
        return false;
    }

    if criteria.has_documentation && !record.has_documentation() {
        return false;
    }

    if let Some(license) = &criteria.license {
        if record.license != *license {
            return false;
        }
    }

    if let Some(window) = criteria.activity_days {
        match record.last_commit.age_days(now) {
            Some(age) => {
                if age > i64::from(window) {
                    return false;
                }
            }
            None => {
                warn!(
                    id = %record.id,
                    last_commit = %record.last_commit,
                    "unresolvable last-commit label fails activity window"
                );
                return false;
            }
        }
    }

    true
}
