use super::Clock;
use crate::types::record::RepositoryRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::{Ordering, Reverse};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Health,
    Stars,
    Activity,
    Issues,
}

/// Returns a new ordering of `records`. Every key sorts descending;
/// `Activity` puts the most recent commit first, with unresolvable labels
/// last. The sort is stable, so ties keep their input order.
pub fn sort<'a, I>(records: I, key: SortKey, clock: &dyn Clock) -> Vec<&'a RepositoryRecord>
where
    I: IntoIterator<Item = &'a RepositoryRecord>,
{
    let mut sorted = records.into_iter().collect::<Vec<_>>();
    match key {
        SortKey::Health => sorted.sort_by_key(|record| Reverse(record.health_score())),
        SortKey::Stars => sorted.sort_by_key(|record| Reverse(record.stars)),
        SortKey::Issues => sorted.sort_by_key(|record| Reverse(record.good_first_issues)),
        SortKey::Activity => {
            let now = clock.now();
            // Resolve once per record instead of once per comparison.
            let mut keyed = sorted
                .into_iter()
                .map(|record| (record.last_commit.resolve(now), record))
                .collect::<Vec<_>>();
            keyed.sort_by(|(left, _), (right, _)| most_recent_first(*left, *right));
            sorted = keyed.into_iter().map(|(_, record)| record).collect();
        }
    }
    debug!(key = ?key, count = sorted.len(), "sorted repositories");
    sorted
}

fn most_recent_first(left: Option<DateTime<Utc>>, right: Option<DateTime<Utc>>) -> Ordering {
    match (left, right) {
        (Some(left), Some(right)) => right.cmp(&left),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;
    use crate::query::recency::LastCommit;
    use crate::query::FixedClock;
    use chrono::TimeZone;

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap())
    }

    fn names(records: &[&RepositoryRecord]) -> Vec<String> {
        records.iter().map(|record| record.name.clone()).collect()
    }

    #[test]
    fn health_sort_is_descending() {
        let records = dataset::sample().expect("sample dataset should load");
        let sorted = sort(&records, SortKey::Health, &clock());
        assert!(sorted
            .windows(2)
            .all(|pair| pair[0].health_score() >= pair[1].health_score()));
        assert_eq!(sorted[0].name, "fastapi");
    }

    #[test]
    fn stars_and_issues_sort_descending() {
        let records = dataset::sample().expect("sample dataset should load");
        let by_stars = sort(&records, SortKey::Stars, &clock());
        assert_eq!(
            names(&by_stars)[..3],
            ["react".to_string(), "vue".to_string(), "tensorflow".to_string()]
        );
        let by_issues = sort(&records, SortKey::Issues, &clock());
        assert_eq!(names(&by_issues)[0], "tensorflow");
        assert_eq!(names(&by_issues)[7], "axios");
    }

    #[test]
    fn activity_sort_uses_resolved_recency() {
        let records = dataset::sample().expect("sample dataset should load");
        let sorted = sort(&records, SortKey::Activity, &clock());
        // "12 days ago" must sort after "2 days ago", unlike a string compare.
        assert_eq!(
            names(&sorted),
            vec!["nextjs", "tensorflow", "deno", "fastapi", "svelte", "react", "vue", "axios"]
        );
    }

    #[test]
    fn activity_sort_puts_unknown_labels_last() {
        let mut records = dataset::sample().expect("sample dataset should load");
        records[6].last_commit = LastCommit::parse("unknown");
        let sorted = sort(&records, SortKey::Activity, &clock());
        assert_eq!(sorted[7].name, "nextjs");
    }

    #[test]
    fn activity_sort_puts_out_of_range_labels_last() {
        let mut records = dataset::sample().expect("sample dataset should load");
        records[6].last_commit = LastCommit::parse("99999999999999999 years ago");
        let sorted = sort(&records, SortKey::Activity, &clock());
        assert_eq!(sorted[7].name, "nextjs");
    }

    #[test]
    fn sort_is_stable_for_ties() {
        let records = dataset::sample().expect("sample dataset should load");
        let sorted = sort(&records, SortKey::Activity, &clock());
        // fastapi and svelte are both "1 day ago" and keep input order.
        let fastapi = sorted.iter().position(|r| r.name == "fastapi").expect("present");
        let svelte = sorted.iter().position(|r| r.name == "svelte").expect("present");
        assert_eq!(svelte, fastapi + 1);
    }

    #[test]
    fn sorting_sorted_input_is_a_no_op() {
        let records = dataset::sample().expect("sample dataset should load");
        for key in [SortKey::Health, SortKey::Stars, SortKey::Activity, SortKey::Issues] {
            let once = sort(&records, key, &clock());
            let twice = sort(once.iter().copied(), key, &clock());
            assert_eq!(once, twice, "{key:?}");
        }
    }

    #[test]
    fn sort_leaves_input_untouched() {
        let records = dataset::sample().expect("sample dataset should load");
        let before = records.clone();
        let _ = sort(&records, SortKey::Stars, &clock());
        assert_eq!(records, before);
    }
}
