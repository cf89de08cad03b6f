//! Side-by-side comparison of up to three repositories.

use crate::error::{HealthError, Result};
use crate::query::recency::LastCommit;
use crate::types::record::RepositoryRecord;
use crate::types::scoring::ScoreBreakdown;
use serde::Serialize;

pub const COMPARISON_CAPACITY: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

/// Ordered set of repository ids chosen for comparison. Insertion order
/// decides slot assignment. Holds ids only, never records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonSelection {
    ids: Vec<String>,
}

impl ComparisonSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= COMPARISON_CAPACITY
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|candidate| candidate == id)
    }

    /// Adds `id` if absent, removes it if present. Adding to a full
    /// selection fails with `CapacityExceeded` and changes nothing.
    pub fn toggle(&mut self, id: &str) -> Result<Toggle> {
        if self.remove(id) {
            return Ok(Toggle::Removed);
        }
        if self.is_full() {
            return Err(HealthError::CapacityExceeded {
                capacity: COMPARISON_CAPACITY,
            });
        }
        self.ids.push(id.to_string());
        Ok(Toggle::Added)
    }

    /// Returns whether `id` was present. Removing an absent id is a no-op.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|candidate| candidate != id);
        self.ids.len() != before
    }
}

/// The six metrics shown per member, copied verbatim from the record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyMetrics<'a> {
    pub stars: u64,
    pub last_commit: &'a LastCommit,
    pub good_first_issues: u32,
    pub contributors: u32,
    pub language: &'a str,
    pub license: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonEntry<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub breakdown: ScoreBreakdown,
    pub metrics: KeyMetrics<'a>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "slot", rename_all = "lowercase")]
pub enum ComparisonSlot<'a> {
    Filled(ComparisonEntry<'a>),
    Empty,
}

impl ComparisonSlot<'_> {
    pub fn is_filled(&self) -> bool {
        matches!(self, Self::Filled(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonView<'a> {
    pub slots: Vec<ComparisonSlot<'a>>,
}

impl<'a> ComparisonView<'a> {
    pub fn entries(&self) -> impl Iterator<Item = &ComparisonEntry<'a>> {
        self.slots.iter().filter_map(|slot| match slot {
            ComparisonSlot::Filled(entry) => Some(entry),
            ComparisonSlot::Empty => None,
        })
    }

    pub fn filled(&self) -> usize {
        self.entries().count()
    }
}

/// Resolves the selection against `records` and lays it out in
/// [`COMPARISON_CAPACITY`] slots, members first in selection order.
pub fn build_comparison<'a>(
    selection: &ComparisonSelection,
    records: &'a [RepositoryRecord],
) -> Result<ComparisonView<'a>> {
    let mut slots = selection
        .ids()
        .iter()
        .map(|id| {
            let record = records
                .iter()
                .find(|record| record.id == *id)
                .ok_or_else(|| HealthError::RecordNotFound(id.clone()))?;
            Ok(ComparisonSlot::Filled(entry(record)?))
        })
        .collect::<Result<Vec<_>>>()?;
    slots.resize(COMPARISON_CAPACITY, ComparisonSlot::Empty);
    Ok(ComparisonView { slots })
}

fn entry(record: &RepositoryRecord) -> Result<ComparisonEntry<'_>> {
    Ok(ComparisonEntry {
        id: &record.id,
        name: &record.name,
        breakdown: record.breakdown()?,
        metrics: KeyMetrics {
            stars: record.stars,
            last_commit: &record.last_commit,
            good_first_issues: record.good_first_issues,
            contributors: record.contributors,
            language: &record.language,
            license: &record.license,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;

    #[test]
    fn fourth_member_is_rejected_without_mutation() {
        let mut selection = ComparisonSelection::new();
        for id in ["1", "2", "3"] {
            assert_eq!(selection.toggle(id).expect("room left"), Toggle::Added);
        }
        let before = selection.clone();
        let err = selection.toggle("4").expect_err("selection is full");
        assert!(matches!(err, HealthError::CapacityExceeded { capacity: 3 }));
        assert_eq!(selection, before);
    }

    #[test]
    fn toggle_twice_restores_selection() {
        let mut selection = ComparisonSelection::new();
        selection.toggle("1").expect("room left");
        let before = selection.clone();
        assert_eq!(selection.toggle("2").expect("room left"), Toggle::Added);
        assert_eq!(selection.toggle("2").expect("present"), Toggle::Removed);
        assert_eq!(selection, before);
    }

    #[test]
    fn toggle_removes_from_full_selection() {
        let mut selection = ComparisonSelection::new();
        for id in ["1", "2", "3"] {
            selection.toggle(id).expect("room left");
        }
        assert_eq!(selection.toggle("2").expect("present"), Toggle::Removed);
        assert_eq!(selection.ids(), ["1".to_string(), "3".to_string()]);
    }

    #[test]
    fn removing_absent_id_is_a_no_op() {
        let mut selection = ComparisonSelection::new();
        selection.toggle("1").expect("room left");
        assert!(!selection.remove("9"));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn two_members_fill_two_of_three_slots() {
        let records = dataset::sample().expect("sample should load");
        let mut selection = ComparisonSelection::new();
        selection.toggle("3").expect("room left");
        selection.toggle("1").expect("room left");

        let view = build_comparison(&selection, &records).expect("ids exist");
        assert_eq!(view.slots.len(), COMPARISON_CAPACITY);
        assert_eq!(view.filled(), 2);
        assert!(!view.slots[2].is_filled());

        let names = view.entries().map(|entry| entry.name).collect::<Vec<_>>();
        assert_eq!(names, vec!["fastapi", "react"]);

        let react = view.entries().nth(1).expect("second slot");
        assert_eq!(react.breakdown.score, 88);
        assert_eq!(react.metrics.stars, 218_000);
        assert_eq!(react.metrics.license, "MIT");
        assert_eq!(react.metrics.last_commit.to_string(), "2 days ago");
    }

    #[test]
    fn empty_selection_yields_empty_slots() {
        let records = dataset::sample().expect("sample should load");
        let view = build_comparison(&ComparisonSelection::new(), &records).expect("empty is fine");
        assert_eq!(view.filled(), 0);
        assert_eq!(view.slots.len(), COMPARISON_CAPACITY);
    }

    #[test]
    fn unknown_id_is_reported() {
        let records = dataset::sample().expect("sample should load");
        let mut selection = ComparisonSelection::new();
        selection.toggle("42").expect("room left");
        let err = build_comparison(&selection, &records).expect_err("id is missing");
        assert!(matches!(err, HealthError::RecordNotFound(id) if id == "42"));
    }
}
