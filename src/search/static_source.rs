use super::DataSource;
use crate::dataset::RawRecord;
use crate::error::Result;
use crate::query::FilterCriteria;
use crate::types::record::same_language;
use std::future::{ready, Future};

/// In-memory data source over a fixed set of raw records.
///
/// A record matches when the query is a case-insensitive substring of its
/// name, description or language, or equals one of its topics. Language
/// constraints in the criteria are applied here, the way a remote search
/// API would; everything else is left to the query engine.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<RawRecord>,
}

impl StaticSource {
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self { records }
    }

    pub fn matching(&self, query: &str, criteria: &FilterCriteria) -> Vec<RawRecord> {
        let needle = query.trim().to_lowercase();
        self.records
            .iter()
            .filter(|record| needle.is_empty() || matches_text(record, &needle))
            .filter(|record| {
                criteria.languages.is_empty()
                    || criteria
                        .languages
                        .iter()
                        .any(|language| same_language(language, &record.language))
            })
            .cloned()
            .collect()
    }
}

impl DataSource for StaticSource {
    fn search(
        &self,
        query: &str,
        criteria: &FilterCriteria,
    ) -> impl Future<Output = Result<Vec<RawRecord>>> + Send {
        ready(Ok(self.matching(query, criteria)))
    }
}

fn matches_text(record: &RawRecord, needle: &str) -> bool {
    record.name.to_lowercase().contains(needle)
        || record.description.to_lowercase().contains(needle)
        || record.language.to_lowercase().contains(needle)
        || record
            .topics
            .iter()
            .any(|topic| topic.to_lowercase() == needle)
}
