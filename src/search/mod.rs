//! Debounced, latest-request-wins search over an external data source.
//!
//! Every [`SearchSession::submit`] takes a new token from a shared counter,
//! waits out the debounce interval and only then fetches. If a newer token
//! was issued while waiting, or while the fetch was in flight, the request
//! resolves as [`SearchOutcome::Superseded`] and its results are dropped.

pub mod static_source;

pub use static_source::StaticSource;

use crate::dataset::{self, RawRecord};
use crate::error::Result;
use crate::query::FilterCriteria;
use crate::types::record::RepositoryRecord;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// External repository search. Timeouts and retries belong to the
/// implementation; the session only sees success or `HealthError::Fetch`.
pub trait DataSource {
    fn search(
        &self,
        query: &str,
        criteria: &FilterCriteria,
    ) -> impl Future<Output = Result<Vec<RawRecord>>> + Send;
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Results(Vec<RepositoryRecord>),
    /// The search succeeded and matched nothing.
    Empty,
    /// A newer request was issued; this one's results were discarded.
    Superseded,
}

pub struct SearchSession<S> {
    source: S,
    debounce: Duration,
    latest: Arc<AtomicU64>,
}

impl<S: DataSource> SearchSession<S> {
    pub fn new(source: S) -> Self {
        Self::with_debounce(source, DEFAULT_DEBOUNCE)
    }

    pub fn with_debounce(source: S, debounce: Duration) -> Self {
        Self {
            source,
            debounce,
            latest: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    /// Invalidates every pending request.
    pub fn cancel(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }

    /// A blank query with no language constraint skips the source and
    /// returns `baseline` unchanged.
    pub async fn submit(
        &self,
        query: &str,
        criteria: &FilterCriteria,
        baseline: &[RepositoryRecord],
    ) -> Result<SearchOutcome> {
        let token = self.latest.fetch_add(1, Ordering::SeqCst) + 1;

        tokio::time::sleep(self.debounce).await;
        if self.is_stale(token) {
            debug!(token, "search superseded during debounce");
            return Ok(SearchOutcome::Superseded);
        }

        if query.trim().is_empty() && criteria.languages.is_empty() {
            return Ok(outcome(baseline.to_vec()));
        }

        let fetched = self.source.search(query, criteria).await;
        if self.is_stale(token) {
            match &fetched {
                Ok(raw) => debug!(token, count = raw.len(), "discarding stale search results"),
                Err(e) => debug!(token, error = %e, "discarding stale search failure"),
            }
            return Ok(SearchOutcome::Superseded);
        }

        let records = dataset::adapt(fetched?)?;
        let range = criteria.health_range.unwrap_or_default();
        let in_range = records
            .into_iter()
            .filter(|record| range.contains(record.health_score()))
            .collect::<Vec<_>>();
        debug!(token, count = in_range.len(), "search completed");
        Ok(outcome(in_range))
    }

    fn is_stale(&self, token: u64) -> bool {
        self.latest.load(Ordering::SeqCst) != token
    }
}

fn outcome(records: Vec<RepositoryRecord>) -> SearchOutcome {
    if records.is_empty() {
        SearchOutcome::Empty
    } else {
        SearchOutcome::Results(records)
    }
}
