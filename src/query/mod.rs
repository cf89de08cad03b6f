//! Repository query engine: filtering and sorting over borrowed records.
//!
//! Both operations are pure. They take any iterator of `&RepositoryRecord`
//! and return a new `Vec` of references, so results can be fed back in
//! (`filter(filter(r, c), c)`) without cloning records.
//!
//! Relative last-commit labels ("2 days ago") are resolved against a
//! [`Clock`]. Pass a [`FixedClock`] to make activity filtering and activity
//! sorting repeatable.

pub mod criteria;
pub mod filter;
pub mod recency;
pub mod sort;

pub use criteria::{FilterCriteria, ScoreRange};
pub use filter::filter;
pub use sort::{sort, SortKey};

use chrono::{DateTime, Utc};

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
