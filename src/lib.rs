//! Health-score ranking engine for open-source repository discovery.
//!
//! Records come in already shaped ([`dataset`]), get a weighted health score
//! ([`score`]), and are filtered and sorted ([`query`]) before being compared
//! ([`compare`]) or narrowed to recommendations ([`recommend`]). The only
//! async boundary is the external search in [`search`].

pub mod compare;
pub mod config;
pub mod dataset;
pub mod error;
pub mod query;
pub mod recommend;
pub mod report;
pub mod score;
pub mod search;
pub mod types;

pub use error::{HealthError, Result};
pub use types::record::RepositoryRecord;
pub use types::signals::RepositorySignals;
