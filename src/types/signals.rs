use crate::error::{HealthError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The five sub-signals a health score is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Activity,
    Community,
    Documentation,
    Freshness,
    Compatibility,
}

impl Signal {
    pub const ALL: [Signal; 5] = [
        Signal::Activity,
        Signal::Community,
        Signal::Documentation,
        Signal::Freshness,
        Signal::Compatibility,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Activity => "activity",
            Self::Community => "community",
            Self::Documentation => "documentation",
            Self::Freshness => "freshness",
            Self::Compatibility => "compatibility",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const SIGNAL_MIN: f64 = 0.0;
pub const SIGNAL_MAX: f64 = 100.0;

/// Normalized sub-signals for one repository snapshot, each expected in
/// `[0, 100]`. Values are not clamped; [`RepositorySignals::validate`]
/// reports the first out-of-domain field instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RepositorySignals {
    pub activity: f64,
    pub community: f64,
    pub documentation: f64,
    pub freshness: f64,
    pub compatibility: f64,
}

impl RepositorySignals {
    pub fn new(
        activity: f64,
        community: f64,
        documentation: f64,
        freshness: f64,
        compatibility: f64,
    ) -> Self {
        Self {
            activity,
            community,
            documentation,
            freshness,
            compatibility,
        }
    }

    pub fn get(&self, signal: Signal) -> f64 {
        match signal {
            Signal::Activity => self.activity,
            Signal::Community => self.community,
            Signal::Documentation => self.documentation,
            Signal::Freshness => self.freshness,
            Signal::Compatibility => self.compatibility,
        }
    }

    pub fn validate(&self) -> Result<()> {
        for signal in Signal::ALL {
            let value = self.get(signal);
            // NaN fails the range check as well.
            if !(SIGNAL_MIN..=SIGNAL_MAX).contains(&value) {
                return Err(HealthError::Validation { signal, value });
            }
        }
        Ok(())
    }
}
