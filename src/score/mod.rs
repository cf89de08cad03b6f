//! Health score calculator.
//!
//! ```text
//! score = round(activity*0.30 + community*0.25 + documentation*0.15
//!             + freshness*0.15 + compatibility*0.15)
//! ```

use crate::error::{HealthError, Result};
use crate::types::scoring::{Contribution, HealthScore, HealthTier, ScoreBreakdown};
use crate::types::signals::{RepositorySignals, Signal};

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Per-signal weights. The sum-to-one invariant is checked once in
/// [`WeightTable::new`], never per call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightTable {
    weights: [f64; 5],
}

impl WeightTable {
    pub const STANDARD: [f64; 5] = [0.30, 0.25, 0.15, 0.15, 0.15];

    /// Weights are given in [`Signal::ALL`] order.
    pub fn new(weights: [f64; 5]) -> Result<Self> {
        if let Some((signal, weight)) = Signal::ALL
            .iter()
            .zip(weights.iter())
            .find(|(_, weight)| !(0.0..=1.0).contains(*weight))
        {
            return Err(HealthError::InvalidWeights(format!(
                "{signal} weight must be between 0.0 and 1.0 (found {weight})"
            )));
        }
        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(HealthError::InvalidWeights(format!(
                "weights must sum to 1.00 (found {sum:.3})"
            )));
        }
        Ok(Self { weights })
    }

    pub fn standard() -> Self {
        Self {
            weights: Self::STANDARD,
        }
    }

    pub fn weight(&self, signal: Signal) -> f64 {
        let index = Signal::ALL
            .iter()
            .position(|candidate| *candidate == signal)
            .unwrap_or_default();
        self.weights[index]
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Clone, Default)]
pub struct HealthScoreCalculator {
    weights: WeightTable,
}

impl HealthScoreCalculator {
    pub fn compute(&self, signals: &RepositorySignals) -> Result<HealthScore> {
        signals.validate()?;
        Ok(round_half_up(self.weighted_total(signals)))
    }

    /// Weighted contribution per signal. Rows are not individually rounded,
    /// so they sum to `weighted_total`, which rounds to `score`.
    pub fn breakdown(&self, signals: &RepositorySignals) -> Result<ScoreBreakdown> {
        signals.validate()?;
        let contributions = Signal::ALL
            .iter()
            .map(|&signal| {
                let raw = signals.get(signal);
                let weight = self.weights.weight(signal);
                Contribution {
                    signal,
                    raw,
                    weight,
                    contribution: raw * weight,
                }
            })
            .collect::<Vec<_>>();
        let weighted_total = contributions
            .iter()
            .map(|row| row.contribution)
            .sum::<f64>();
        let score = round_half_up(weighted_total);

        Ok(ScoreBreakdown {
            contributions,
            weighted_total,
            score,
            tier: HealthTier::from_score(score),
        })
    }

    fn weighted_total(&self, signals: &RepositorySignals) -> f64 {
        Signal::ALL
            .iter()
            .map(|&signal| signals.get(signal) * self.weights.weight(signal))
            .sum()
    }
}

pub fn compute_health_score(signals: &RepositorySignals) -> Result<HealthScore> {
    HealthScoreCalculator::default().compute(signals)
}

pub fn score_breakdown(signals: &RepositorySignals) -> Result<ScoreBreakdown> {
    HealthScoreCalculator::default().breakdown(signals)
}

fn round_half_up(value: f64) -> HealthScore {
    // Snap away binary noise first so that e.g. 87.4999999999 from
    // 0.15-weight products still rounds as 87.5.
    let snapped = (value * 1e9).round() / 1e9;
    (snapped + 0.5).floor().clamp(0.0, 100.0) as HealthScore
}
