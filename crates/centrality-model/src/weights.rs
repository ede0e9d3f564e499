//! Metric weights for the composite score.

use serde::{Deserialize, Serialize};

use crate::error::{CentralityError, Result};

/// Multipliers applied to each metric proportion in the weighted sum.
///
/// All three default to 1.0, which makes the weighted sum equal the
/// unweighted one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Weights {
    pub importance: f64,
    pub frequency: f64,
    pub relevance: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            importance: 1.0,
            frequency: 1.0,
            relevance: 1.0,
        }
    }
}

impl Weights {
    pub fn new(importance: f64, frequency: f64, relevance: f64) -> Self {
        Self {
            importance,
            frequency,
            relevance,
        }
    }

    #[must_use]
    pub fn with_importance(mut self, weight: f64) -> Self {
        self.importance = weight;
        self
    }

    #[must_use]
    pub fn with_frequency(mut self, weight: f64) -> Self {
        self.frequency = weight;
        self
    }

    #[must_use]
    pub fn with_relevance(mut self, weight: f64) -> Self {
        self.relevance = weight;
        self
    }

    /// Reject weights that are zero, negative, NaN, or infinite.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("importance", self.importance),
            ("frequency", self.frequency),
            ("relevance", self.relevance),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CentralityError::InvalidWeight { name, value });
            }
        }
        Ok(())
    }
}
