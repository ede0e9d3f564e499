//! Per-occupation proportions and composite scores.
//!
//! Each occupation is processed independently. Within a group, every metric
//! is expressed as the task's share of the group total, the three shares are
//! summed (plain and weighted), and each sum is expressed as a share of the
//! group's total sum.
//!
//! Row arithmetic propagates missing values; group totals skip missing and
//! NaN entries. A zero total makes the corresponding shares NaN.

use std::collections::HashMap;

use tracing::debug;

use centrality_common::available;
use centrality_model::{ProportionRow, Result, TaskProportions, TaskRow, Weights};

/// Rows sharing one occupation code, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct OccupationGroup {
    pub occupation_code: String,
    pub rows: Vec<TaskRow>,
}

/// Annotated rows of one occupation, ready for the sink.
#[derive(Debug, Clone, PartialEq)]
pub struct OccupationBatch {
    pub occupation_code: String,
    pub rows: Vec<ProportionRow>,
}

/// Partition rows by occupation code.
///
/// Groups come out in the order their first task appears; rows keep their
/// relative order inside a group.
pub fn occupation_groups(rows: Vec<TaskRow>) -> Vec<OccupationGroup> {
    let mut groups: Vec<OccupationGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for row in rows {
        let slot = *index
            .entry(row.occupation_code().to_string())
            .or_insert_with(|| {
                groups.push(OccupationGroup {
                    occupation_code: row.occupation_code().to_string(),
                    rows: Vec::new(),
                });
                groups.len() - 1
            });
        groups[slot].rows.push(row);
    }
    groups
}

/// Computes proportions with a fixed set of metric weights.
#[derive(Debug, Clone, Copy)]
pub struct ProportionCalculator {
    weights: Weights,
}

impl Default for ProportionCalculator {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
        }
    }
}

impl ProportionCalculator {
    /// Fails if any weight is not a positive finite number.
    pub fn new(weights: Weights) -> Result<Self> {
        weights.validate()?;
        Ok(Self { weights })
    }

    /// Lazily annotate each occupation group of a normalized table.
    pub fn batches(self, rows: Vec<TaskRow>) -> impl Iterator<Item = OccupationBatch> {
        occupation_groups(rows)
            .into_iter()
            .map(move |group| self.annotate(group))
    }

    /// Annotate one occupation group.
    pub fn annotate(&self, group: OccupationGroup) -> OccupationBatch {
        let OccupationGroup {
            occupation_code,
            rows,
        } = group;

        let total_importance = group_total(rows.iter().map(|row| row.importance));
        let freq_score_total = group_total(rows.iter().map(|row| row.average_frequency));
        let total_relevance = group_total(rows.iter().map(|row| row.relevance));

        let mut proportions: Vec<TaskProportions> = rows
            .iter()
            .map(|row| {
                let importance_proportion = share(row.importance, total_importance);
                let frequency_proportion = share(row.average_frequency, freq_score_total);
                let relevance_proportion = share(row.relevance, total_relevance);
                TaskProportions {
                    total_importance: Some(total_importance),
                    importance_proportion,
                    freq_score_total: Some(freq_score_total),
                    frequency_proportion,
                    total_relevance: Some(total_relevance),
                    relevance_proportion,
                    unweighted_sum: combine(
                        [importance_proportion, frequency_proportion, relevance_proportion],
                        [1.0, 1.0, 1.0],
                    ),
                    weighted_sum: combine(
                        [importance_proportion, frequency_proportion, relevance_proportion],
                        [
                            self.weights.importance,
                            self.weights.frequency,
                            self.weights.relevance,
                        ],
                    ),
                    ..TaskProportions::default()
                }
            })
            .collect();

        let total_sum = group_total(proportions.iter().map(|p| p.unweighted_sum));
        let total_weighted_sum = group_total(proportions.iter().map(|p| p.weighted_sum));
        for p in &mut proportions {
            p.sum_proportion = share(p.unweighted_sum, total_sum);
            p.weighted_sum_proportion = share(p.weighted_sum, total_weighted_sum);
        }

        debug!(
            occupation_code = %occupation_code,
            tasks = rows.len(),
            total_importance,
            freq_score_total,
            total_relevance,
            "occupation proportions"
        );

        OccupationBatch {
            occupation_code,
            rows: rows
                .into_iter()
                .zip(proportions)
                .map(|(task, proportions)| ProportionRow { task, proportions })
                .collect(),
        }
    }
}

/// Sum of the available values; zero when none are available.
fn group_total(values: impl IntoIterator<Item = Option<f64>>) -> f64 {
    available(values).sum()
}

/// `value / total`, NaN when the total is zero.
fn share(value: Option<f64>, total: f64) -> Option<f64> {
    value.map(|value| if total == 0.0 { f64::NAN } else { value / total })
}

/// Weighted sum of the three metric shares; missing if any share is.
fn combine(shares: [Option<f64>; 3], weights: [f64; 3]) -> Option<f64> {
    let [a, b, c] = shares;
    Some(a? * weights[0] + b? * weights[1] + c? * weights[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_of_zero_total_is_nan() {
        assert!(share(Some(0.0), 0.0).unwrap().is_nan());
        assert_eq!(share(None, 0.0), None);
        assert_eq!(share(Some(0.25), 1.0), Some(0.25));
    }

    #[test]
    fn combine_propagates_missing_shares() {
        assert_eq!(combine([Some(0.5), None, Some(0.5)], [1.0, 1.0, 1.0]), None);
        assert_eq!(
            combine([Some(0.5), Some(0.25), Some(0.25)], [2.0, 1.0, 1.0]),
            Some(1.5)
        );
    }

    #[test]
    fn group_total_skips_missing_and_nan() {
        assert_eq!(group_total([Some(1.0), None, Some(f64::NAN), Some(2.0)]), 3.0);
        assert_eq!(group_total([None, None]), 0.0);
    }
}
