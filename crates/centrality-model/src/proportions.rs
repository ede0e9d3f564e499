//! Per-occupation proportion fields.

use serde::{Deserialize, Serialize};

use crate::task::TaskRow;

/// Derived column names, in output order.
pub const PROPORTION_COLUMNS: [&str; 10] = [
    "Total Importance",
    "Importance Proportion",
    "Freq Score Total",
    "Frequency Proportion",
    "Total Relevance",
    "Relevance Proportion",
    "Unweighted Sum",
    "Sum Proportion",
    "Weighted Sum",
    "Weighted Sum Proportion",
];

/// Proportion fields for one task, scoped to its occupation group.
///
/// Totals are group-level values repeated on every row of the group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskProportions {
    pub total_importance: Option<f64>,
    pub importance_proportion: Option<f64>,
    pub freq_score_total: Option<f64>,
    pub frequency_proportion: Option<f64>,
    pub total_relevance: Option<f64>,
    pub relevance_proportion: Option<f64>,
    pub unweighted_sum: Option<f64>,
    pub sum_proportion: Option<f64>,
    pub weighted_sum: Option<f64>,
    pub weighted_sum_proportion: Option<f64>,
}

impl TaskProportions {
    /// Values in [`PROPORTION_COLUMNS`] order.
    pub fn values(&self) -> [Option<f64>; 10] {
        [
            self.total_importance,
            self.importance_proportion,
            self.freq_score_total,
            self.frequency_proportion,
            self.total_relevance,
            self.relevance_proportion,
            self.unweighted_sum,
            self.sum_proportion,
            self.weighted_sum,
            self.weighted_sum_proportion,
        ]
    }
}

/// A normalized task row annotated with its proportions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProportionRow {
    pub task: TaskRow,
    pub proportions: TaskProportions,
}

impl ProportionRow {
    pub fn occupation_code(&self) -> &str {
        self.task.occupation_code()
    }
}
