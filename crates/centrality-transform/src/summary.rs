//! Column means of the normalized and annotated tables.

use polars::prelude::{DataFrame, PolarsResult};

use centrality_common::{column_mean, optional_f64_column};
use centrality_model::{AVERAGE_FREQUENCY_COLUMN, ProportionRow, TaskRow};

const NORMALIZED_METRICS: [&str; 3] = ["Importance", "Relevance", AVERAGE_FREQUENCY_COLUMN];

const PROPORTION_METRICS: [&str; 4] = [
    "Importance Proportion",
    "Frequency Proportion",
    "Relevance Proportion",
    "Weighted Sum Proportion",
];

/// Mean of one metric column. Missing and NaN values are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSummary {
    pub column: &'static str,
    pub mean: Option<f64>,
}

/// Column-oriented buffer of metric values.
///
/// Only the handful of summarized metrics is retained, so the proportion
/// stage can stream batches to its sink and still report means at the end.
#[derive(Debug, Clone)]
pub struct MetricColumns {
    names: &'static [&'static str],
    values: Vec<Vec<Option<f64>>>,
}

impl MetricColumns {
    fn new(names: &'static [&'static str]) -> Self {
        Self {
            names,
            values: vec![Vec::new(); names.len()],
        }
    }

    /// `Importance`, `Relevance`, and `Average Frequency` of a normalized table.
    pub fn from_normalized(rows: &[TaskRow]) -> Self {
        let mut columns = Self::new(&NORMALIZED_METRICS);
        for row in rows {
            columns.push(&[row.importance, row.relevance, row.average_frequency]);
        }
        columns
    }

    /// Empty buffer for the metric and weighted-sum proportions.
    pub fn proportions() -> Self {
        Self::new(&PROPORTION_METRICS)
    }

    pub fn push_proportions(&mut self, rows: &[ProportionRow]) {
        for row in rows {
            let p = &row.proportions;
            self.push(&[
                p.importance_proportion,
                p.frequency_proportion,
                p.relevance_proportion,
                p.weighted_sum_proportion,
            ]);
        }
    }

    fn push(&mut self, row: &[Option<f64>]) {
        for (column, value) in self.values.iter_mut().zip(row) {
            column.push(*value);
        }
    }

    pub fn len(&self) -> usize {
        self.values.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        let columns = self
            .names
            .iter()
            .zip(&self.values)
            .map(|(name, values)| optional_f64_column(name, values.iter().copied()))
            .collect();
        DataFrame::new(columns)
    }

    pub fn summarize(&self) -> PolarsResult<Vec<MetricSummary>> {
        let df = self.to_frame()?;
        self.names
            .iter()
            .map(|&name| {
                Ok(MetricSummary {
                    column: name,
                    mean: column_mean(&df, name)?,
                })
            })
            .collect()
    }
}
