//! Polars helpers for column statistics.
//!
//! Rows are kept as typed structs through the pipeline; these helpers turn a
//! column of optional floats into a Polars column so aggregate statistics use
//! Polars null semantics.

use polars::prelude::{ChunkAgg, Column, DataFrame, IntoColumn, NamedFrom, PolarsResult, Series};

use crate::numeric::is_available;

/// Builds a `Float64` column, mapping missing and NaN entries to null.
pub fn optional_f64_column(name: &str, values: impl IntoIterator<Item = Option<f64>>) -> Column {
    let values: Vec<Option<f64>> = values
        .into_iter()
        .map(|value| if is_available(value) { value } else { None })
        .collect();
    Series::new(name.into(), values).into_column()
}

/// Mean of a `Float64` column, ignoring nulls. `None` when the column has no
/// values; an error when it is absent or not `Float64`.
pub fn column_mean(df: &DataFrame, name: &str) -> PolarsResult<Option<f64>> {
    let column = df.column(name)?;
    Ok(column.f64()?.mean())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_mean_ignores_missing_values() {
        let column = optional_f64_column(
            "Importance",
            vec![Some(1.0), None, Some(f64::NAN), Some(0.0)],
        );
        let df = DataFrame::new(vec![column]).unwrap();
        assert_eq!(column_mean(&df, "Importance").unwrap(), Some(0.5));
    }

    #[test]
    fn test_column_mean_of_empty_column() {
        let column = optional_f64_column("Relevance", vec![None, None]);
        let df = DataFrame::new(vec![column]).unwrap();
        assert_eq!(column_mean(&df, "Relevance").unwrap(), None);
    }

    #[test]
    fn test_column_mean_missing_column() {
        let column = optional_f64_column("Relevance", vec![Some(1.0)]);
        let df = DataFrame::new(vec![column]).unwrap();
        assert!(column_mean(&df, "Importance").is_err());
    }
}
