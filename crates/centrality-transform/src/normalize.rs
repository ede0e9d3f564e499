//! Dataset-wide normalization of the wide table.
//!
//! Importance and relevance are min-max scaled to [0, 1] across all
//! occupations. Frequency category shares are converted to day-equivalent
//! contributions, summed into `Average Frequency`, and that sum is min-max
//! scaled the same way.

use tracing::{debug, warn};

use centrality_common::available;
use centrality_model::{AVERAGE_FREQUENCY_COLUMN, FrequencyCategory, TaskRow, WideColumn};

/// Observed bounds of a column before scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMaxRange {
    pub min: f64,
    pub max: f64,
}

impl MinMaxRange {
    /// Bounds over available values; `None` when nothing is available.
    pub fn observe(values: impl IntoIterator<Item = Option<f64>>) -> Option<Self> {
        available(values).fold(None, |range, value| {
            Some(match range {
                None => Self {
                    min: value,
                    max: value,
                },
                Some(Self { min, max }) => Self {
                    min: min.min(value),
                    max: max.max(value),
                },
            })
        })
    }

    /// True when every available value is equal.
    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }

    /// `(value - min) / (max - min)`, or NaN when the range has no spread.
    pub fn scale(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            return f64::NAN;
        }
        (value - self.min) / (self.max - self.min)
    }
}

/// Range of one scaled column; `range` is `None` when it held no values.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledColumn {
    pub column: String,
    pub range: Option<MinMaxRange>,
}

impl ScaledColumn {
    /// Scaling produced NaN for every present value.
    pub fn is_degenerate(&self) -> bool {
        self.range.is_none_or(|range| range.is_degenerate())
    }
}

/// What [`normalize`] did to each scaled column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizeReport {
    pub columns: Vec<ScaledColumn>,
}

impl NormalizeReport {
    pub fn degenerate_columns(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .filter(|column| column.is_degenerate())
            .map(|column| column.column.as_str())
    }
}

/// Min-max scale a column in place.
///
/// Bounds come from the available values only. `None` stays `None`; when the
/// column has no spread every present value becomes NaN.
pub fn min_max_scale<'a>(slots: impl IntoIterator<Item = &'a mut Option<f64>>) -> Option<MinMaxRange> {
    let slots: Vec<&mut Option<f64>> = slots.into_iter().collect();
    let range = MinMaxRange::observe(slots.iter().map(|slot| **slot));
    for slot in slots {
        if let Some(value) = slot.as_mut() {
            *value = match range {
                Some(range) => range.scale(*value),
                None => f64::NAN,
            };
        }
    }
    range
}

/// Sum of the seven frequency contributions; `None` if any category is missing.
pub fn average_frequency(row: &TaskRow) -> Option<f64> {
    row.frequency.iter().copied().sum()
}

/// Normalize every row in place.
pub fn normalize(rows: &mut [TaskRow]) -> NormalizeReport {
    let mut report = NormalizeReport::default();

    for column in WideColumn::all()
        .into_iter()
        .filter(|column| column.is_min_max_scaled())
    {
        let range = min_max_scale(rows.iter_mut().map(|row| row.slot_mut(column)));
        report.columns.push(scaled(column.name(), range));
    }

    for row in rows.iter_mut() {
        for category in FrequencyCategory::all() {
            if let Some(share) = row.frequency[category.index()].as_mut() {
                *share *= category.day_multiplier();
            }
        }
        row.average_frequency = average_frequency(row);
    }

    let range = min_max_scale(rows.iter_mut().map(|row| &mut row.average_frequency));
    report
        .columns
        .push(scaled(AVERAGE_FREQUENCY_COLUMN.to_string(), range));

    for column in report.degenerate_columns() {
        warn!(column, "column has no spread, scaled values are NaN");
    }
    report
}

fn scaled(column: String, range: Option<MinMaxRange>) -> ScaledColumn {
    if let Some(range) = range {
        debug!(column = %column, min = range.min, max = range.max, "min-max scaled");
    }
    ScaledColumn { column, range }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_to_unit_interval() {
        let mut values = vec![Some(1.0), Some(3.0), None, Some(5.0)];
        let range = min_max_scale(values.iter_mut()).unwrap();
        assert_eq!(range, MinMaxRange { min: 1.0, max: 5.0 });
        assert_eq!(values, vec![Some(0.0), Some(0.5), None, Some(1.0)]);
    }

    #[test]
    fn zero_spread_yields_nan() {
        let mut values = vec![Some(2.0), Some(2.0), None];
        let range = min_max_scale(values.iter_mut()).unwrap();
        assert!(range.is_degenerate());
        assert!(values[0].unwrap().is_nan());
        assert!(values[1].unwrap().is_nan());
        assert_eq!(values[2], None);
    }

    #[test]
    fn nan_inputs_do_not_set_bounds() {
        let mut values = vec![Some(f64::NAN), Some(0.0), Some(4.0)];
        min_max_scale(values.iter_mut());
        assert!(values[0].unwrap().is_nan());
        assert_eq!(values[1], Some(0.0));
        assert_eq!(values[2], Some(1.0));
    }

    #[test]
    fn empty_column_has_no_range() {
        let mut values: Vec<Option<f64>> = vec![None, None];
        assert_eq!(min_max_scale(values.iter_mut()), None);
        assert_eq!(values, vec![None, None]);
    }
}
