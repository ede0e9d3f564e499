//! Wide-format task rows and their explicit column schema.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::TaskKey;
use crate::scale::{FrequencyCategory, Scale};

/// Identity columns, in output order.
pub const KEY_COLUMNS: [&str; 4] = ["O*NET-SOC Code", "Title", "Task ID", "Task"];

/// Column added by the normalizer.
pub const AVERAGE_FREQUENCY_COLUMN: &str = "Average Frequency";

const FREQUENCY_SLOTS: usize = FrequencyCategory::MAX as usize;

/// A rating column of the wide table.
///
/// The set is fixed: each column is filled from exactly one
/// (scale, category) slot of the long-format input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WideColumn {
    Frequency(FrequencyCategory),
    Importance,
    Relevance,
}

impl WideColumn {
    /// All rating columns in output order.
    pub fn all() -> Vec<WideColumn> {
        FrequencyCategory::all()
            .map(WideColumn::Frequency)
            .chain([WideColumn::Importance, WideColumn::Relevance])
            .collect()
    }

    /// Column for a long-format (scale, category) slot.
    pub fn from_slot(scale: Scale, category: Option<FrequencyCategory>) -> Option<Self> {
        match (scale, category) {
            (Scale::Frequency, Some(category)) => Some(Self::Frequency(category)),
            (Scale::Importance, None) => Some(Self::Importance),
            (Scale::Relevance, None) => Some(Self::Relevance),
            _ => None,
        }
    }

    pub fn scale(self) -> Scale {
        match self {
            Self::Frequency(_) => Scale::Frequency,
            Self::Importance => Scale::Importance,
            Self::Relevance => Scale::Relevance,
        }
    }

    pub fn category(self) -> Option<FrequencyCategory> {
        match self {
            Self::Frequency(category) => Some(category),
            _ => None,
        }
    }

    pub fn name(self) -> String {
        match self {
            Self::Frequency(category) => format!("Frequency_{category}"),
            Self::Importance => "Importance".to_string(),
            Self::Relevance => "Relevance".to_string(),
        }
    }

    /// Columns rescaled to [0, 1] directly: any column whose name mentions
    /// importance or relevance.
    pub fn is_min_max_scaled(self) -> bool {
        let name = self.name();
        name.contains("Importance") || name.contains("Relevance")
    }
}

impl fmt::Display for WideColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// One occupation/task row of the wide table.
///
/// `None` is a missing value (no respondents, or a null propagated from one).
/// `Some(NaN)` marks a degenerate computation such as scaling a column with
/// no spread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRow {
    pub key: TaskKey,
    /// Category response proportions; after normalization, day-equivalent contributions.
    pub frequency: [Option<f64>; FREQUENCY_SLOTS],
    pub importance: Option<f64>,
    pub relevance: Option<f64>,
    /// Set by the normalizer.
    pub average_frequency: Option<f64>,
}

impl TaskRow {
    pub fn new(key: TaskKey) -> Self {
        Self {
            key,
            frequency: [None; FREQUENCY_SLOTS],
            importance: None,
            relevance: None,
            average_frequency: None,
        }
    }

    pub fn occupation_code(&self) -> &str {
        &self.key.occupation_code
    }

    pub fn get(&self, column: WideColumn) -> Option<f64> {
        match column {
            WideColumn::Frequency(category) => self.frequency[category.index()],
            WideColumn::Importance => self.importance,
            WideColumn::Relevance => self.relevance,
        }
    }

    pub fn slot_mut(&mut self, column: WideColumn) -> &mut Option<f64> {
        match column {
            WideColumn::Frequency(category) => &mut self.frequency[category.index()],
            WideColumn::Importance => &mut self.importance,
            WideColumn::Relevance => &mut self.relevance,
        }
    }

    /// Fill a column unless it already holds a value.
    ///
    /// Returns `false` when the slot was taken; the earlier value is kept.
    pub fn set_first(&mut self, column: WideColumn, value: f64) -> bool {
        let slot = self.slot_mut(column);
        if slot.is_some() {
            return false;
        }
        *slot = Some(value);
        true
    }

    /// Rating values in [`WideColumn::all`] order.
    pub fn rating_values(&self) -> Vec<Option<f64>> {
        WideColumn::all()
            .into_iter()
            .map(|column| self.get(column))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::TaskId;

    fn row() -> TaskRow {
        TaskRow::new(TaskKey::new(
            "11-1011.00",
            "Chief Executives",
            TaskId::new("8823"),
            "Direct or coordinate activities.",
        ))
    }

    #[test]
    fn column_names_follow_fixed_schema() {
        let names: Vec<String> = WideColumn::all().into_iter().map(WideColumn::name).collect();
        assert_eq!(
            names,
            vec![
                "Frequency_1",
                "Frequency_2",
                "Frequency_3",
                "Frequency_4",
                "Frequency_5",
                "Frequency_6",
                "Frequency_7",
                "Importance",
                "Relevance",
            ]
        );
    }

    #[test]
    fn only_importance_and_relevance_are_min_max_scaled() {
        let scaled: Vec<WideColumn> = WideColumn::all()
            .into_iter()
            .filter(|column| column.is_min_max_scaled())
            .collect();
        assert_eq!(scaled, vec![WideColumn::Importance, WideColumn::Relevance]);
    }

    #[test]
    fn slots_map_to_columns() {
        let five = FrequencyCategory::new(5).unwrap();
        assert_eq!(
            WideColumn::from_slot(Scale::Frequency, Some(five)),
            Some(WideColumn::Frequency(five))
        );
        assert_eq!(
            WideColumn::from_slot(Scale::Importance, None),
            Some(WideColumn::Importance)
        );
        assert_eq!(WideColumn::from_slot(Scale::Frequency, None), None);
        assert_eq!(WideColumn::from_slot(Scale::Relevance, Some(five)), None);
    }

    #[test]
    fn set_first_keeps_earlier_value() {
        let mut row = row();
        assert!(row.set_first(WideColumn::Importance, 4.0));
        assert!(!row.set_first(WideColumn::Importance, 7.0));
        assert_eq!(row.importance, Some(4.0));
    }
}
