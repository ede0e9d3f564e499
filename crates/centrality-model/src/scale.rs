//! Rating scales and frequency response bands.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CentralityError, Result};

/// Category values that stand for "no category" in the source export.
const NULL_TOKENS: [&str; 4] = ["", "n/a", "na", "nan"];

/// Rating dimension a survey value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Scale {
    Frequency,
    Importance,
    Relevance,
}

impl Scale {
    pub const ALL: [Scale; 3] = [Scale::Frequency, Scale::Importance, Scale::Relevance];

    /// Scale name exactly as it appears in the source table.
    pub fn source_name(self) -> &'static str {
        match self {
            Self::Frequency => "Frequency of Task (Categories 1-7)",
            Self::Importance => "Importance",
            Self::Relevance => "Relevance of Task",
        }
    }

    /// Parse a source scale name. Surrounding whitespace is ignored, nothing else is.
    pub fn from_source_name(name: &str) -> Result<Self> {
        let trimmed = name.trim();
        Self::ALL
            .into_iter()
            .find(|scale| scale.source_name() == trimmed)
            .ok_or_else(|| CentralityError::UnknownScale(trimmed.to_string()))
    }

    /// Whether ratings on this scale are split into response categories.
    pub fn is_categorical(self) -> bool {
        matches!(self, Self::Frequency)
    }

    /// Validate the raw category cell for this scale.
    ///
    /// Frequency ratings require a category in 1..=7; the other scales must
    /// carry the "no category" placeholder.
    pub fn parse_category(self, raw: &str, task_id: &str) -> Result<Option<FrequencyCategory>> {
        let absent = is_null_token(raw);
        match (self.is_categorical(), absent) {
            (true, true) => Err(CentralityError::MissingCategory {
                task_id: task_id.to_string(),
            }),
            (true, false) => FrequencyCategory::parse(raw).map(Some),
            (false, true) => Ok(None),
            (false, false) => Err(CentralityError::UnexpectedCategory {
                scale: self.source_name().to_string(),
                category: raw.trim().to_string(),
            }),
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.source_name())
    }
}

/// Returns true for cells the source uses for "no value": empty, `n/a`, `NA`, `NaN`.
///
/// In the category column this is the "no category" placeholder; in the data
/// value column it marks a rating that was never collected.
pub fn is_null_token(raw: &str) -> bool {
    let trimmed = raw.trim();
    NULL_TOKENS
        .iter()
        .any(|token| trimmed.eq_ignore_ascii_case(token))
}

/// Frequency response band, 1 (yearly or less) through 7 (hourly or more).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FrequencyCategory(u8);

impl FrequencyCategory {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 7;

    pub fn new(value: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(CentralityError::InvalidCategory(value.to_string()))
        }
    }

    /// Parse a category cell. Spreadsheet exports write integers as `5.0`,
    /// so integral floats are accepted.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let invalid = || CentralityError::InvalidCategory(trimmed.to_string());
        let value: f64 = trimmed.parse().map_err(|_| invalid())?;
        if value.fract() != 0.0 || value < f64::from(Self::MIN) || value > f64::from(Self::MAX) {
            return Err(invalid());
        }
        Ok(Self(value as u8))
    }

    pub fn all() -> impl Iterator<Item = FrequencyCategory> {
        (Self::MIN..=Self::MAX).map(FrequencyCategory)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Zero-based slot in a seven-element array.
    pub fn index(self) -> usize {
        usize::from(self.0 - Self::MIN)
    }

    /// Expected occurrences per working day for this response band.
    ///
    /// Bands 1-4 are spread over a 220-day working year (1/year, ~6/year,
    /// monthly, weekly); band 5 is once a day and bands 6-7 several times a day.
    pub fn day_multiplier(self) -> f64 {
        match self.0 {
            1 => 1.0 / 220.0,
            2 => 6.0 / 220.0,
            3 => 1.0 / 12.0,
            4 => 1.0 / 7.0,
            5 => 1.0,
            6 => 4.0,
            _ => 8.0,
        }
    }
}

impl fmt::Display for FrequencyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
