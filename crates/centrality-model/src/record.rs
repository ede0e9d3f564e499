//! Long-format rating records and task identity.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scale::{FrequencyCategory, Scale};

/// Task identifier as it appears in the source table.
///
/// Integer identifiers sort numerically (`"9"` before `"10"`) and ahead of
/// any non-integer identifier; the rest sort lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(value: impl Into<String>) -> Self {
        let value: String = value.into();
        Self(normalize_task_id(&value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn numeric(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

/// Spreadsheet exports store integer ids as floats (`8823.0`).
fn normalize_task_id(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed.strip_suffix(".0") {
        Some(stripped) if !stripped.is_empty() && stripped.bytes().all(|b| b.is_ascii_digit()) => {
            stripped.to_string()
        }
        _ => trimmed.to_string(),
    }
}

impl Ord for TaskId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.numeric(), other.numeric()) {
            (Some(left), Some(right)) => left.cmp(&right).then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for TaskId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity of one wide-format row.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskKey {
    pub occupation_code: String,
    pub occupation_title: String,
    pub task_id: TaskId,
    pub task: String,
}

impl TaskKey {
    pub fn new(
        occupation_code: impl Into<String>,
        occupation_title: impl Into<String>,
        task_id: TaskId,
        task: impl Into<String>,
    ) -> Self {
        Self {
            occupation_code: occupation_code.into(),
            occupation_title: occupation_title.into(),
            task_id,
            task: task.into(),
        }
    }
}

/// One long-format survey rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingRecord {
    pub key: TaskKey,
    pub scale: Scale,
    /// Present for frequency ratings only.
    pub category: Option<FrequencyCategory>,
    pub data_value: f64,
}

impl RatingRecord {
    pub fn new(
        key: TaskKey,
        scale: Scale,
        category: Option<FrequencyCategory>,
        data_value: f64,
    ) -> Self {
        Self {
            key,
            scale,
            category,
            data_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_ids_sort_numerically() {
        let mut ids = vec![TaskId::new("10"), TaskId::new("9"), TaskId::new("100")];
        ids.sort();
        let sorted: Vec<&str> = ids.iter().map(TaskId::as_str).collect();
        assert_eq!(sorted, vec!["9", "10", "100"]);
    }

    #[test]
    fn task_ids_drop_float_suffix() {
        assert_eq!(TaskId::new("8823.0").as_str(), "8823");
        assert_eq!(TaskId::new(" 8823 ").as_str(), "8823");
        assert_eq!(TaskId::new("T.0").as_str(), "T.0");
    }

    #[test]
    fn integer_task_ids_sort_before_text() {
        assert!(TaskId::new("A1") > TaskId::new("12"));
        assert!(TaskId::new("1a") > TaskId::new("10"));
        assert!(TaskId::new("1a") > TaskId::new("9"));
    }
}
