//! Long-to-wide reshaping of rating records.
//!
//! Records are grouped by task identity and written into the fixed
//! [`WideColumn`] schema by (scale, category) lookup. A missing category is
//! the "no category" slot used by importance and relevance ratings, so those
//! records group consistently with frequency ones.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, trace};

use centrality_model::{CentralityError, RatingRecord, Result, TaskKey, TaskRow, WideColumn};

/// Counts from one reshape run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReshapeReport {
    pub records: usize,
    pub tasks: usize,
    /// Records dropped because an earlier record filled the same cell.
    pub duplicates: usize,
}

/// Output of [`reshape`].
#[derive(Debug, Clone, PartialEq)]
pub struct Reshaped {
    /// Sorted by occupation code, title, task id, then task text.
    pub rows: Vec<TaskRow>,
    pub report: ReshapeReport,
}

/// Pivot long-format ratings into one row per occupation/task.
///
/// When several records target the same cell, the first one wins and the
/// rest are counted as duplicates. Every column of the wide schema must be
/// filled for at least one task; otherwise the first absent column is
/// reported as [`CentralityError::MissingColumn`]. Cells never rated for a
/// particular task stay `None`.
pub fn reshape(records: &[RatingRecord]) -> Result<Reshaped> {
    let mut rows: BTreeMap<&TaskKey, TaskRow> = BTreeMap::new();
    let mut observed: BTreeSet<WideColumn> = BTreeSet::new();
    let mut duplicates = 0usize;

    for record in records {
        let column = column_for(record)?;
        let row = rows
            .entry(&record.key)
            .or_insert_with(|| TaskRow::new(record.key.clone()));
        if row.set_first(column, record.data_value) {
            observed.insert(column);
        } else {
            duplicates += 1;
            trace!(
                occupation_code = %record.key.occupation_code,
                task_id = %record.key.task_id,
                column = %column,
                "duplicate rating ignored"
            );
        }
    }

    if let Some(missing) = WideColumn::all()
        .into_iter()
        .find(|column| !observed.contains(column))
    {
        return Err(CentralityError::MissingColumn(missing.name()));
    }

    let rows: Vec<TaskRow> = rows.into_values().collect();
    let report = ReshapeReport {
        records: records.len(),
        tasks: rows.len(),
        duplicates,
    };
    debug!(
        records = report.records,
        tasks = report.tasks,
        duplicates = report.duplicates,
        "reshaped ratings"
    );
    Ok(Reshaped { rows, report })
}

fn column_for(record: &RatingRecord) -> Result<WideColumn> {
    WideColumn::from_slot(record.scale, record.category).ok_or_else(|| match record.category {
        None => CentralityError::MissingCategory {
            task_id: record.key.task_id.to_string(),
        },
        Some(category) => CentralityError::UnexpectedCategory {
            scale: record.scale.to_string(),
            category: category.to_string(),
        },
    })
}
