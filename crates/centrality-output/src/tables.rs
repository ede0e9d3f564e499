//! Wide task tables.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use centrality_common::format_optional;
use centrality_model::{AVERAGE_FREQUENCY_COLUMN, KEY_COLUMNS, PROPORTION_COLUMNS, TaskRow, WideColumn};

use crate::common::csv_writer;

/// Which snapshot of the wide table is being written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStage {
    /// Straight out of the reshaper: raw shares and ratings.
    Reshaped,
    /// After normalization, with `Average Frequency`.
    Normalized,
}

impl TableStage {
    pub fn file_name(self) -> &'static str {
        match self {
            TableStage::Reshaped => "pivoted_df.csv",
            TableStage::Normalized => "normalised_df.csv",
        }
    }

    fn has_average_frequency(self) -> bool {
        matches!(self, TableStage::Normalized)
    }
}

/// Header of a wide table at `stage`.
pub fn task_headers(stage: TableStage) -> Vec<String> {
    let mut headers: Vec<String> = KEY_COLUMNS.iter().map(|name| (*name).to_string()).collect();
    headers.extend(WideColumn::all().into_iter().map(WideColumn::name));
    if stage.has_average_frequency() {
        headers.push(AVERAGE_FREQUENCY_COLUMN.to_string());
    }
    headers
}

/// Normalized columns followed by the ten proportion columns.
pub fn proportion_headers() -> Vec<String> {
    let mut headers = task_headers(TableStage::Normalized);
    headers.extend(PROPORTION_COLUMNS.iter().map(|name| (*name).to_string()));
    headers
}

/// Cells of one task row, aligned with [`task_headers`].
pub fn task_record(row: &TaskRow, stage: TableStage) -> Vec<String> {
    let key = &row.key;
    let mut record = vec![
        key.occupation_code.clone(),
        key.occupation_title.clone(),
        key.task_id.to_string(),
        key.task.clone(),
    ];
    record.extend(row.rating_values().into_iter().map(format_optional));
    if stage.has_average_frequency() {
        record.push(format_optional(row.average_frequency));
    }
    record
}

/// Write the whole wide table to `path`, replacing any existing file.
pub fn write_task_table(path: &Path, rows: &[TaskRow], stage: TableStage) -> Result<()> {
    let mut writer = csv_writer(path)?;
    writer
        .write_record(task_headers(stage))
        .with_context(|| format!("write header to {}", path.display()))?;
    for row in rows {
        writer
            .write_record(task_record(row, stage))
            .with_context(|| format!("write row to {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    debug!(path = %path.display(), rows = rows.len(), ?stage, "wrote task table");
    Ok(())
}
