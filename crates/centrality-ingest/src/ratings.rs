//! Long-format rating table reader.
//!
//! The source table has one row per occupation/task/scale/category. Extra
//! columns (scale ids, sample sizes, standard errors) are ignored; the seven
//! columns in [`SourceColumn`] are required.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use centrality_common::parse_f64;
use centrality_model::{RatingRecord, Scale, TaskId, TaskKey, is_null_token};

use crate::error::{IngestError, Result};

/// Required columns of the long-format table, in [`SourceColumn::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceColumn {
    OccupationCode,
    OccupationTitle,
    TaskId,
    Task,
    ScaleName,
    Category,
    DataValue,
}

impl SourceColumn {
    pub const ALL: [SourceColumn; 7] = [
        SourceColumn::OccupationCode,
        SourceColumn::OccupationTitle,
        SourceColumn::TaskId,
        SourceColumn::Task,
        SourceColumn::ScaleName,
        SourceColumn::Category,
        SourceColumn::DataValue,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Self::OccupationCode => "O*NET-SOC Code",
            Self::OccupationTitle => "Title",
            Self::TaskId => "Task ID",
            Self::Task => "Task",
            Self::ScaleName => "Scale Name",
            Self::Category => "Category",
            Self::DataValue => "Data Value",
        }
    }
}

/// Options for reading the ratings table.
#[derive(Debug, Clone, Default)]
pub struct IngestOptions {
    /// Field delimiter. Inferred from the file extension when unset.
    pub delimiter: Option<u8>,
}

impl IngestOptions {
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }
}

/// Tab for `.txt`/`.tsv` exports, comma otherwise.
pub fn delimiter_for_path(path: &Path) -> u8 {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("txt" | "tsv" | "tab") => b'\t',
        _ => b',',
    }
}

/// Read every rating record from a delimited file.
pub fn read_rating_records(path: &Path, options: &IngestOptions) -> Result<Vec<RatingRecord>> {
    let file = File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let delimiter = options
        .delimiter
        .unwrap_or_else(|| delimiter_for_path(path));
    read_rating_records_from_reader(file, delimiter, &path.display().to_string())
}

/// Read rating records from any reader. `source_name` only labels errors.
pub fn read_rating_records_from_reader<R: Read>(
    reader: R,
    delimiter: u8,
    source_name: &str,
) -> Result<Vec<RatingRecord>> {
    let csv_error = |source: csv::Error| IngestError::Csv {
        source_name: source_name.to_string(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(normalize_header)
        .collect();
    let layout = ColumnLayout::resolve(&headers, source_name)?;

    let mut records = Vec::new();
    let mut skipped = 0usize;
    let mut missing_values = 0usize;
    for row in reader.records() {
        let row = row.map_err(csv_error)?;
        if row.iter().all(|value| value.trim().is_empty()) {
            skipped += 1;
            continue;
        }
        match layout.parse_row(&row)? {
            Some(record) => records.push(record),
            None => missing_values += 1,
        }
    }
    debug!(
        source = source_name,
        records = records.len(),
        blank_rows = skipped,
        missing_values,
        "ratings read"
    );
    Ok(records)
}

fn normalize_header(raw: &str) -> String {
    raw.trim()
        .trim_matches('\u{feff}')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn normalize_cell(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}')
}

/// Positions of the required columns in the header row.
struct ColumnLayout {
    indices: [usize; SourceColumn::ALL.len()],
}

impl ColumnLayout {
    fn resolve(headers: &[String], source_name: &str) -> Result<Self> {
        let mut indices = [0usize; SourceColumn::ALL.len()];
        for column in SourceColumn::ALL {
            indices[column as usize] = headers
                .iter()
                .position(|header| header.eq_ignore_ascii_case(column.header()))
                .ok_or_else(|| IngestError::MissingColumn {
                    column: column.header(),
                    source_name: source_name.to_string(),
                })?;
        }
        Ok(Self { indices })
    }

    fn cell<'r>(&self, row: &'r StringRecord, column: SourceColumn) -> &'r str {
        row.get(self.indices[column as usize])
            .map(normalize_cell)
            .unwrap_or("")
    }

    fn required<'r>(
        &self,
        row: &'r StringRecord,
        column: SourceColumn,
        line: u64,
    ) -> Result<&'r str> {
        let value = self.cell(row, column);
        if value.is_empty() {
            return Err(IngestError::InvalidValue {
                column: column.header(),
                value: String::new(),
                line,
            });
        }
        Ok(value)
    }

    /// `None` when the data value is a null token; the cell then stays
    /// missing in the wide table.
    fn parse_row(&self, row: &StringRecord) -> Result<Option<RatingRecord>> {
        let line = row.position().map_or(0, csv::Position::line);
        let task_id = self.required(row, SourceColumn::TaskId, line)?;
        let key = TaskKey::new(
            self.required(row, SourceColumn::OccupationCode, line)?,
            self.required(row, SourceColumn::OccupationTitle, line)?,
            TaskId::new(task_id),
            self.required(row, SourceColumn::Task, line)?,
        );
        let scale = Scale::from_source_name(self.required(row, SourceColumn::ScaleName, line)?)
            .map_err(|source| IngestError::InvalidRating { line, source })?;
        let category = scale
            .parse_category(self.cell(row, SourceColumn::Category), task_id)
            .map_err(|source| IngestError::InvalidRating { line, source })?;
        let raw_value = self.cell(row, SourceColumn::DataValue);
        if is_null_token(raw_value) {
            return Ok(None);
        }
        let data_value = parse_f64(raw_value).ok_or_else(|| IngestError::InvalidValue {
            column: SourceColumn::DataValue.header(),
            value: raw_value.to_string(),
            line,
        })?;
        Ok(Some(RatingRecord::new(key, scale, category, data_value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiter_follows_extension() {
        assert_eq!(delimiter_for_path(Path::new("Task Ratings.txt")), b'\t');
        assert_eq!(delimiter_for_path(Path::new("ratings.TSV")), b'\t');
        assert_eq!(delimiter_for_path(Path::new("ratings.csv")), b',');
        assert_eq!(delimiter_for_path(Path::new("ratings")), b',');
    }

    #[test]
    fn headers_collapse_whitespace() {
        assert_eq!(normalize_header("\u{feff}O*NET-SOC  Code "), "O*NET-SOC Code");
        assert_eq!(normalize_header(" Data\tValue"), "Data Value");
    }
}
