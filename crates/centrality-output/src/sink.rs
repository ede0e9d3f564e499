//! Incremental proportions output.
//!
//! The header goes out when the sink is opened; each occupation batch is
//! appended as soon as it has been annotated.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::debug;

use centrality_common::format_optional;
use centrality_model::ProportionRow;
use centrality_transform::OccupationBatch;

use crate::common::csv_writer;
use crate::tables::{TableStage, proportion_headers, task_record};

/// Counts of what a sink received.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SinkReport {
    pub batches: usize,
    pub rows: usize,
}

/// Destination for annotated occupation batches.
pub trait ProportionSink {
    fn write_batch(&mut self, batch: &OccupationBatch) -> Result<()>;

    /// Flush anything buffered. Further writes are an error.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl ProportionSink for Vec<ProportionRow> {
    fn write_batch(&mut self, batch: &OccupationBatch) -> Result<()> {
        self.extend(batch.rows.iter().cloned());
        Ok(())
    }
}

/// CSV file sink.
///
/// Dropping the sink without calling [`ProportionSink::finish`] still flushes
/// the rows written so far: `csv::Writer` flushes into the `BufWriter` on
/// drop, and the `BufWriter` flushes into the file.
pub struct CsvProportionSink {
    path: PathBuf,
    writer: Option<csv::Writer<BufWriter<File>>>,
}

impl CsvProportionSink {
    /// Create (or truncate) `path` and write the header.
    pub fn create(path: &Path) -> Result<Self> {
        let mut writer = csv_writer(path)?;
        writer
            .write_record(proportion_headers())
            .with_context(|| format!("write header to {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: Some(writer),
        })
    }
}

impl ProportionSink for CsvProportionSink {
    fn write_batch(&mut self, batch: &OccupationBatch) -> Result<()> {
        let Some(writer) = self.writer.as_mut() else {
            bail!("{} is already finished", self.path.display());
        };
        for row in &batch.rows {
            writer
                .write_record(proportion_record(row))
                .with_context(|| format!("append to {}", self.path.display()))?;
        }
        debug!(
            occupation_code = %batch.occupation_code,
            rows = batch.rows.len(),
            "appended occupation batch"
        );
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if let Some(mut writer) = self.writer.take() {
            writer
                .flush()
                .with_context(|| format!("flush {}", self.path.display()))?;
        }
        Ok(())
    }
}

fn proportion_record(row: &ProportionRow) -> Vec<String> {
    let mut record = task_record(&row.task, TableStage::Normalized);
    record.extend(row.proportions.values().into_iter().map(format_optional));
    record
}

/// Feed every batch to `sink`, then finish it.
///
/// Stops at the first failing batch; the sink is left for its owner to drop.
pub fn drain_batches<S, I>(sink: &mut S, batches: I) -> Result<SinkReport>
where
    S: ProportionSink + ?Sized,
    I: IntoIterator<Item = OccupationBatch>,
{
    let mut report = SinkReport::default();
    for batch in batches {
        sink.write_batch(&batch)?;
        report.batches += 1;
        report.rows += batch.rows.len();
    }
    sink.finish()?;
    Ok(report)
}

/// Write the proportions table at `path` from a stream of batches.
///
/// The file is open only for the duration of the call and is flushed on
/// every exit path.
pub fn write_proportions<I>(path: &Path, batches: I) -> Result<SinkReport>
where
    I: IntoIterator<Item = OccupationBatch>,
{
    let mut sink = CsvProportionSink::create(path)?;
    let report = drain_batches(&mut sink, batches)?;
    debug!(path = %path.display(), batches = report.batches, rows = report.rows, "wrote proportions");
    Ok(report)
}
