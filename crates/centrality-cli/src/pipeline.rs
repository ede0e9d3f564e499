//! Scoring pipeline with explicit stages.
//!
//! 1. **Ingest**: read the long-format ratings table
//! 2. **Reshape**: pivot ratings into one wide row per occupation/task
//! 3. **Normalize**: min-max scale the metrics and derive `Average Frequency`
//! 4. **Proportions**: annotate each occupation group and stream it to the sink
//!
//! Each stage fully consumes the previous stage's output.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use centrality_ingest::{IngestOptions, read_rating_records};
use centrality_model::{RatingRecord, TaskRow, Weights};
use centrality_output::{PROPORTIONS_FILE, SinkReport, TableStage, write_proportions, write_task_table};
use centrality_transform::{
    MetricColumns, MetricSummary, NormalizeReport, ProportionCalculator, ReshapeReport, reshape,
};

/// Where, and whether, artifacts are written.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub output_dir: PathBuf,
    /// Write the reshaped and normalized tables.
    pub snapshots: bool,
    /// Compute everything but write nothing.
    pub dry_run: bool,
}

impl OutputConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            snapshots: true,
            dry_run: false,
        }
    }

    pub fn snapshot_path(&self, stage: TableStage) -> Option<PathBuf> {
        (self.snapshots && !self.dry_run).then(|| self.output_dir.join(stage.file_name()))
    }

    pub fn proportions_path(&self) -> Option<PathBuf> {
        (!self.dry_run).then(|| self.output_dir.join(PROPORTIONS_FILE))
    }
}

// ============================================================================
// Stage 1: Ingest
// ============================================================================

pub fn ingest(input: &Path, options: &IngestOptions) -> Result<Vec<RatingRecord>> {
    let span = info_span!("ingest", input = %input.display());
    let _guard = span.enter();
    let start = Instant::now();
    let records = read_rating_records(input, options)
        .with_context(|| format!("read ratings from {}", input.display()))?;
    info!(
        records = records.len(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(records)
}

// ============================================================================
// Stage 2: Reshape
// ============================================================================

#[derive(Debug)]
pub struct ReshapeResult {
    pub rows: Vec<TaskRow>,
    pub report: ReshapeReport,
    pub snapshot: Option<PathBuf>,
}

pub fn reshape_ratings(records: &[RatingRecord], output: &OutputConfig) -> Result<ReshapeResult> {
    let span = info_span!("reshape");
    let _guard = span.enter();
    let start = Instant::now();
    let reshaped = reshape(records).context("reshape ratings")?;
    let snapshot = write_snapshot(output, &reshaped.rows, TableStage::Reshaped)?;
    info!(
        tasks = reshaped.report.tasks,
        duplicates = reshaped.report.duplicates,
        duration_ms = start.elapsed().as_millis(),
        "reshape complete"
    );
    Ok(ReshapeResult {
        rows: reshaped.rows,
        report: reshaped.report,
        snapshot,
    })
}

// ============================================================================
// Stage 3: Normalize
// ============================================================================

#[derive(Debug)]
pub struct NormalizeResult {
    pub report: NormalizeReport,
    pub means: Vec<MetricSummary>,
    pub snapshot: Option<PathBuf>,
}

pub fn normalize_rows(rows: &mut [TaskRow], output: &OutputConfig) -> Result<NormalizeResult> {
    let span = info_span!("normalize", tasks = rows.len());
    let _guard = span.enter();
    let start = Instant::now();
    let report = centrality_transform::normalize(rows);
    let means = MetricColumns::from_normalized(rows)
        .summarize()
        .context("summarize normalized metrics")?;
    log_means(&means);
    let snapshot = write_snapshot(output, rows, TableStage::Normalized)?;
    info!(
        degenerate_columns = report.degenerate_columns().count(),
        duration_ms = start.elapsed().as_millis(),
        "normalize complete"
    );
    Ok(NormalizeResult {
        report,
        means,
        snapshot,
    })
}

// ============================================================================
// Stage 4: Proportions
// ============================================================================

#[derive(Debug)]
pub struct ProportionResult {
    pub occupations: usize,
    pub rows: usize,
    pub means: Vec<MetricSummary>,
    pub path: Option<PathBuf>,
}

/// Annotate occupation groups one at a time and append each to the sink.
pub fn compute_proportions(
    rows: Vec<TaskRow>,
    weights: Weights,
    output: &OutputConfig,
) -> Result<ProportionResult> {
    let span = info_span!("proportions", tasks = rows.len());
    let _guard = span.enter();
    let start = Instant::now();
    let calculator = ProportionCalculator::new(weights).context("configure weights")?;
    let mut columns = MetricColumns::proportions();
    let batches = calculator
        .batches(rows)
        .inspect(|batch| columns.push_proportions(&batch.rows));

    let path = output.proportions_path();
    let report = match &path {
        Some(path) => write_proportions(path, batches)
            .with_context(|| format!("write {}", path.display()))?,
        None => batches.fold(SinkReport::default(), |mut report, batch| {
            report.batches += 1;
            report.rows += batch.rows.len();
            report
        }),
    };

    let means = columns
        .summarize()
        .context("summarize proportion metrics")?;
    log_means(&means);
    info!(
        occupations = report.batches,
        rows = report.rows,
        duration_ms = start.elapsed().as_millis(),
        "proportions complete"
    );
    Ok(ProportionResult {
        occupations: report.batches,
        rows: report.rows,
        means,
        path,
    })
}

fn write_snapshot(output: &OutputConfig, rows: &[TaskRow], stage: TableStage) -> Result<Option<PathBuf>> {
    let Some(path) = output.snapshot_path(stage) else {
        return Ok(None);
    };
    write_task_table(&path, rows, stage).with_context(|| format!("write {}", path.display()))?;
    Ok(Some(path))
}

fn log_means(means: &[MetricSummary]) {
    for summary in means {
        info!(column = summary.column, mean = ?summary.mean, "column mean");
    }
}
